//! Implements the input structures of a stress-update: parameters and strain paths

mod parameters;
mod sample_params;
mod strain_profile;
pub use crate::base::parameters::*;
pub use crate::base::sample_params::*;
pub use crate::base::strain_profile::*;
