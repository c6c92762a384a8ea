//! Implements the elastoplastic model and the driver of the stress update

mod driver;
mod elastoplastic;
mod hardening_trait;
mod isotropic;
mod kinematic;
mod local_history;
mod local_state;
mod material_parameters;
mod settings;
pub use crate::material::driver::*;
pub use crate::material::elastoplastic::*;
pub use crate::material::hardening_trait::*;
pub use crate::material::isotropic::*;
pub use crate::material::kinematic::*;
pub use crate::material::local_history::*;
pub use crate::material::local_state::*;
pub use crate::material::material_parameters::*;
pub use crate::material::settings::*;
