//! Makes available common structures needed to run a stress-update
//!
//! You may write `use plast1d::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{build_strain_profile, Hardening, ParamMaterial, SampleParams, StrainProfile};
pub use crate::material::{integrate, integrate_many, make_material, Driver, History, Settings};
pub use crate::material::{ElastoPlastic, HardeningTrait, LocalState, MaterialParameters};
