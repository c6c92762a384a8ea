//! One-dimensional elastoplastic stress update
//!
//! This crate integrates the stress response of a 1D elastoplastic bar under a prescribed
//! strain history. The stress update uses the closed-form return mapping available for
//! linear isotropic and linear kinematic hardening.
//!
//! # Example
//!
//! ```
//! use plast1d::prelude::*;
//! use plast1d::Error;
//!
//! fn main() -> Result<(), Error> {
//!     let strains = build_strain_profile(&[0.0, 0.03, 0.0], &[4, 8])?;
//!     let mut param = ParamMaterial::new();
//!     param.young(1000.0).tangent(100.0).y0(10.0);
//!     let model = make_material(Hardening::Kinematic, &param)?;
//!     let (stresses, plastic_strains) = integrate(&model, &strains);
//!     assert_eq!(stresses.len(), strains.len());
//!     assert_eq!(plastic_strains.len(), strains.len());
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Defines the errors returned by this crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Material parameters are incomplete or out of range
    #[error("validation error: {0}")]
    Validation(&'static str),

    /// Input sequences have incompatible lengths
    #[error("shape error: {0}")]
    Shape(&'static str),
}

pub mod base;
pub mod material;
pub mod prelude;
