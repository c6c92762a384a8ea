use super::{HardeningTrait, LocalState, MaterialParameters};
use crate::base::Hardening;

/// Implements linear isotropic hardening
///
/// The yield function and the hardening rule are:
///
/// ```text
/// f = |σ| - Y
/// Y = Y0 + H εp
/// ```
pub struct Isotropic {}

impl Isotropic {
    /// Allocates a new instance
    pub fn new() -> Self {
        Isotropic {}
    }
}

impl HardeningTrait for Isotropic {
    fn kind(&self) -> Hardening {
        Hardening::Isotropic
    }

    fn effective_stress(&self, trial_stress: f64, _state: &LocalState) -> f64 {
        trial_stress
    }

    fn harden(&self, state: &mut LocalState, param: &MaterialParameters, _direction: f64, _delta_plastic_strain: f64) {
        state.yield_stress = param.y0() + param.hh() * state.plastic_strain;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
