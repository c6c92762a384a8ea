use super::{HardeningTrait, LocalState, MaterialParameters};
use crate::base::Hardening;

/// Implements linear kinematic hardening
///
/// The yield function and the hardening rule are:
///
/// ```text
/// f = |σ - α| - Y0
/// Δα = sign(σ - α) H Δεp
/// ```
pub struct Kinematic {}

impl Kinematic {
    /// Allocates a new instance
    pub fn new() -> Self {
        Kinematic {}
    }
}

impl HardeningTrait for Kinematic {
    fn kind(&self) -> Hardening {
        Hardening::Kinematic
    }

    fn effective_stress(&self, trial_stress: f64, state: &LocalState) -> f64 {
        trial_stress - state.back_stress
    }

    fn harden(&self, state: &mut LocalState, param: &MaterialParameters, direction: f64, delta_plastic_strain: f64) {
        state.back_stress += direction * param.hh() * delta_plastic_strain;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
