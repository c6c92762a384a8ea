use super::{LocalState, MaterialParameters};
use crate::base::Hardening;

/// Specifies the functions distinguishing the hardening laws in the return mapping
///
/// The elastic trial, the yield check, and the plastic strain increment are shared by all
/// hardening laws (see [super::ElastoPlastic]); the hardening law only defines which stress
/// is compared with the yield stress and which internal variable evolves.
pub trait HardeningTrait: Send + Sync {
    /// Returns the hardening law
    fn kind(&self) -> Hardening;

    /// Calculates the stress measure compared with the yield stress
    ///
    /// # Input
    ///
    /// * `trial_stress` -- the elastic trial stress σ_trial
    /// * `state` -- the state at the beginning of the increment
    fn effective_stress(&self, trial_stress: f64, state: &LocalState) -> f64;

    /// Updates the internal variables after the plastic correction
    ///
    /// **Note:** `state.plastic_strain` already holds the updated value `εp + Δεp`.
    ///
    /// # Input
    ///
    /// * `state` -- the state being updated
    /// * `param` -- the material parameters
    /// * `direction` -- the flow direction `sign(η_trial)`
    /// * `delta_plastic_strain` -- the plastic strain increment Δεp
    fn harden(&self, state: &mut LocalState, param: &MaterialParameters, direction: f64, delta_plastic_strain: f64);
}
