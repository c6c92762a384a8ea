use serde::{Deserialize, Serialize};

/// Holds the state of the material at one point of the loading path
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocalState {
    /// Holds the stress σ
    pub stress: f64,

    /// Holds the accumulated plastic strain εp
    pub plastic_strain: f64,

    /// Holds the back-stress α (always zero with isotropic hardening)
    pub back_stress: f64,

    /// Holds the current yield stress Y
    ///
    /// Equals Y0 with kinematic hardening; equals `Y0 + H εp` with isotropic hardening.
    pub yield_stress: f64,

    /// Holds the elastic (vs elastoplastic) flag of the last update
    pub elastic: bool,

    /// Holds the plastic strain increment Δεp of the last update
    pub delta_plastic_strain: f64,
}

impl LocalState {
    /// Allocates a new (unstressed) instance
    ///
    /// # Input
    ///
    /// * `y0` -- the initial yield stress
    pub fn new(y0: f64) -> Self {
        LocalState {
            stress: 0.0,
            plastic_strain: 0.0,
            back_stress: 0.0,
            yield_stress: y0,
            elastic: true,
            delta_plastic_strain: 0.0,
        }
    }

    /// Returns the stress relative to the back-stress; i.e., `η = σ - α`
    pub fn relative_stress(&self) -> f64 {
        self.stress - self.back_stress
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
