use super::{HardeningTrait, Isotropic, Kinematic, LocalState, MaterialParameters};
use crate::base::{Hardening, ParamMaterial};
use crate::Error;

/// Implements the one-dimensional elastoplastic model with linear hardening
///
/// The stress update is the closed-form return mapping:
///
/// ```text
/// σ_trial = σ + E Δε
/// η_trial = σ_trial - α        (kinematic)  or  σ_trial  (isotropic)
/// f_trial = |η_trial| - Y
///
/// if f_trial ≤ 0:  σ_new = σ_trial                           (elastic)
/// else:            Δεp   = f_trial / (E + H)
///                  σ_new = σ_trial - sign(η_trial) E Δεp     (elastoplastic)
/// ```
///
/// followed by the update of the hardening variables (see [HardeningTrait]).
///
/// The model is read-only during the stress update; thus, a single instance may be shared
/// among threads, each one holding its own [LocalState].
pub struct ElastoPlastic {
    /// Holds the material parameters
    param: MaterialParameters,

    /// Holds the hardening law
    hardening: Box<dyn HardeningTrait>,
}

impl ElastoPlastic {
    /// Allocates a new instance
    pub fn new(kind: Hardening, param: &ParamMaterial) -> Result<Self, Error> {
        let param = MaterialParameters::new(param)?;
        Ok(ElastoPlastic::from_parameters(kind, param))
    }

    /// Allocates a new instance with validated parameters
    pub fn from_parameters(kind: Hardening, param: MaterialParameters) -> Self {
        let hardening: Box<dyn HardeningTrait> = match kind {
            Hardening::Isotropic => Box::new(Isotropic::new()),
            Hardening::Kinematic => Box::new(Kinematic::new()),
        };
        ElastoPlastic { param, hardening }
    }

    /// Allocates a new instance with parameters given as a JSON object (keys `E`, `H`, `Et`, `Y0`)
    pub fn from_json(kind: Hardening, json: &str) -> Result<Self, Error> {
        let param = MaterialParameters::from_json(json)?;
        Ok(ElastoPlastic::from_parameters(kind, param))
    }

    /// Returns the hardening law
    pub fn kind(&self) -> Hardening {
        self.hardening.kind()
    }

    /// Returns the material parameters
    pub fn parameters(&self) -> &MaterialParameters {
        &self.param
    }

    /// Returns the unstressed state at the beginning of a loading path
    pub fn initial_state(&self) -> LocalState {
        LocalState::new(self.param.y0())
    }

    /// Calculates the elastic trial stress `σ_trial = σ + E Δε`
    pub fn trial_stress(&self, stress: f64, delta_strain: f64) -> f64 {
        stress + self.param.young() * delta_strain
    }

    /// Calculates the yield function `f = |η| - Y` and whether the state is elastic (`f ≤ 0`)
    pub fn yield_function(&self, effective_stress: f64, yield_stress: f64) -> (f64, bool) {
        let f = f64::abs(effective_stress) - yield_stress;
        (f, f <= 0.0)
    }

    /// Calculates the plastic strain increment `Δεp = f_trial / (E + H)`
    pub fn plastic_increment(&self, f_trial: f64) -> f64 {
        f_trial / (self.param.young() + self.param.hh())
    }

    /// Calculates the isotropically hardened yield stress `Y = Y0 + H εp`
    pub fn hardened_yield_stress(&self, plastic_strain: f64) -> f64 {
        self.param.y0() + self.param.hh() * plastic_strain
    }

    /// Updates the state given the strain increment Δε
    ///
    /// A zero strain increment leaves the state unchanged.
    pub fn update_stress(&self, state: &mut LocalState, delta_strain: f64) {
        // reset flags
        state.elastic = true;
        state.delta_plastic_strain = 0.0;
        if delta_strain == 0.0 {
            return;
        }

        // trial stress
        let stress_trial = self.trial_stress(state.stress, delta_strain);
        let eta_trial = self.hardening.effective_stress(stress_trial, state);

        // elastic update
        let (f_trial, elastic) = self.yield_function(eta_trial, state.yield_stress);
        if elastic {
            state.stress = stress_trial;
            return;
        }

        // elastoplastic update (the correction uses the yield stress from the beginning of the increment)
        let direction = sign(eta_trial);
        let delta_plastic_strain = self.plastic_increment(f_trial);
        state.stress = stress_trial - direction * self.param.young() * delta_plastic_strain;
        state.plastic_strain += delta_plastic_strain;
        self.hardening.harden(state, &self.param, direction, delta_plastic_strain);
        state.elastic = false;
        state.delta_plastic_strain = delta_plastic_strain;
    }

    /// Returns the algorithmic tangent modulus dσ/dε of the last update
    ///
    /// ```text
    /// D = E                  (elastic)
    /// D = E H / (E + H)      (elastoplastic)
    /// ```
    pub fn stiffness(&self, state: &LocalState) -> f64 {
        let (young, hh) = (self.param.young(), self.param.hh());
        if state.elastic {
            young
        } else {
            young * hh / (young + hh)
        }
    }
}

/// Allocates a new elastoplastic model
///
/// # Input
///
/// * `kind` -- the hardening law
/// * `param` -- the parameters; at least two of E, H, Et and the initial yield stress Y0
pub fn make_material(kind: Hardening, param: &ParamMaterial) -> Result<ElastoPlastic, Error> {
    ElastoPlastic::new(kind, param)
}

/// Returns -1, 0, or +1 according to the sign of x
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
