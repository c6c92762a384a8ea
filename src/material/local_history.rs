use super::{LocalState, Settings};
use serde::{Deserialize, Serialize};

/// Holds the sequence of results computed along a loading path
///
/// All recorded arrays have the same length as the strain path; the first entry corresponds
/// to the unstressed initial state. The arrays of internal values and stiffness remain empty
/// unless enabled in [Settings].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    /// Holds the total strains ε
    pub strain: Vec<f64>,

    /// Holds the stresses σ
    pub stress: Vec<f64>,

    /// Holds the accumulated plastic strains εp
    pub plastic_strain: Vec<f64>,

    /// Holds the elastic (vs elastoplastic) flags
    pub elastic: Vec<bool>,

    /// Holds the back-stresses α (if enabled)
    pub back_stress: Vec<f64>,

    /// Holds the yield stresses Y (if enabled)
    pub yield_stress: Vec<f64>,

    /// Holds the algorithmic tangent moduli (if enabled)
    pub stiffness: Vec<f64>,
}

impl History {
    /// Allocates a new instance with reserved space for `npoint` entries
    pub fn new(npoint: usize) -> Self {
        History {
            strain: Vec::with_capacity(npoint),
            stress: Vec::with_capacity(npoint),
            plastic_strain: Vec::with_capacity(npoint),
            elastic: Vec::with_capacity(npoint),
            back_stress: Vec::new(),
            yield_stress: Vec::new(),
            stiffness: Vec::new(),
        }
    }

    /// Appends a new entry
    pub fn push(&mut self, settings: &Settings, strain: f64, state: &LocalState, stiffness: f64) {
        self.strain.push(strain);
        self.stress.push(state.stress);
        self.plastic_strain.push(state.plastic_strain);
        self.elastic.push(state.elastic);
        if settings.save_internal_values {
            self.back_stress.push(state.back_stress);
            self.yield_stress.push(state.yield_stress);
        }
        if settings.save_stiffness {
            self.stiffness.push(stiffness);
        }
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.stress.len()
    }

    /// Returns true if there are no entries
    pub fn is_empty(&self) -> bool {
        self.stress.is_empty()
    }

    /// Returns the number of elastoplastic updates
    pub fn n_plastic(&self) -> usize {
        self.elastic.iter().filter(|e| !**e).count()
    }

    /// Converts the history into the pair (stresses, plastic strains)
    pub fn into_stress_and_plastic_strain(self) -> (Vec<f64>, Vec<f64>) {
        (self.stress, self.plastic_strain)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
