use super::{ElastoPlastic, History, Settings};
use crate::base::StrainProfile;
use log::{debug, trace};
use rayon::prelude::*;

/// Drives the stress update along strain paths
///
/// The driver starts from the unstressed state and updates the stress once per strain
/// increment (the difference between consecutive strains).
pub struct Driver<'a> {
    /// Holds the (shared) elastoplastic model
    model: &'a ElastoPlastic,

    /// Holds the recording options
    settings: Settings,
}

impl<'a> Driver<'a> {
    /// Allocates a new instance
    pub fn new(model: &'a ElastoPlastic, settings: Settings) -> Self {
        Driver { model, settings }
    }

    /// Follows a strain path and returns the history of results
    ///
    /// The history has the same length as `strains`; an empty path yields an empty history.
    pub fn run(&self, strains: &[f64]) -> History {
        let mut history = History::new(strains.len());
        let first = match strains.first() {
            Some(strain) => *strain,
            None => return history,
        };
        let mut state = self.model.initial_state();
        history.push(&self.settings, first, &state, self.model.stiffness(&state));
        for (i, pair) in strains.windows(2).enumerate() {
            let delta_strain = pair[1] - pair[0];
            self.model.update_stress(&mut state, delta_strain);
            if state.elastic {
                trace!("increment {}: elastic, Δε = {:e}, σ = {}", i, delta_strain, state.stress);
            } else {
                debug!(
                    "increment {}: elastoplastic, Δε = {:e}, Δεp = {:e}, σ = {}",
                    i, delta_strain, state.delta_plastic_strain, state.stress
                );
            }
            history.push(&self.settings, pair[1], &state, self.model.stiffness(&state));
        }
        debug!(
            "{:?} hardening: {} increments ({} elastoplastic)",
            self.model.kind(),
            strains.len() - 1,
            history.n_plastic()
        );
        history
    }

    /// Follows a strain profile and returns the history of results
    pub fn run_profile(&self, profile: &StrainProfile) -> History {
        self.run(&profile.strains)
    }

    /// Follows many independent strain paths in parallel
    ///
    /// Each path starts from the unstressed state. The results are returned in the order of `paths`.
    pub fn run_many<P>(&self, paths: &[P]) -> Vec<History>
    where
        P: AsRef<[f64]> + Sync,
    {
        paths.par_iter().map(|strains| self.run(strains.as_ref())).collect()
    }
}

/// Integrates the stress along a strain path
///
/// Returns the histories of stress and plastic strain; both have the same length as `strains`
/// and start with the unstressed state.
pub fn integrate(model: &ElastoPlastic, strains: &[f64]) -> (Vec<f64>, Vec<f64>) {
    Driver::new(model, Settings::new())
        .run(strains)
        .into_stress_and_plastic_strain()
}

/// Integrates the stress along many independent strain paths in parallel
///
/// Returns the pairs (stresses, plastic strains) in the order of `paths`.
pub fn integrate_many<P>(model: &ElastoPlastic, paths: &[P]) -> Vec<(Vec<f64>, Vec<f64>)>
where
    P: AsRef<[f64]> + Sync,
{
    Driver::new(model, Settings::new())
        .run_many(paths)
        .into_iter()
        .map(|history| history.into_stress_and_plastic_strain())
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
