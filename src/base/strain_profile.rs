use crate::Error;

/// Holds a piecewise-linear strain path used to drive the stress update
///
/// The path is defined by anchor strains and the number of increments subdividing each segment.
/// Each segment contributes the half-open range `[ε_start, ε_end)`, and the last anchor is
/// appended at the end; thus, the final strain is exactly the last anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct StrainProfile {
    /// Holds the anchor strains
    pub anchors: Vec<f64>,

    /// Holds the number of increments of each segment
    pub steps: Vec<usize>,

    /// Holds the dense sequence of strains
    pub strains: Vec<f64>,
}

impl StrainProfile {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `anchors` -- the anchor strains (e.g., loading and unloading targets)
    /// * `steps` -- the number of increments between consecutive anchors; `steps.len() = anchors.len() - 1`
    pub fn new(anchors: &[f64], steps: &[usize]) -> Result<Self, Error> {
        let strains = build_strain_profile(anchors, steps)?;
        Ok(StrainProfile {
            anchors: anchors.to_vec(),
            steps: steps.to_vec(),
            strains,
        })
    }

    /// Returns the number of strain values
    pub fn len(&self) -> usize {
        self.strains.len()
    }

    /// Returns true if the profile holds no strain values
    pub fn is_empty(&self) -> bool {
        self.strains.is_empty()
    }

    /// Returns the strain increments Δε between consecutive points
    pub fn increments(&self) -> impl Iterator<Item = f64> + '_ {
        self.strains.windows(2).map(|w| w[1] - w[0])
    }
}

/// Builds a dense strain sequence from anchor strains and the number of increments per segment
///
/// Each segment `i` generates `steps[i]` equally spaced values starting at `anchors[i]` and
/// ending before `anchors[i+1]`. The final anchor is appended once; thus:
///
/// ```text
/// len = 1 + Σ steps
/// ```
///
/// # Input
///
/// * `anchors` -- the anchor strains
/// * `steps` -- the number of increments between consecutive anchors; `steps.len() = anchors.len() - 1`
pub fn build_strain_profile(anchors: &[f64], steps: &[usize]) -> Result<Vec<f64>, Error> {
    if anchors.is_empty() {
        return Err(Error::Shape("at least one anchor strain is required"));
    }
    if steps.len() != anchors.len() - 1 {
        return Err(Error::Shape("the number of step counts must equal the number of anchors minus one"));
    }
    let total: usize = steps.iter().sum();
    let mut strains = Vec::with_capacity(total + 1);
    for (pair, &n) in anchors.windows(2).zip(steps) {
        let (start, end) = (pair[0], pair[1]);
        let delta = (end - start) / (n as f64);
        for k in 0..n {
            strains.push(start + (k as f64) * delta);
        }
    }
    strains.push(anchors[anchors.len() - 1]);
    Ok(strains)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
