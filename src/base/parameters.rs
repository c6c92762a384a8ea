use serde::{Deserialize, Serialize};

/// Specifies the hardening law of the elastoplastic model
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hardening {
    /// Linear isotropic hardening: the yield stress grows with the plastic strain
    ///
    /// ```text
    /// Y = Y0 + H εp
    /// ```
    Isotropic,

    /// Linear kinematic hardening: the yield surface translates with the back-stress α
    ///
    /// ```text
    /// f = |σ - α| - Y0
    /// ```
    Kinematic,
}

/// Holds the (possibly incomplete) parameters of the elastoplastic model
///
/// At least two of the moduli must be given; the remaining one is computed from:
///
/// ```text
/// 1/Et = 1/E + 1/H
/// ```
///
/// The JSON representation uses the keys `E`, `H`, `Et`, and `Y0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamMaterial {
    /// Young's modulus E
    #[serde(rename = "E", default, skip_serializing_if = "Option::is_none")]
    pub young: Option<f64>,

    /// Hardening modulus H
    #[serde(rename = "H", default, skip_serializing_if = "Option::is_none")]
    pub hh: Option<f64>,

    /// Tangent (elastoplastic) modulus Et
    #[serde(rename = "Et", default, skip_serializing_if = "Option::is_none")]
    pub tangent: Option<f64>,

    /// Initial yield stress Y0
    #[serde(rename = "Y0", default, skip_serializing_if = "Option::is_none")]
    pub y0: Option<f64>,
}

impl ParamMaterial {
    /// Allocates a new instance with all values missing
    pub fn new() -> Self {
        ParamMaterial::default()
    }

    /// Sets Young's modulus E
    pub fn young(&mut self, value: f64) -> &mut Self {
        self.young = Some(value);
        self
    }

    /// Sets the hardening modulus H
    pub fn hh(&mut self, value: f64) -> &mut Self {
        self.hh = Some(value);
        self
    }

    /// Sets the tangent modulus Et
    pub fn tangent(&mut self, value: f64) -> &mut Self {
        self.tangent = Some(value);
        self
    }

    /// Sets the initial yield stress Y0
    pub fn y0(&mut self, value: f64) -> &mut Self {
        self.y0 = Some(value);
        self
    }

    /// Returns the number of given moduli among E, H, and Et
    pub fn n_moduli(&self) -> usize {
        [self.young, self.hh, self.tangent].iter().filter(|v| v.is_some()).count()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
