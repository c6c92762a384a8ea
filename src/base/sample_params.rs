use super::ParamMaterial;

/// Holds samples of material parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns parameters with E = 1000, Et = 100, and Y0 = 10 (H is derived)
    pub fn param_textbook() -> ParamMaterial {
        ParamMaterial {
            young: Some(1000.0),
            hh: None,
            tangent: Some(100.0),
            y0: Some(10.0),
        }
    }

    /// Returns parameters resembling a mild steel in MPa (Et is derived)
    pub fn param_steel() -> ParamMaterial {
        ParamMaterial {
            young: Some(200_000.0), // MPa
            hh: Some(2_000.0),      // MPa
            tangent: None,
            y0: Some(250.0), // MPa
        }
    }

    /// Returns parameters resembling an aluminium alloy in MPa (E is derived)
    pub fn param_aluminium() -> ParamMaterial {
        ParamMaterial {
            young: None,
            hh: Some(700.0),     // MPa
            tangent: Some(693.0), // MPa
            y0: Some(275.0),     // MPa
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
