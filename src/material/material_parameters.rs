use crate::base::ParamMaterial;
use crate::Error;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::fmt;

/// Holds the complete and validated set of parameters of the elastoplastic model
///
/// The moduli satisfy:
///
/// ```text
/// 1/Et = 1/E + 1/H
/// ```
///
/// **Note:** The missing modulus is computed as the absolute value of the algebraic inversion
/// of the relation above. Thus, inconsistent inputs such as `Et > E` (which imply a negative
/// modulus) are not rejected; a warning is logged instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialParameters {
    /// Young's modulus E
    young: f64,

    /// Hardening modulus H
    hh: f64,

    /// Tangent modulus Et
    tangent: f64,

    /// Initial yield stress Y0
    y0: f64,
}

impl MaterialParameters {
    /// Allocates a new instance, computing the missing modulus
    ///
    /// The checks are performed in the following order:
    ///
    /// 1. at least two of E, H, Et must be given (`insufficient moduli`)
    /// 2. all given values must be finite numbers (`non-numeric input`)
    /// 3. all given values must be positive (`non-positive input`)
    /// 4. the derived modulus must be finite (`non-numeric input`)
    /// 5. Y0 must be given (`missing yield stress`)
    pub fn new(param: &ParamMaterial) -> Result<Self, Error> {
        if param.n_moduli() < 2 {
            return Err(Error::Validation("insufficient moduli"));
        }
        let given = [param.young, param.hh, param.tangent, param.y0];
        if given.iter().flatten().any(|v| !v.is_finite()) {
            return Err(Error::Validation("non-numeric input"));
        }
        if given.iter().flatten().any(|v| *v <= 0.0) {
            return Err(Error::Validation("non-positive input"));
        }
        let (young, hh, tangent) = match (param.young, param.hh, param.tangent) {
            (Some(e), Some(h), None) => (e, h, invert("Et", 1.0 / e + 1.0 / h)?),
            (Some(e), None, Some(et)) => (e, invert("H", 1.0 / et - 1.0 / e)?, et),
            (None, Some(h), Some(et)) => (invert("E", 1.0 / et - 1.0 / h)?, h, et),
            (Some(e), Some(h), Some(et)) => {
                let residual = 1.0 / et - (1.0 / e + 1.0 / h);
                if f64::abs(residual * et) > 1e-10 {
                    warn!("the given moduli E = {}, H = {}, Et = {} do not satisfy 1/Et = 1/E + 1/H", e, h, et);
                }
                (e, h, et)
            }
            _ => return Err(Error::Validation("insufficient moduli")),
        };
        let y0 = param.y0.ok_or(Error::Validation("missing yield stress"))?;
        Ok(MaterialParameters { young, hh, tangent, y0 })
    }

    /// Allocates a new instance from a JSON object with the keys `E`, `H`, `Et`, and `Y0`
    ///
    /// A `null` value is handled as a missing value.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(json).map_err(|_| Error::Validation("cannot parse JSON parameters"))?;
        match value {
            Value::Object(map) => MaterialParameters::from_map(&map),
            _ => Err(Error::Validation("parameters must be given as a JSON object")),
        }
    }

    /// Allocates a new instance from a map of named values with the keys `E`, `H`, `Et`, and `Y0`
    ///
    /// A `null` value is handled as a missing value. Any other non-number value (e.g., a string)
    /// is reported as `non-numeric input`.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, Error> {
        let entry = |key: &str| map.get(key).filter(|v| !v.is_null());
        let (young, hh, tangent, y0) = (entry("E"), entry("H"), entry("Et"), entry("Y0"));
        let n_moduli = [young, hh, tangent].iter().filter(|v| v.is_some()).count();
        if n_moduli < 2 {
            return Err(Error::Validation("insufficient moduli"));
        }
        let param = ParamMaterial {
            young: number(young)?,
            hh: number(hh)?,
            tangent: number(tangent)?,
            y0: number(y0)?,
        };
        MaterialParameters::new(&param)
    }

    /// Returns Young's modulus E
    pub fn young(&self) -> f64 {
        self.young
    }

    /// Returns the hardening modulus H
    pub fn hh(&self) -> f64 {
        self.hh
    }

    /// Returns the tangent modulus Et
    pub fn tangent(&self) -> f64 {
        self.tangent
    }

    /// Returns the initial yield stress Y0
    pub fn y0(&self) -> f64 {
        self.y0
    }
}

/// Computes a modulus from its compliance; i.e., `|1/compliance|`
fn invert(name: &str, compliance: f64) -> Result<f64, Error> {
    let algebraic = 1.0 / compliance;
    if algebraic < 0.0 {
        warn!("{} = {} is negative; using its absolute value", name, algebraic);
    }
    let value = f64::abs(algebraic);
    if !value.is_finite() {
        return Err(Error::Validation("non-numeric input"));
    }
    debug!("derived {} = {}", name, value);
    Ok(value)
}

/// Extracts a number from an optional JSON value
fn number(value: Option<&Value>) -> Result<Option<f64>, Error> {
    match value {
        None => Ok(None),
        Some(v) => v.as_f64().map(Some).ok_or(Error::Validation("non-numeric input")),
    }
}

impl fmt::Display for MaterialParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Material parameters")?;
        writeln!(f, "===================")?;
        writeln!(f, "E = {:?}", self.young)?;
        writeln!(f, "H = {:?}", self.hh)?;
        writeln!(f, "Et = {:?}", self.tangent)?;
        writeln!(f, "Y0 = {:?}", self.y0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
