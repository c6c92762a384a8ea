use crate::Error;
use serde::{Deserialize, Serialize};

/// Holds options controlling what the driver records along the loading path
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Enables the recording of the back-stress α and the yield stress Y
    pub save_internal_values: bool,

    /// Enables the recording of the algorithmic tangent modulus dσ/dε
    pub save_stiffness: bool,
}

impl Settings {
    /// Allocates a new instance (only stresses and plastic strains are recorded)
    pub fn new() -> Self {
        Settings::default()
    }

    /// Reads the settings from a JSON object (missing keys take the default values)
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|_| Error::Validation("cannot parse JSON settings"))
    }

    /// Enables the recording of the back-stress α and the yield stress Y
    pub fn set_save_internal_values(&mut self, flag: bool) -> &mut Self {
        self.save_internal_values = flag;
        self
    }

    /// Enables the recording of the algorithmic tangent modulus dσ/dε
    pub fn set_save_stiffness(&mut self, flag: bool) -> &mut Self {
        self.save_stiffness = flag;
        self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Settings;
    use crate::Error;

    #[test]
    fn setters_work() {
        let mut settings = Settings::new();
        assert_eq!(settings.save_internal_values, false);
        assert_eq!(settings.save_stiffness, false);
        settings.set_save_internal_values(true).set_save_stiffness(true);
        assert_eq!(settings.save_internal_values, true);
        assert_eq!(settings.save_stiffness, true);
    }

    #[test]
    fn from_json_works() -> Result<(), Error> {
        let settings = Settings::from_json(r#"{"save_stiffness": true}"#)?;
        assert_eq!(settings.save_internal_values, false);
        assert_eq!(settings.save_stiffness, true);
        assert_eq!(
            Settings::from_json(r#"{"save_stiffness": 1}"#).err(),
            Some(Error::Validation("cannot parse JSON settings"))
        );
        Ok(())
    }
}
