use crate::error::{OrreryError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PRECISION: usize = 4;
const MAX_PRECISION: usize = 10;

/// Configuration for orrery, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrreryConfig {
    /// Name of the backing file inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Decimal places shown when listing numbers
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl OrreryConfig {
    pub const KEYS: [&'static str; 2] = ["data-file", "precision"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(OrreryError::Io)?;
        let mut config: OrreryConfig =
            serde_json::from_str(&content).map_err(|e| OrreryError::Config(e.to_string()))?;
        config.data_file = check_data_file(&config.data_file).map_err(|e| {
            OrreryError::Config(format!("{} (edit {})", e, config_path.display()))
        })?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(OrreryError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(OrreryError::Serialization)?;
        fs::write(config_path, content).map_err(OrreryError::Io)?;
        Ok(())
    }

    /// Current value of a key, rendered as text
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data-file" => Ok(self.data_file.clone()),
            "precision" => Ok(self.precision.to_string()),
            other => Err(OrreryError::UnknownField(other.to_string())),
        }
    }

    /// Validate and set a key from text
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => self.set_data_file(value),
            "precision" => {
                let precision: usize = value.trim().parse().map_err(|_| {
                    OrreryError::Config(format!("precision must be a whole number, got '{}'", value))
                })?;
                if precision > MAX_PRECISION {
                    return Err(OrreryError::Config(format!(
                        "precision must be at most {}",
                        MAX_PRECISION
                    )));
                }
                self.precision = precision;
                Ok(())
            }
            other => Err(OrreryError::UnknownField(other.to_string())),
        }
    }

    /// Set the data file name (a bare file name, no directories)
    pub fn set_data_file(&mut self, name: &str) -> Result<()> {
        self.data_file = check_data_file(name).map_err(OrreryError::Config)?;
        Ok(())
    }
}

/// A data file must stay inside the data directory and never shadow the config.
fn check_data_file(name: &str) -> std::result::Result<String, String> {
    let name = name.trim();
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(format!("data-file must be a plain file name, got '{}'", name));
    }
    if name == CONFIG_FILENAME {
        return Err(format!("data-file cannot be {}", CONFIG_FILENAME));
    }
    Ok(name.to_string())
}
