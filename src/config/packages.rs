use crate::domain::model::Package;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// List of sensor packages loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagesConfig {
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl PackagesConfig {
    /// 從 TOML 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrackerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TrackerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn samples() -> Self {
        Self {
            packages: Package::samples(),
        }
    }
}

impl Validate for PackagesConfig {
    // Tags and arity are left to the dispatcher so that one bad package
    // does not reject the whole file.
    fn validate(&self) -> Result<()> {
        if self.packages.is_empty() {
            return Err(TrackerError::ConfigError {
                message: "No packages defined".to_string(),
            });
        }
        for (index, package) in self.packages.iter().enumerate() {
            validate_non_empty_string(
                &format!("packages[{}].workout_type", index),
                &package.workout_type,
            )?;
        }
        Ok(())
    }
}
