//! Configuration loading functionality.
//!
//! This module loads the engine configuration from a YAML file and
//! validates it before handing it to callers.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

impl EngineConfig {
    /// Loads and validates configuration from a YAML file.
    ///
    /// Fields missing from the file fall back to their defaults, so a
    /// deployment only has to spell out what it overrides.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/payroll.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed [`EngineConfig`] on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - Any value is out of range (`InvalidConfig`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::EngineConfig;
    ///
    /// let config = EngineConfig::load("./config/payroll.yaml")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }
}
