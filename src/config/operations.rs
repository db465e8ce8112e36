//! Config loading, discovery, and validation.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{FlotillaError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FlotillaError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping.
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| FlotillaError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Resolve the config for this invocation.
    ///
    /// Lookup order:
    /// 1. `explicit` (from `--settings` or `FLOTILLA_CONFIG`), which must exist
    /// 2. `flotilla.yaml` in `cwd`, if present
    /// 3. built-in defaults
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit config");
            return Self::load(path);
        }

        let candidate = cwd.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading config from working directory");
            return Self::load(candidate);
        }

        Ok(Config::default())
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `executable` must be non-empty
    /// - `default_tools` must be non-empty
    /// - `default_coverage` must be at most 100
    pub fn validate(&self) -> Result<()> {
        if self.executable.trim().is_empty() {
            return Err(FlotillaError::Config(
                "executable must not be empty".to_string(),
            ));
        }

        if self.default_tools.trim().is_empty() {
            return Err(FlotillaError::Config(
                "default_tools must not be empty".to_string(),
            ));
        }

        if self.default_coverage > 100 {
            return Err(FlotillaError::Config(format!(
                "default_coverage must be between 0 and 100 (found {})",
                self.default_coverage
            )));
        }

        Ok(())
    }
}
