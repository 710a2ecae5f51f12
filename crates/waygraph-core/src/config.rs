//! Solver configuration for waygraph
//!
//! Read from `--config <path>`, else from `waygraph/config.toml` under the
//! user config directory (`WAYGRAPH_CONFIG_DIR` overrides the directory).
//! Missing files fall back to defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{Result, WaygraphError};

pub use types::{GridSection, SolverConfig, SolverSection, DEFAULT_WAY_MODULUS};

const CONFIG_DIR: &str = "waygraph";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "WAYGRAPH_CONFIG_DIR";

impl SolverConfig {
    /// Default config file location, if a config directory can be determined
    pub fn default_path() -> Option<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SolverConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the explicit file, or the default location when it exists, or defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(WaygraphError::not_found("config file", path.display()));
            }
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Reject settings no solver can use
    pub fn validate(&self) -> Result<()> {
        if self.solver.way_modulus == 0 {
            bail_invalid!("solver.way_modulus", self.solver.way_modulus);
        }
        if self.grid.passable.is_empty() {
            bail_invalid!("grid.passable", "[] (at least one character required)");
        }
        Ok(())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WaygraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
