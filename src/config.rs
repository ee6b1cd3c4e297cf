//! Configuration
//!
//! TOML configuration with environment-variable overrides, merged into the
//! engine's [`TableauConfig`]. Files are searched in order (first found
//! wins):
//!
//! 1. `./semtab.toml` - project-local
//! 2. `~/.config/semtab/config.toml` - user (XDG)
//!
//! Environment overrides:
//! - `SEMTAB_MAX_CONSTANTS` - constant-pool bound
//! - `SEMTAB_VERBOSE` - trace expansion to stderr (`true`/`false`)
//!
//! # Example
//!
//! ```toml
//! # semtab.toml
//! [engine]
//! max_constants = 10
//! verbose = false
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SemtabError};
use crate::tableau::{TableauConfig, DEFAULT_MAX_CONSTANTS};

/// Top-level configuration file schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SemtabConfig {
    pub engine: EngineConfig,
}

/// Tableau engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Constant-pool bound before the search reports unknown.
    pub max_constants: usize,
    /// Trace branch expansion to stderr.
    pub verbose: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_constants: DEFAULT_MAX_CONSTANTS,
            verbose: false,
        }
    }
}

impl SemtabConfig {
    /// Load from the first config file found, then apply environment
    /// overrides. Defaults when no file exists.
    pub fn load() -> Result<SemtabConfig> {
        let mut config = match find_config_file() {
            Some(path) => SemtabConfig::from_file(&path)?,
            None => SemtabConfig::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load a specific TOML file.
    pub fn from_file(path: &Path) -> Result<SemtabConfig> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Apply `SEMTAB_*` environment variables on top of file values.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(value) = env::var("SEMTAB_MAX_CONSTANTS") {
            self.engine.max_constants = value.parse().map_err(|_| {
                SemtabError::Config(format!("invalid SEMTAB_MAX_CONSTANTS: {}", value))
            })?;
        }
        if let Ok(value) = env::var("SEMTAB_VERBOSE") {
            self.engine.verbose = matches!(value.as_str(), "1" | "true" | "yes");
        }
        Ok(())
    }

    /// The engine configuration this file describes.
    pub fn tableau(&self) -> TableauConfig {
        TableauConfig {
            max_constants: self.engine.max_constants,
            verbose: self.engine.verbose,
        }
    }
}

fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("semtab.toml");
    if local.exists() {
        return Some(local);
    }
    if let Some(home) = env::var_os("HOME") {
        let xdg = PathBuf::from(home).join(".config/semtab/config.toml");
        if xdg.exists() {
            return Some(xdg);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SemtabConfig::default();
        assert_eq!(config.engine.max_constants, DEFAULT_MAX_CONSTANTS);
        assert!(!config.engine.verbose);
    }

    #[test]
    fn test_parse_toml() {
        let config: SemtabConfig = toml::from_str(
            r#"
            [engine]
            max_constants = 25
            verbose = true
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.max_constants, 25);
        assert!(config.engine.verbose);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SemtabConfig = toml::from_str("[engine]\nverbose = true\n").unwrap();
        assert_eq!(config.engine.max_constants, DEFAULT_MAX_CONSTANTS);
        assert!(config.engine.verbose);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(toml::from_str::<SemtabConfig>("[engine]\nmax_constants = \"many\"\n").is_err());
    }

    #[test]
    fn test_tableau_view() {
        let mut config = SemtabConfig::default();
        config.engine.max_constants = 3;
        assert_eq!(config.tableau().max_constants, 3);
    }
}
