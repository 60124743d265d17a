//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading site
//! configurations from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{CrewConfig, CrewsConfig, EngineConfig, OvertimePolicy, SiteMetadata};

/// Loads and provides access to site configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query crews, staffing targets and overtime
/// thresholds.
///
/// # Directory Structure
///
/// ```text
/// config/plant/
/// ├── engine.yaml     # Site metadata
/// ├── crews.yaml      # Crew labels and staffing targets
/// └── overtime.yaml   # Overtime thresholds (optional, defaults apply)
/// ```
///
/// # Example
///
/// ```no_run
/// use coverage_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/plant").unwrap();
/// let required = loader.config().required_staffing("A").unwrap();
/// println!("Crew A needs {} people", required);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `engine.yaml` or `crews.yaml` is missing
    /// - Any file contains invalid YAML
    /// - The crew list is empty or repeats a label
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<SiteMetadata>(&path.join("engine.yaml"))?;

        let crews_path = path.join("crews.yaml");
        let crews_config = Self::load_yaml::<CrewsConfig>(&crews_path)?;
        Self::validate_crews(&crews_config.crews, &crews_path)?;

        let overtime_path = path.join("overtime.yaml");
        let overtime = if overtime_path.exists() {
            Self::load_yaml::<OvertimePolicy>(&overtime_path)?
        } else {
            debug!(path = %overtime_path.display(), "No overtime.yaml, using default policy");
            OvertimePolicy::default()
        };

        Ok(Self::from_config(EngineConfig::new(
            metadata,
            crews_config.crews,
            overtime,
        )))
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_crews(crews: &[CrewConfig], path: &Path) -> EngineResult<()> {
        if crews.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: "at least one crew must be configured".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for crew in crews {
            if !seen.insert(crew.label.as_str()) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate crew label '{}'", crew.label),
                });
            }
        }

        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the site metadata.
    pub fn site(&self) -> &SiteMetadata {
        self.config.site()
    }

    /// Returns the configured crew labels in rotation order.
    pub fn crew_labels(&self) -> Vec<&str> {
        self.config
            .crews()
            .iter()
            .map(|c| c.label.as_str())
            .collect()
    }
}
