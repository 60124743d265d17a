//! Configuration loading and management for the Coverage Engine.
//!
//! This module provides functionality to load site configurations from YAML
//! files, including the configured crew set, per-crew staffing targets and
//! overtime thresholds.
//!
//! # Example
//!
//! ```no_run
//! use coverage_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/plant").unwrap();
//! println!("Loaded site: {}", config.site().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CrewConfig, CrewsConfig, EngineConfig, OvertimePolicy, SiteMetadata};
