//! Configuration types for coverage and overtime evaluation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the site the configuration describes.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteMetadata {
    /// The human-readable name of the site.
    pub name: String,
    /// The version or effective date of the configuration.
    pub version: String,
    /// Longest date range, in days, a single coverage request may span.
    #[serde(default = "default_max_range_days")]
    pub max_range_days: u32,
}

fn default_max_range_days() -> u32 {
    366
}

/// A crew and its staffing target.
#[derive(Debug, Clone, Deserialize)]
pub struct CrewConfig {
    /// The crew label (e.g., "A").
    pub label: String,
    /// Headcount the crew must field each day, if one has been set.
    #[serde(default)]
    pub required_staffing: Option<u32>,
}

/// Crews configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CrewsConfig {
    /// Crews in rotation order.
    pub crews: Vec<CrewConfig>,
}

/// Thresholds applied by the overtime accumulator.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimePolicy {
    /// Weekly hours above which work counts as overtime.
    pub standard_weekly_hours: Decimal,
    /// Percentage change between recent and prior averages that counts as a trend.
    pub trend_threshold_percent: Decimal,
    /// Window total above which an employee is flagged as high overtime.
    pub high_overtime_ceiling: Decimal,
}

impl Default for OvertimePolicy {
    fn default() -> Self {
        Self {
            standard_weekly_hours: Decimal::new(40, 0),
            trend_threshold_percent: Decimal::new(10, 0),
            high_overtime_ceiling: Decimal::new(60, 0),
        }
    }
}

/// The complete engine configuration loaded from YAML files.
///
/// Crew order is preserved and drives the order of coverage records.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Site metadata.
    metadata: SiteMetadata,
    /// Configured crews in rotation order.
    crews: Vec<CrewConfig>,
    /// Overtime thresholds.
    overtime: OvertimePolicy,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: SiteMetadata, crews: Vec<CrewConfig>, overtime: OvertimePolicy) -> Self {
        Self {
            metadata,
            crews,
            overtime,
        }
    }

    /// Returns the site metadata.
    pub fn site(&self) -> &SiteMetadata {
        &self.metadata
    }

    /// Returns all configured crews.
    pub fn crews(&self) -> &[CrewConfig] {
        &self.crews
    }

    /// Returns the overtime thresholds.
    pub fn overtime(&self) -> &OvertimePolicy {
        &self.overtime
    }

    /// Looks up a crew by label, failing with `UnknownCrew`.
    pub fn crew(&self, label: &str) -> EngineResult<&CrewConfig> {
        self.crews
            .iter()
            .find(|c| c.label == label)
            .ok_or_else(|| EngineError::UnknownCrew {
                crew: label.to_string(),
            })
    }

    /// Returns the staffing target for a crew.
    ///
    /// Fails with `UnknownCrew` for labels outside the configured set and
    /// with `MissingConfiguration` when the crew has no target.
    pub fn required_staffing(&self, label: &str) -> EngineResult<u32> {
        self.crew(label)?
            .required_staffing
            .ok_or_else(|| EngineError::MissingConfiguration {
                crew: label.to_string(),
                setting: "required_staffing".to_string(),
            })
    }
}
