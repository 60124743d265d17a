//! Crew roster snapshots.
//!
//! A [`CrewRoster`] freezes the active membership of every configured crew
//! at construction time so that one computation window sees a consistent
//! roster.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};

use super::providers::RosterProvider;

/// An active employee's place on a crew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    /// The employee's identifier.
    pub employee_id: String,
    /// The position the employee fills.
    pub position: String,
}

/// Read-only snapshot of active crew membership.
///
/// Inactive employees and employees assigned to a crew label outside the
/// configured set are left out. Members of a crew are ordered by
/// employee id, and an employee id repeated by the provider is kept once.
///
/// # Example
///
/// ```
/// use coverage_engine::calculation::{CrewRoster, LedgerSnapshot};
/// use coverage_engine::config::{CrewConfig, EngineConfig, OvertimePolicy, SiteMetadata};
/// use coverage_engine::models::Employee;
///
/// let config = EngineConfig::new(
///     SiteMetadata {
///         name: "Site".to_string(),
///         version: "v1".to_string(),
///         max_range_days: 366,
///     },
///     vec![CrewConfig { label: "A".to_string(), required_staffing: Some(2) }],
///     OvertimePolicy::default(),
/// );
/// let snapshot = LedgerSnapshot::new(
///     vec![Employee::new("emp_001", "A", "operator")],
///     vec![],
///     vec![],
/// );
///
/// let roster = CrewRoster::snapshot(&snapshot, &config);
/// assert_eq!(roster.members("A").unwrap().len(), 1);
/// assert!(roster.members("Z").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CrewRoster {
    members: HashMap<String, Vec<RosterEntry>>,
}

impl CrewRoster {
    /// Copies active membership for every configured crew from the provider.
    pub fn snapshot<P: RosterProvider + ?Sized>(provider: &P, config: &EngineConfig) -> Self {
        let mut members: HashMap<String, Vec<RosterEntry>> = config
            .crews()
            .iter()
            .map(|c| (c.label.clone(), Vec::new()))
            .collect();

        let mut seen = HashSet::new();
        let mut skipped = 0usize;

        for employee in provider.employees() {
            if !employee.active || !seen.insert(employee.id.clone()) {
                continue;
            }
            match members.get_mut(&employee.crew) {
                Some(entries) => entries.push(RosterEntry {
                    employee_id: employee.id,
                    position: employee.position,
                }),
                None => skipped += 1,
            }
        }

        for entries in members.values_mut() {
            entries.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        }

        if skipped > 0 {
            debug!(skipped, "Ignored employees assigned to unconfigured crews");
        }

        Self { members }
    }

    /// Returns the active members of a crew.
    ///
    /// Fails with `UnknownCrew` if the label is not a configured crew.
    pub fn members(&self, crew: &str) -> EngineResult<&[RosterEntry]> {
        self.members
            .get(crew)
            .map(Vec::as_slice)
            .ok_or_else(|| EngineError::UnknownCrew {
                crew: crew.to_string(),
            })
    }

    /// Returns the ids of a crew's active members.
    pub fn member_ids(&self, crew: &str) -> EngineResult<HashSet<&str>> {
        Ok(self
            .members(crew)?
            .iter()
            .map(|e| e.employee_id.as_str())
            .collect())
    }
}
