//! Employee model.
//!
//! This module defines the Employee struct for representing crew members
//! in the coverage engine.

use serde::{Deserialize, Serialize};

/// Represents an employee assigned to a crew.
///
/// Employees are created on import and never hard-deleted. A supervisor may
/// move them between crews or positions, and deactivation is a soft delete
/// that removes them from every roster snapshot taken afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The crew label the employee is assigned to (e.g., "A").
    pub crew: String,
    /// The position the employee fills on the crew (e.g., "operator").
    pub position: String,
    /// Whether the employee is currently active.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// Creates a new active employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverage_engine::models::Employee;
    ///
    /// let employee = Employee::new("emp_001", "A", "operator");
    /// assert!(employee.active);
    /// assert_eq!(employee.crew, "A");
    /// ```
    pub fn new(
        id: impl Into<String>,
        crew: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            crew: crew.into(),
            position: position.into(),
            active: true,
        }
    }

    /// Moves the employee to another crew and position.
    pub fn reassign(&mut self, crew: impl Into<String>, position: impl Into<String>) {
        self.crew = crew.into();
        self.position = position.into();
    }

    /// Soft-deletes the employee.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
