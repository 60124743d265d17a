//! Crew Coverage & Overtime Equity Engine
//!
//! This crate computes per-day, per-crew staffing coverage for rotating
//! shift crews and per-employee overtime summaries over a trailing 13-week
//! window, from injected roster, leave and schedule data.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
