//! Domain models for the numeric utilities.
//!
//! These types are shared across all modules: engine, data, report and the API handlers.

pub mod operation;
pub mod report;
