//! Numeric Utilities — Shared Library
//!
//! Textbook number-theory functions plus the models, evaluation engine
//! and reporting used by the API handlers and the generator binary.
//!
//! Each serverless function in `api/` imports from this library
//! to keep handlers thin and logic reusable.

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod http;
pub mod math;
pub mod models;
pub mod report;
pub mod telemetry;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
