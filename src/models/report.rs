use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Verification report over a batch of operations.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    /// Total number of operations evaluated.
    pub total_operations: usize,
    /// Operations that produced a value.
    pub evaluated: usize,
    /// Operations rejected with an error.
    pub rejected: usize,
    /// Breakdown by operation tag.
    pub by_operation: BTreeMap<String, OperationSummary>,
    /// Mathematical property checks.
    pub properties: Vec<PropertyCheck>,
}

impl VerificationReport {
    /// True when every property check passed.
    pub fn all_passed(&self) -> bool {
        self.properties.iter().all(PropertyCheck::passed)
    }
}

/// Per-operation outcome counts.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct OperationSummary {
    pub evaluated: usize,
    pub rejected: usize,
}

/// Result of checking one mathematical property over a set of cases.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PropertyCheck {
    /// Property identifier (e.g., "gcd_lcm_identity").
    pub name: String,
    /// Number of cases checked.
    pub cases: usize,
    /// Number of cases that violated the property.
    pub failures: usize,
    /// First violating case, if any.
    pub counterexample: Option<String>,
}

impl PropertyCheck {
    pub fn passed(&self) -> bool {
        self.failures == 0
    }
}

/// API request body for the /api/report endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Number of sample operations to evaluate (default from config).
    pub sample_size: Option<usize>,
}
