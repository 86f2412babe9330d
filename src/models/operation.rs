use serde::{Deserialize, Serialize};

/// A single numeric operation and its arguments.
///
/// Serialized with an `"operation"` tag, e.g.
/// `{"operation": "gcd", "a": 12, "b": 18}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Operation {
    Factorial { n: i32 },
    Fibonacci { n: i32 },
    IsPrime { n: i64 },
    Gcd { a: i32, b: i32 },
    Lcm { a: i32, b: i32 },
}

impl Operation {
    /// The wire tag of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Factorial { .. } => "factorial",
            Operation::Fibonacci { .. } => "fibonacci",
            Operation::IsPrime { .. } => "is_prime",
            Operation::Gcd { .. } => "gcd",
            Operation::Lcm { .. } => "lcm",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Factorial { n } => write!(f, "factorial({n})"),
            Operation::Fibonacci { n } => write!(f, "fibonacci({n})"),
            Operation::IsPrime { n } => write!(f, "is_prime({n})"),
            Operation::Gcd { a, b } => write!(f, "gcd({a}, {b})"),
            Operation::Lcm { a, b } => write!(f, "lcm({a}, {b})"),
        }
    }
}

/// The value produced by an [`Operation`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OperationValue {
    Integer(i64),
    Unsigned(u64),
    Boolean(bool),
}

/// An evaluated operation, as returned by `/api/compute`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OperationResult {
    /// Operation tag (e.g., "lcm").
    pub operation: String,
    /// Rendered call, e.g. "lcm(12, 18)".
    pub input: String,
    /// Computed value.
    pub value: OperationValue,
}
