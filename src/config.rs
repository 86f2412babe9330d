//! Engine configuration.
//!
//! Limits are read from environment variables so each serverless function
//! can be tuned without a rebuild:
//!
//! | variable                   | default           |
//! |----------------------------|-------------------|
//! | `NUMERIC_MAX_PRIME_INPUT`  | 1_000_000_000_000 |
//! | `NUMERIC_STRICT_FIBONACCI` | false             |
//! | `NUMERIC_SAMPLE_SIZE`      | 120 (1..=10_000)  |

use crate::error::ConfigError;
use std::str::FromStr;

pub const MAX_PRIME_INPUT_VAR: &str = "NUMERIC_MAX_PRIME_INPUT";
pub const STRICT_FIBONACCI_VAR: &str = "NUMERIC_STRICT_FIBONACCI";
pub const SAMPLE_SIZE_VAR: &str = "NUMERIC_SAMPLE_SIZE";

/// Default trial-division ceiling: ~500k odd divisors per request.
pub const DEFAULT_MAX_PRIME_INPUT: i64 = 1_000_000_000_000;
pub const DEFAULT_SAMPLE_SIZE: usize = 120;
/// Upper bound on any report sample size, configured or requested.
pub const MAX_SAMPLE_SIZE: usize = 10_000;

/// Limits applied by [`crate::engine::Evaluator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Largest input accepted by `is_prime`.
    pub max_prime_input: i64,
    /// Reject negative `fibonacci` input instead of echoing it back.
    pub strict_fibonacci: bool,
    /// Default number of sample operations in a report.
    pub sample_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_prime_input: DEFAULT_MAX_PRIME_INPUT,
            strict_fibonacci: false,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl EngineConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = EngineConfig::default();

        if let Some(raw) = lookup(MAX_PRIME_INPUT_VAR) {
            let value: i64 = parse_number(MAX_PRIME_INPUT_VAR, &raw)?;
            if value < 2 {
                return Err(ConfigError::invalid_value(MAX_PRIME_INPUT_VAR, raw));
            }
            config.max_prime_input = value;
        }

        if let Some(raw) = lookup(STRICT_FIBONACCI_VAR) {
            config.strict_fibonacci = parse_bool(STRICT_FIBONACCI_VAR, &raw)?;
        }

        if let Some(raw) = lookup(SAMPLE_SIZE_VAR) {
            let value: usize = parse_number(SAMPLE_SIZE_VAR, &raw)?;
            if value == 0 || value > MAX_SAMPLE_SIZE {
                return Err(ConfigError::invalid_value(SAMPLE_SIZE_VAR, raw));
            }
            config.sample_size = value;
        }

        Ok(config)
    }
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .replace('_', "")
        .parse()
        .map_err(|_| ConfigError::invalid_value(key, raw))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::invalid_value(key, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EngineConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.max_prime_input, DEFAULT_MAX_PRIME_INPUT);
        assert!(!config.strict_fibonacci);
    }

    #[test]
    fn test_reads_all_keys() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            (MAX_PRIME_INPUT_VAR, "1_000_000"),
            (STRICT_FIBONACCI_VAR, "Yes"),
            (SAMPLE_SIZE_VAR, " 25 "),
        ]))
        .unwrap();
        assert_eq!(config.max_prime_input, 1_000_000);
        assert!(config.strict_fibonacci);
        assert_eq!(config.sample_size, 25);
    }

    #[test]
    fn test_rejects_malformed_values() {
        let err = EngineConfig::from_lookup(lookup_from(&[(MAX_PRIME_INPUT_VAR, "lots")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::invalid_value(MAX_PRIME_INPUT_VAR, "lots"));

        let strict = lookup_from(&[(STRICT_FIBONACCI_VAR, "maybe")]);
        assert!(EngineConfig::from_lookup(strict).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_limits() {
        assert!(EngineConfig::from_lookup(lookup_from(&[(MAX_PRIME_INPUT_VAR, "1")])).is_err());
        assert!(EngineConfig::from_lookup(lookup_from(&[(SAMPLE_SIZE_VAR, "0")])).is_err());

        let err = EngineConfig::from_lookup(lookup_from(&[(SAMPLE_SIZE_VAR, "20000")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::invalid_value(SAMPLE_SIZE_VAR, "20000"));
        let at_cap = EngineConfig::from_lookup(lookup_from(&[(SAMPLE_SIZE_VAR, "10000")]));
        assert_eq!(at_cap.unwrap().sample_size, MAX_SAMPLE_SIZE);
    }
}
