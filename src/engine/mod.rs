//! Evaluation Engine — runs [`Operation`]s against the math core.
//!
//! Applies the configured input limits before dispatching, so the API
//! never starts an unbounded trial division or returns a wrapped value.

use crate::config::EngineConfig;
use crate::error::MathError;
use crate::math;
use crate::models::operation::{Operation, OperationResult, OperationValue};

/// Dispatches operations to the math functions under an [`EngineConfig`].
pub struct Evaluator {
    config: EngineConfig,
}

impl Evaluator {
    /// Creates a new evaluator with the given limits.
    pub fn new(config: EngineConfig) -> Self {
        Evaluator { config }
    }

    /// Evaluate a single operation.
    ///
    /// # Errors
    /// `InvalidArgument` for inputs outside the function's domain or the
    /// configured limits.
    pub fn evaluate(&self, operation: &Operation) -> Result<OperationResult, MathError> {
        match self.compute(operation) {
            Ok(value) => {
                tracing::debug!(operation = %operation, ?value, "evaluated");
                Ok(OperationResult {
                    operation: operation.name().to_string(),
                    input: operation.to_string(),
                    value,
                })
            }
            Err(err) => {
                // out-of-domain input is an expected outcome, not a server fault
                tracing::debug!(operation = %operation, error = %err, "rejected");
                Err(err)
            }
        }
    }

    /// Evaluate every operation, keeping input order.
    pub fn evaluate_batch(
        &self,
        operations: &[Operation],
    ) -> Vec<Result<OperationResult, MathError>> {
        operations.iter().map(|op| self.evaluate(op)).collect()
    }

    fn compute(&self, operation: &Operation) -> Result<OperationValue, MathError> {
        let value = match *operation {
            Operation::Factorial { n } => OperationValue::Integer(math::factorial(n)?),
            Operation::Fibonacci { n } => {
                if n < 0 && self.config.strict_fibonacci {
                    return Err(MathError::invalid_argument(
                        "fibonacci is not defined for negative numbers",
                    ));
                }
                let value = math::checked_fibonacci(n).ok_or_else(|| {
                    MathError::invalid_argument(format!(
                        "fibonacci({n}) exceeds the 64-bit range (max input {})",
                        math::MAX_FIBONACCI_INPUT
                    ))
                })?;
                OperationValue::Integer(value)
            }
            Operation::IsPrime { n } => {
                if n > self.config.max_prime_input {
                    return Err(MathError::invalid_argument(format!(
                        "is_prime input {n} exceeds the configured limit {}",
                        self.config.max_prime_input
                    )));
                }
                OperationValue::Boolean(math::is_prime(n))
            }
            Operation::Gcd { a, b } => OperationValue::Unsigned(u64::from(math::gcd(a, b))),
            Operation::Lcm { a, b } => OperationValue::Unsigned(math::lcm(a, b)),
        };
        Ok(value)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// In-memory sink for a test subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a subscriber capped at `level`, returning what it logged.
    fn logs_at(level: tracing::Level, f: impl FnOnce()) -> String {
        let captured = CapturedLogs::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        captured.contents()
    }

    fn value_of(evaluator: &Evaluator, op: Operation) -> OperationValue {
        evaluator.evaluate(&op).unwrap().value
    }

    #[test]
    fn test_dispatches_each_operation() {
        let evaluator = Evaluator::default();
        let cases = [
            (Operation::Factorial { n: 5 }, OperationValue::Integer(120)),
            (Operation::Fibonacci { n: 6 }, OperationValue::Integer(8)),
            (Operation::IsPrime { n: 29 }, OperationValue::Boolean(true)),
            (Operation::Gcd { a: -12, b: 18 }, OperationValue::Unsigned(6)),
            (Operation::Lcm { a: 12, b: 18 }, OperationValue::Unsigned(36)),
        ];
        for (op, expected) in cases {
            let label = op.to_string();
            assert_eq!(value_of(&evaluator, op), expected, "{label}");
        }
    }

    #[test]
    fn test_result_carries_name_and_rendered_input() {
        let result = Evaluator::default().evaluate(&Operation::Gcd { a: 8, b: 12 }).unwrap();
        assert_eq!(result.operation, "gcd");
        assert_eq!(result.input, "gcd(8, 12)");
    }

    #[test]
    fn test_negative_factorial_is_rejected() {
        let err = Evaluator::default().evaluate(&Operation::Factorial { n: -1 }).unwrap_err();
        assert!(matches!(err, MathError::InvalidArgument(_)));
    }

    #[test]
    fn test_fibonacci_overflow_is_rejected() {
        let evaluator = Evaluator::default();
        assert!(evaluator.evaluate(&Operation::Fibonacci { n: 92 }).is_ok());
        assert!(evaluator.evaluate(&Operation::Fibonacci { n: 93 }).is_err());
    }

    #[test]
    fn test_negative_fibonacci_depends_on_strict_mode() {
        let lenient = Evaluator::default();
        assert_eq!(
            value_of(&lenient, Operation::Fibonacci { n: -5 }),
            OperationValue::Integer(-5)
        );

        let strict = Evaluator::new(EngineConfig {
            strict_fibonacci: true,
            ..EngineConfig::default()
        });
        assert!(strict.evaluate(&Operation::Fibonacci { n: -5 }).is_err());
        assert!(strict.evaluate(&Operation::Fibonacci { n: 0 }).is_ok());
    }

    #[test]
    fn test_prime_limit_is_enforced() {
        let evaluator = Evaluator::new(EngineConfig {
            max_prime_input: 100,
            ..EngineConfig::default()
        });
        assert_eq!(
            value_of(&evaluator, Operation::IsPrime { n: 97 }),
            OperationValue::Boolean(true)
        );
        assert!(evaluator.evaluate(&Operation::IsPrime { n: 101 }).is_err());
        // the limit only bounds work, small and negative inputs pass through
        assert_eq!(
            value_of(&evaluator, Operation::IsPrime { n: -3 }),
            OperationValue::Boolean(false)
        );
    }

    #[test]
    fn test_batch_preserves_order() {
        let ops = vec![
            Operation::Factorial { n: -1 },
            Operation::Lcm { a: 0, b: 5 },
            Operation::IsPrime { n: 4 },
        ];
        let results = Evaluator::default().evaluate_batch(&ops);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_err());
        assert_eq!(results[1].as_ref().unwrap().value, OperationValue::Unsigned(0));
        assert_eq!(results[2].as_ref().unwrap().value, OperationValue::Boolean(false));
    }

    #[test]
    fn test_rejections_log_below_warn() {
        let reject = || {
            let evaluator = Evaluator::default();
            assert!(evaluator.evaluate(&Operation::Factorial { n: -1 }).is_err());
            assert!(evaluator.evaluate(&Operation::Fibonacci { n: 93 }).is_err());
        };

        assert_eq!(logs_at(tracing::Level::WARN, reject), "");
        let debug = logs_at(tracing::Level::DEBUG, reject);
        assert!(debug.contains("rejected"), "{debug}");
        assert!(debug.contains("factorial(-1)"), "{debug}");
    }
}
