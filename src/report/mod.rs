//! Verification report generation.
//!
//! Evaluates a batch of operations and checks the defining relations of the
//! math core over generated cases: the gcd/lcm identity, primality against
//! naive trial division, and factorial monotonicity.

use crate::data::generate_sample_pairs;
use crate::engine::Evaluator;
use crate::math;
use crate::models::operation::Operation;
use crate::models::report::{OperationSummary, PropertyCheck, VerificationReport};
use std::collections::BTreeMap;

const IDENTITY_PAIRS: usize = 500;
const PRIME_CHECK_LIMIT: i64 = 2000;

/// Generate a verification report for `operations`.
pub fn generate_report(operations: &[Operation], evaluator: &Evaluator) -> VerificationReport {
    let mut by_operation: BTreeMap<String, OperationSummary> = BTreeMap::new();
    let mut evaluated = 0;

    for (op, result) in operations.iter().zip(evaluator.evaluate_batch(operations)) {
        let summary = by_operation.entry(op.name().to_string()).or_default();
        if result.is_ok() {
            summary.evaluated += 1;
            evaluated += 1;
        } else {
            summary.rejected += 1;
        }
    }

    let properties = vec![
        check_gcd_lcm_identity(&generate_sample_pairs(IDENTITY_PAIRS)),
        check_prime_trial_division(PRIME_CHECK_LIMIT),
        check_factorial_monotonic(),
    ];

    let report = VerificationReport {
        total_operations: operations.len(),
        evaluated,
        rejected: operations.len() - evaluated,
        by_operation,
        properties,
    };
    tracing::info!(
        total = report.total_operations,
        rejected = report.rejected,
        all_passed = report.all_passed(),
        "verification report generated"
    );
    report
}

/// gcd(a, b) * lcm(a, b) == |a * b| for every pair.
pub fn check_gcd_lcm_identity(pairs: &[(i32, i32)]) -> PropertyCheck {
    run_check("gcd_lcm_identity", pairs.iter().copied(), |(a, b)| {
        let lhs = u128::from(math::gcd(a, b)) * u128::from(math::lcm(a, b));
        let rhs = (i128::from(a) * i128::from(b)).unsigned_abs();
        (lhs != rhs).then(|| format!("a={a}, b={b}: {lhs} != {rhs}"))
    })
}

/// is_prime(n) agrees with divisibility by every integer in [2, n-1].
pub fn check_prime_trial_division(limit: i64) -> PropertyCheck {
    run_check("prime_trial_division", 0..=limit, |n| {
        let expected = n >= 2 && (2..n).all(|d| n % d != 0);
        (math::is_prime(n) != expected).then(|| format!("n={n}: expected {expected}"))
    })
}

/// factorial(n + 1) > factorial(n) for 1 <= n < 20.
pub fn check_factorial_monotonic() -> PropertyCheck {
    run_check("factorial_monotonic", 1..math::MAX_FACTORIAL_INPUT, |n| {
        match (math::factorial(n), math::factorial(n + 1)) {
            (Ok(cur), Ok(next)) if next > cur => None,
            (cur, next) => Some(format!("n={n}: {cur:?} -> {next:?}")),
        }
    })
}

fn run_check<T, I, F>(name: &str, cases: I, violation: F) -> PropertyCheck
where
    I: IntoIterator<Item = T>,
    F: Fn(T) -> Option<String>,
{
    let mut check = PropertyCheck {
        name: name.to_string(),
        cases: 0,
        failures: 0,
        counterexample: None,
    };
    for case in cases {
        check.cases += 1;
        if let Some(detail) = violation(case) {
            check.failures += 1;
            check.counterexample.get_or_insert(detail);
        }
    }
    check
}
