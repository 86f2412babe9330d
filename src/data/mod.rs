//! Sample data generation for reports and demos.
//!
//! Uses seeded RNG for reproducible datasets across runs.
//!
//! # Data Distribution
//! - Operations cycle factorial, fibonacci, is_prime, gcd, lcm
//! - Ranges deliberately cross each domain edge (negative factorial,
//!   fibonacci past the 64-bit range) so reports show rejections too

use crate::models::operation::Operation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Data seed for reproducible generation.
const DATA_SEED: u64 = 42;

const FACTORIAL_RANGE: std::ops::RangeInclusive<i32> = -2..=22;
const FIBONACCI_RANGE: std::ops::RangeInclusive<i32> = -3..=95;
const PRIME_RANGE: std::ops::RangeInclusive<i64> = -10..=100_000;
const OPERAND_RANGE: std::ops::RangeInclusive<i32> = -10_000..=10_000;

/// Generate `count` operations, cycling through all five kinds in order.
pub fn generate_sample_operations(count: usize) -> Vec<Operation> {
    let mut rng = StdRng::seed_from_u64(DATA_SEED);
    let mut operations = Vec::with_capacity(count);

    for i in 0..count {
        let op = match i % 5 {
            0 => Operation::Factorial { n: rng.gen_range(FACTORIAL_RANGE) },
            1 => Operation::Fibonacci { n: rng.gen_range(FIBONACCI_RANGE) },
            2 => Operation::IsPrime { n: rng.gen_range(PRIME_RANGE) },
            3 => Operation::Gcd {
                a: rng.gen_range(OPERAND_RANGE),
                b: rng.gen_range(OPERAND_RANGE),
            },
            _ => Operation::Lcm {
                a: rng.gen_range(OPERAND_RANGE),
                b: rng.gen_range(OPERAND_RANGE),
            },
        };
        operations.push(op);
    }

    operations
}

/// Get the standard sample dataset of 120 operations.
pub fn get_sample_dataset() -> Vec<Operation> {
    generate_sample_operations(crate::config::DEFAULT_SAMPLE_SIZE)
}

/// Generate `count` pairs of nonzero operands spanning the full `i32` range.
pub fn generate_sample_pairs(count: usize) -> Vec<(i32, i32)> {
    let mut rng = StdRng::seed_from_u64(DATA_SEED);
    (0..count)
        .map(|_| (nonzero(&mut rng), nonzero(&mut rng)))
        .collect()
}

fn nonzero(rng: &mut StdRng) -> i32 {
    loop {
        let v: i32 = rng.gen();
        if v != 0 {
            return v;
        }
    }
}
