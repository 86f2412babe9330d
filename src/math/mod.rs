//! Number-theory primitives.
//!
//! Every function here is pure and iterative: no recursion, no shared
//! state, safe to call from any thread.

use crate::error::MathError;

/// Largest `n` whose factorial fits in an `i64`.
pub const MAX_FACTORIAL_INPUT: i32 = 20;

/// Largest `n` whose Fibonacci number fits in an `i64`.
pub const MAX_FIBONACCI_INPUT: i32 = 92;

/// Calculate `n!`.
///
/// # Errors
/// `InvalidArgument` when `n` is negative, or when `n > 20` and the product
/// would not fit in 64 bits.
pub fn factorial(n: i32) -> Result<i64, MathError> {
    if n < 0 {
        return Err(MathError::invalid_argument(
            "factorial is not defined for negative numbers",
        ));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(MathError::invalid_argument(format!(
            "factorial({n}) exceeds the 64-bit range (max input {MAX_FACTORIAL_INPUT})"
        )));
    }
    if n == 0 || n == 1 {
        return Ok(1);
    }

    let mut result: i64 = 1;
    for i in 2..=i64::from(n) {
        result *= i;
    }
    Ok(result)
}

/// Calculate the `n`th term of the 0-indexed Fibonacci sequence.
///
/// Inputs `n <= 1` are returned unchanged, which includes negative `n`
/// (`fibonacci(-5) == -5`). Past `fibonacci(92)` the accumulators wrap;
/// use [`checked_fibonacci`] when overflow must be detected.
pub fn fibonacci(n: i32) -> i64 {
    if n <= 1 {
        return i64::from(n);
    }

    let (mut a, mut b) = (0i64, 1i64);
    for _ in 2..=n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    b
}

/// Same as [`fibonacci`], but `None` once the term no longer fits in an `i64`.
pub fn checked_fibonacci(n: i32) -> Option<i64> {
    if n <= 1 {
        return Some(i64::from(n));
    }

    let (mut a, mut b) = (0i64, 1i64);
    for _ in 2..=n {
        let next = a.checked_add(b)?;
        a = b;
        b = next;
    }
    Some(b)
}

/// Primality by trial division over odd candidates up to `sqrt(n)`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // i <= n / i is i*i <= n without the overflow
    let mut i: i64 = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Greatest common divisor of `|a|` and `|b|` (Euclid). `gcd(0, 0) == 0`.
pub fn gcd(a: i32, b: i32) -> u32 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple; 0 when either operand is 0.
pub fn lcm(a: i32, b: i32) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    let g = u64::from(gcd(a, b));
    u64::from(a.unsigned_abs()) / g * u64::from(b.unsigned_abs())
}
