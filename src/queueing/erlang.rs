//! Erlang-B and Erlang-C evaluation for `c` identical servers under an
//! offered load of `a` Erlangs.
//!
//! Both formulas are evaluated through the Erlang-B recurrence
//!
//! ```text
//! B(0) = 1
//! B(n) = a * B(n-1) / (n + a * B(n-1))
//! ```
//!
//! which carries the ratio `(a^n / n!) / sum_{k<=n} a^k / k!` forward one
//! server at a time.  Neither `a^n` nor `n!` is ever formed, so server
//! counts far beyond the point where `170!` overflows an f64 are handled.
//! Erlang-C follows from Erlang-B as
//!
//! ```text
//! C(a, c) = c * B(c) / (c - a * (1 - B(c)))
//! ```

use num_traits::Float;
use tracing::debug;

use crate::utils::errors::QueueingError;
use crate::utils::{float_to_f64, usize_to_float};

fn validate<T: Float>(offered_load: T, servers: usize) -> Result<(), QueueingError> {
    if !offered_load.is_finite() || offered_load < T::zero() {
        return Err(QueueingError::invalid(format!(
            "offered load must be finite and >= 0, got {}",
            float_to_f64(offered_load)?
        )));
    }
    if servers == 0 {
        return Err(QueueingError::invalid("server count must be >= 1"));
    }
    Ok(())
}

fn blocking<T: Float>(offered_load: T, servers: usize) -> Result<T, QueueingError> {
    let mut b = T::one();
    for n in 1..=servers {
        let carried = offered_load * b;
        b = carried / (usize_to_float::<T>(n)? + carried);
    }
    Ok(b)
}

/// The Erlang-B formula: the probability that an arrival finds all
/// `servers` busy in a loss system with no waiting room (M/M/c/c).  Unlike
/// Erlang-C, this is well defined for any offered load.
pub fn erlang_b<T: Float>(offered_load: T, servers: usize) -> Result<T, QueueingError> {
    validate(offered_load, servers)?;
    blocking(offered_load, servers)
}

/// The Erlang-C formula: the probability that an arriving unit of work must
/// wait for one of `servers` identical servers, given an offered load in
/// Erlangs.
///
/// An offered load at or above the server count saturates the system, and
/// the result is exactly `1.0` - the queue never clears.
///
/// # Errors
///
/// `QueueingError::InvalidArgument` for a negative or non-finite offered
/// load, or a server count of zero.
///
/// # Example
///
/// ```
/// use mmc::queueing::erlang_c;
///
/// let p_wait = erlang_c(2.0_f64, 3).unwrap();
/// assert!((p_wait - 4.0 / 9.0).abs() < 1e-12);
/// assert_eq!(erlang_c(3.0, 3).unwrap(), 1.0);
/// ```
pub fn erlang_c<T: Float>(offered_load: T, servers: usize) -> Result<T, QueueingError> {
    validate(offered_load, servers)?;
    let c = usize_to_float::<T>(servers)?;
    if offered_load >= c {
        debug!(
            offered_load = offered_load.to_f64(),
            servers,
            "offered load saturates every server"
        );
        return Ok(T::one());
    }
    let b = blocking(offered_load, servers)?;
    let p_wait = c * b / (c - offered_load * (T::one() - b));
    // Rounding can nudge the ratio past 1 as the load approaches c
    Ok(p_wait.min(T::one()).max(T::zero()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epsilon() -> f64 {
        1e-12
    }

    /// Direct evaluation of the closed form, usable for small server counts
    fn closed_form(a: f64, c: usize) -> f64 {
        let factorial = |n: usize| (1..=n).fold(1.0, |acc, k| acc * k as f64);
        let finite_sum: f64 = (0..c).map(|n| a.powi(n as i32) / factorial(n)).sum();
        let erlang_term = a.powi(c as i32) / factorial(c) * (c as f64 / (c as f64 - a));
        erlang_term / (finite_sum + erlang_term)
    }

    #[test]
    fn matches_closed_form() {
        for &(a, c) in &[(0.5, 1), (2.0, 3), (4.5, 5), (7.2, 10), (19.0, 25)] {
            let expected = closed_form(a, c);
            let actual = erlang_c(a, c).unwrap();
            assert!(
                (actual - expected).abs() < 1e-9,
                "a={} c={}: {} vs {}",
                a,
                c,
                actual,
                expected
            );
        }
    }

    #[test]
    fn zero_load_never_waits() {
        for c in 1..20 {
            assert_eq![erlang_c(0.0, c).unwrap(), 0.0];
        }
    }

    #[test]
    fn saturation_is_exactly_one() {
        assert_eq![erlang_c(3.0, 3).unwrap(), 1.0];
        assert_eq![erlang_c(3.5, 3).unwrap(), 1.0];
        assert_eq![erlang_c(1000.0, 1).unwrap(), 1.0];
    }

    #[test]
    fn single_server_reduces_to_utilization() {
        for &a in &[0.0, 0.1, 0.25, 0.5, 0.9, 0.999] {
            assert!((erlang_c(a, 1).unwrap() - a).abs() < epsilon());
        }
    }

    #[test]
    fn approaches_one_near_capacity() {
        let p = erlang_c(9.9999, 10).unwrap();
        assert!(p > 0.999, "expected P(wait) near 1, got {}", p);
        assert!(p <= 1.0);
    }

    #[test]
    fn large_server_counts_stay_finite() {
        let p = erlang_c(900.0, 1000).unwrap();
        assert!(p.is_finite());
        assert!(p >= 0.0 && p <= 1.0);
        let p = erlang_c(4990.0, 5000).unwrap();
        assert!(p.is_finite() && p > 0.0 && p <= 1.0);
    }

    #[test]
    fn single_precision() {
        let p: f32 = erlang_c(2.0f32, 3).unwrap();
        assert!((p - 4.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_invalid_arguments() {
        assert!(matches!(
            erlang_c(-1.0, 3),
            Err(QueueingError::InvalidArgument(_))
        ));
        assert!(matches!(
            erlang_c(5.0, 0),
            Err(QueueingError::InvalidArgument(_))
        ));
        assert!(matches!(
            erlang_c(f64::NAN, 3),
            Err(QueueingError::InvalidArgument(_))
        ));
        assert!(matches!(
            erlang_c(f64::INFINITY, 3),
            Err(QueueingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn erlang_b_known_values() {
        // B(2, 3) = (8/6) / (1 + 2 + 2 + 8/6) = 4/19
        assert!((erlang_b(2.0, 3).unwrap() - 4.0 / 19.0).abs() < epsilon());
        assert_eq![erlang_b(0.0, 4).unwrap(), 0.0];
        // Loss systems are defined past saturation
        let b = erlang_b(10.0, 2).unwrap();
        assert!(b > 0.0 && b < 1.0);
        assert!(erlang_b(1.0, 0).is_err());
    }
}
