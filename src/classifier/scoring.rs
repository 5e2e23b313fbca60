//! Exact arithmetic helpers for posterior scoring.
//!
//! Scores are products of many small fractions. They are kept as
//! [`BigRational`] values so that equal evidence compares equal and long
//! documents never underflow; only the normalized posteriors are rounded to
//! `f64`.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

/// Convert a finite `f64` into the rational number it represents exactly.
///
/// Non-finite values map to zero; smoothing factors are validated before
/// they reach scoring.
pub fn exact(value: f64) -> BigRational {
    BigRational::from_float(value).unwrap_or_else(BigRational::zero)
}

/// Lidstone-smoothed likelihood of a word within one category.
///
/// A zero denominator (nothing learned for the category, no smoothing)
/// yields 0.
pub fn smoothed_likelihood(
    count: u64,
    total: u64,
    smoothing: &BigRational,
    unique_words: u64,
) -> BigRational {
    let numerator = BigRational::from_integer(BigInt::from(count)) + smoothing;
    let denominator = BigRational::from_integer(BigInt::from(total))
        + smoothing * BigRational::from_integer(BigInt::from(unique_words));

    if denominator.is_zero() {
        BigRational::zero()
    } else {
        numerator / denominator
    }
}

/// Normalize unnormalized scores into probabilities.
///
/// Returns all zeros when every score is zero.
pub fn normalize(scores: &[BigRational]) -> Vec<f64> {
    let sum: BigRational = scores.iter().sum();

    if sum.is_zero() {
        return vec![0.0; scores.len()];
    }
    scores.iter().map(|score| to_f64(&(score / &sum))).collect()
}

/// Round a probability to the nearest `f64`.
pub fn to_f64(value: &BigRational) -> f64 {
    // Probabilities lie in [0, 1], which always converts.
    value.to_f64().unwrap_or(0.0)
}

/// Find the index of the maximum score and whether it is unique.
///
/// Scans left to right: a strictly greater score moves the maximum and
/// restores strictness, an equal score clears strictness and keeps the
/// earlier index.
pub fn find_max<T: PartialOrd>(scores: &[T]) -> (usize, bool) {
    let mut idx = 0;
    let mut strict = true;

    for (i, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[idx] {
            idx = i;
            strict = true;
        } else if *score == scores[idx] {
            strict = false;
        }
    }

    (idx, strict)
}
