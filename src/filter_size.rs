//! Derivation of the bit array size (`m`) and hash round count (`k`) from an
//! expected item count (`n`) and a target false-positive probability (`p`).
//!
//! The closed-form optimum for a classic bloom filter is:
//!
//! ```text
//!     m = -(n * ln(p)) / ln(2)^2
//!     k = (m / n) * ln(2)
//! ```
//!
//! Neither value is integral, so a [`SizingPolicy`] decides how they are
//! rounded. No upper bound is applied to `m`: a huge `n` or a tiny `p` yields a
//! correspondingly huge bit array, and that memory/accuracy trade-off belongs
//! to the caller.

use std::f64::consts::LN_2;

use crate::error::{Error, Result};

/// Controls how the real-valued sizing formulas are turned into integers.
///
/// Both policies clamp `m` and `k` to at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SizingPolicy {
    /// Truncate `m` and `k` toward zero.
    ///
    /// This slightly undersizes the filter relative to the optimum, so the
    /// realised false-positive rate at full capacity can sit marginally above
    /// the configured target. For `n = 20, p = 0.05` this gives `m = 124`,
    /// `k = 4`.
    Truncate,

    /// Round `m` and `k` up to the next integer.
    ///
    /// For `n = 20, p = 0.05` this gives `m = 125`, `k = 5`.
    RoundUp,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self::Truncate
    }
}

impl SizingPolicy {
    /// Compute the number of bits needed to hold `n` items at a false-positive
    /// probability of `p`.
    pub fn bit_array_size(self, n: usize, p: f64) -> Result<usize> {
        check_item_count(n)?;
        check_probability(p)?;

        let m = -(n as f64 * p.ln()) / (LN_2 * LN_2);
        Ok(self.round(m))
    }

    /// Compute the number of hash rounds for a bit array of `m` bits holding
    /// `n` items.
    pub fn hash_round_count(self, m: usize, n: usize) -> Result<usize> {
        check_item_count(n)?;
        if m == 0 {
            return Err(Error::invalid(
                "bit_array_size",
                "must be greater than zero",
            ));
        }

        let k = (m as f64 / n as f64) * LN_2;
        Ok(self.round(k))
    }

    fn round(self, v: f64) -> usize {
        // Float to int casts saturate, so an enormous `m` cannot wrap.
        let v = match self {
            Self::Truncate => v.trunc() as usize,
            Self::RoundUp => v.ceil() as usize,
        };
        v.max(1)
    }
}

/// Compute the bit array size `m` for `n` expected items and a false-positive
/// probability `p`, truncating toward zero.
///
/// ```rust
/// assert_eq!(seedbloom::compute_bit_array_size(1000, 0.05).unwrap(), 6235);
/// ```
pub fn compute_bit_array_size(n: usize, p: f64) -> Result<usize> {
    SizingPolicy::Truncate.bit_array_size(n, p)
}

/// Compute the hash round count `k` for a bit array of `m` bits sized for `n`
/// items, truncating toward zero.
///
/// ```rust
/// assert_eq!(seedbloom::compute_hash_round_count(124, 20).unwrap(), 4);
/// ```
pub fn compute_hash_round_count(m: usize, n: usize) -> Result<usize> {
    SizingPolicy::Truncate.hash_round_count(m, n)
}

/// The parameters a [`BloomFilter`](crate::BloomFilter) is constructed from.
///
/// If the `serde` feature is enabled, `FilterParams` can be loaded from an
/// embedding application's configuration:
///
/// ```text
/// { "expected_items": 1000, "false_positive_probability": 0.01, "sizing": "round_up" }
/// ```
///
/// `sizing` is optional and defaults to [`SizingPolicy::Truncate`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterParams {
    /// The number of items the filter is expected to hold (`n`).
    pub expected_items: usize,

    /// The accepted probability of a false positive at capacity (`p`).
    pub false_positive_probability: f64,

    /// How the sizing formulas are rounded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sizing: SizingPolicy,
}

impl FilterParams {
    /// Parameters for `expected_items` at `false_positive_probability`, using
    /// the default [`SizingPolicy`].
    pub fn new(expected_items: usize, false_positive_probability: f64) -> Self {
        Self {
            expected_items,
            false_positive_probability,
            sizing: SizingPolicy::default(),
        }
    }

    /// Reject parameters that would produce a degenerate or non-finite filter.
    pub fn validate(&self) -> Result<()> {
        check_item_count(self.expected_items)?;
        check_probability(self.false_positive_probability)
    }

    /// Derive `(m, k)` for these parameters.
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        let m = self
            .sizing
            .bit_array_size(self.expected_items, self.false_positive_probability)?;
        let k = self.sizing.hash_round_count(m, self.expected_items)?;
        Ok((m, k))
    }
}

fn check_item_count(n: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::invalid(
            "expected_items",
            "must be greater than zero",
        ));
    }
    Ok(())
}

fn check_probability(p: f64) -> Result<()> {
    // NaN fails both comparisons and is rejected here too.
    if !(p > 0.0 && p < 1.0) {
        return Err(Error::invalid(
            "false_positive_probability",
            format!("must be strictly between 0 and 1, got {}", p),
        ));
    }
    Ok(())
}
