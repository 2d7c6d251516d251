//! Weight-distribution policies for category frequency shaping.
//!
//! A [`Distribution`] maps a category count to a vector of positive integer
//! weights, one per category, where relative magnitude encodes sampling
//! frequency. The policy set is closed: every variant is a fixed formula and
//! the whole family is exhaustively testable.
use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngCore};

use crate::error::Error;

/// Weight used for every category by [`Distribution::Uniform`], and the upper
/// bound of the per-category roll in [`Distribution::Random`].
pub const UNIFORM_WEIGHT: u64 = 10;

/// Named strategy for deriving relative category weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Exponential emphasis on the first category: `3^(n - i)`.
    Decreasing,
    /// Linear emphasis on the last category: `i + 1`.
    Increasing,
    /// Every category gets [`UNIFORM_WEIGHT`].
    Uniform,
    /// `|n/2 - i| + 1`, integer division for `n/2`.
    MidPeak,
    /// Linear ramp toward the end: `1 + 2*i`.
    EndPeak,
    /// Linear ramp toward the start: `1 + 2*(n - i)`.
    StartPeak,
    /// Independent uniform roll in `[1, UNIFORM_WEIGHT]` per category.
    Random,
}

/// All policies, in tag order. Handy for demos and exhaustive tests.
pub const ALL_DISTRIBUTIONS: [Distribution; 7] = [
    Distribution::Decreasing,
    Distribution::Increasing,
    Distribution::Uniform,
    Distribution::MidPeak,
    Distribution::EndPeak,
    Distribution::StartPeak,
    Distribution::Random,
];

impl Distribution {
    /// Generate one weight per category, each >= 1.
    ///
    /// Only [`Distribution::Random`] draws from `rng`; the other policies are
    /// pure in `count`. `count` must be >= 1 (the catalog never yields an
    /// empty category list).
    pub fn weights(&self, count: usize, rng: &mut dyn RngCore) -> Vec<u64> {
        debug_assert!(count >= 1, "category count must be >= 1");

        let n = count as u64;
        (0..count)
            .map(|i| match self {
                // Saturates for very large counts; ordering and the >= 1
                // floor still hold.
                Distribution::Decreasing => 3u64.saturating_pow((count - i) as u32),
                Distribution::Increasing => i as u64 + 1,
                Distribution::Uniform => UNIFORM_WEIGHT,
                Distribution::MidPeak => (n as i64 / 2 - i as i64).unsigned_abs() + 1,
                Distribution::EndPeak => 1 + 2 * i as u64,
                Distribution::StartPeak => 1 + 2 * (n - i as u64),
                Distribution::Random => rng.random_range(1..=UNIFORM_WEIGHT),
            })
            .collect()
    }

    /// Stable tag for this policy, the inverse of [`FromStr`].
    pub fn tag(&self) -> &'static str {
        match self {
            Distribution::Decreasing => "decreasing",
            Distribution::Increasing => "increasing",
            Distribution::Uniform => "uniform",
            Distribution::MidPeak => "mid_peak",
            Distribution::EndPeak => "end_peak",
            Distribution::StartPeak => "start_peak",
            Distribution::Random => "random",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Distribution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decreasing" => Ok(Distribution::Decreasing),
            "increasing" => Ok(Distribution::Increasing),
            "uniform" => Ok(Distribution::Uniform),
            "mid_peak" => Ok(Distribution::MidPeak),
            "end_peak" => Ok(Distribution::EndPeak),
            "start_peak" => Ok(Distribution::StartPeak),
            "random" => Ok(Distribution::Random),
            other => Err(Error::InvalidPolicy { tag: other.into() }),
        }
    }
}
