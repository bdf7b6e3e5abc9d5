//! # Stats Module
//!
//! Descriptive statistics over a list of scores: mean, minimum and maximum.
//!
//! Nothing beyond those three measures is computed here. NaN and infinities
//! are not validated; they propagate through the comparisons and the sum
//! under the usual IEEE-754 rules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Mean, minimum and maximum of a non-empty score list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    /// Arithmetic mean of the scores.
    pub mean: f64,
    /// Smallest score.
    pub minimum: f64,
    /// Largest score.
    pub maximum: f64,
}

/// Compute mean, minimum and maximum in a single pass.
///
/// Minimum and maximum are seeded from the first element rather than a
/// sentinel, so all-negative lists work as expected.
///
/// Returns [`Error::InvalidInput`] if `values` is empty.
pub fn compute_basic_stats(values: &[f64]) -> Result<BasicStats> {
    let Some(&first) = values.first() else {
        return Err(Error::InvalidInput(
            "cannot compute statistics of an empty score list".to_string(),
        ));
    };

    let mut sum = 0.0;
    let mut minimum = first;
    let mut maximum = first;

    for &x in values {
        sum += x;
        if x < minimum {
            minimum = x;
        }
        if x > maximum {
            maximum = x;
        }
    }

    let mean = sum / values.len() as f64;

    Ok(BasicStats {
        mean: keep_within(mean, minimum, maximum),
        minimum,
        maximum,
    })
}

/// Rounding in the running sum can leave the mean a few ulps outside
/// `[minimum, maximum]` (e.g. `[0.1, 0.1, 0.1]`). Pull it back in.
/// Non-finite means (overflow, infinities, NaN) are returned as computed.
fn keep_within(mean: f64, minimum: f64, maximum: f64) -> f64 {
    if !mean.is_finite() {
        mean
    } else if mean < minimum {
        minimum
    } else if mean > maximum {
        maximum
    } else {
        mean
    }
}

// =============================================================================
// SUMMARY
// =============================================================================

/// Statistics report for a score list of any length.
///
/// The three measures are either all present or all absent. An empty list
/// yields `count: 0` with no measures instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Number of scores considered.
    pub count: usize,
    pub mean: Option<f64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl StatsSummary {
    /// Summary of an empty score list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            count: 0,
            mean: None,
            minimum: None,
            maximum: None,
        }
    }

    /// The measures as a [`BasicStats`], if any were computed.
    #[must_use]
    pub fn stats(&self) -> Option<BasicStats> {
        match (self.mean, self.minimum, self.maximum) {
            (Some(mean), Some(minimum), Some(maximum)) => Some(BasicStats {
                mean,
                minimum,
                maximum,
            }),
            _ => None,
        }
    }
}

/// Summarize a score list, tolerating an empty one.
pub fn summarize_scores(values: &[f64]) -> StatsSummary {
    match compute_basic_stats(values) {
        Ok(stats) => StatsSummary {
            count: values.len(),
            mean: Some(stats.mean),
            minimum: Some(stats.minimum),
            maximum: Some(stats.maximum),
        },
        Err(_) => StatsSummary::empty(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
