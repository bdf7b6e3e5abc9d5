//! # Grade Module
//!
//! Final grade from two partial scores, with pass/fail against a threshold.
//!
//! The final grade is the plain two-score average. Scores and threshold are
//! not range-checked: a 0-10 scale and a 0-100 scale work the same way.

use serde::{Deserialize, Serialize};

/// Threshold applied when the caller does not pick one.
pub const DEFAULT_PASS_THRESHOLD: f64 = 7.0;

/// Outcome of a final grade computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    /// `(score1 + score2) / 2`.
    pub mean: f64,
    /// `mean >= threshold`.
    pub passed: bool,
}

/// Pass/fail status of a [`GradeResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeStatus {
    Passed,
    Failed,
}

impl GradeResult {
    /// Status as an enum instead of a bare bool.
    #[must_use]
    pub fn status(&self) -> GradeStatus {
        if self.passed {
            GradeStatus::Passed
        } else {
            GradeStatus::Failed
        }
    }
}

impl std::fmt::Display for GradeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Average two partial scores and compare against `threshold`.
///
/// The boundary is inclusive: a mean equal to the threshold passes.
#[must_use]
pub fn compute_final_grade(score1: f64, score2: f64, threshold: f64) -> GradeResult {
    let mean = (score1 + score2) / 2.0;
    GradeResult {
        mean,
        passed: mean >= threshold,
    }
}

// =============================================================================
// TESTS
// =============================================================================
