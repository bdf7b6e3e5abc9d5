//! # Risk Module
//!
//! Rule-based risk band for a student, from the two partial scores
//! recorded so far.
//!
//! Rules:
//! - Both scores present: mean below 5 is `High`, below 7 is `Moderate`,
//!   otherwise `Ok`.
//! - Only the first score present and below 5: `Moderate`.
//! - Anything else: `Pending`.

use crate::grade::{DEFAULT_PASS_THRESHOLD, compute_final_grade};
use serde::{Deserialize, Serialize};

/// Means strictly below this are high risk.
pub const HIGH_RISK_BELOW: f64 = 5.0;

/// Means strictly below this (and not high risk) are moderate risk.
pub const MODERATE_RISK_BELOW: f64 = DEFAULT_PASS_THRESHOLD;

/// Risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Not enough scores to judge.
    Pending,
    Ok,
    Moderate,
    High,
}

impl RiskLevel {
    /// Short advice shown next to the band.
    #[must_use]
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Pending => "Wait until both exams are graded.",
            Self::Ok => "Good performance. Keep it up.",
            Self::Moderate => "Step up revision to bring the mean above 7.",
            Self::High => "Seek tutoring and review the fundamentals.",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pending => "pending",
            Self::Ok => "ok",
            Self::Moderate => "moderate",
            Self::High => "high",
        };
        write!(f, "{}", name)
    }
}

/// Risk band plus the mean it was derived from, when both scores exist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub mean: Option<f64>,
}

impl RiskAssessment {
    /// Advice for this student.
    ///
    /// A moderate band without a mean can only come from a low first score
    /// with the second exam still ahead, which gets its own early warning.
    #[must_use]
    pub fn recommendation(&self) -> &'static str {
        match (self.level, self.mean) {
            (RiskLevel::Moderate, None) => {
                "Study harder before the second exam (first score below 5)."
            }
            (level, _) => level.recommendation(),
        }
    }
}

/// Classify a student from their partial scores.
#[must_use]
pub fn assess_risk(score1: Option<f64>, score2: Option<f64>) -> RiskAssessment {
    match (score1, score2) {
        (Some(s1), Some(s2)) => {
            let mean = compute_final_grade(s1, s2, DEFAULT_PASS_THRESHOLD).mean;
            let level = if mean < HIGH_RISK_BELOW {
                RiskLevel::High
            } else if mean < MODERATE_RISK_BELOW {
                RiskLevel::Moderate
            } else {
                RiskLevel::Ok
            };
            RiskAssessment {
                level,
                mean: Some(mean),
            }
        }
        (Some(s1), None) if s1 < HIGH_RISK_BELOW => RiskAssessment {
            level: RiskLevel::Moderate,
            mean: None,
        },
        _ => RiskAssessment {
            level: RiskLevel::Pending,
            mean: None,
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_from_mean() {
        assert_eq!(assess_risk(Some(4.0), Some(5.0)).level, RiskLevel::High);
        assert_eq!(assess_risk(Some(6.0), Some(7.0)).level, RiskLevel::Moderate);
        assert_eq!(assess_risk(Some(7.0), Some(7.0)).level, RiskLevel::Ok);
    }

    #[test]
    fn band_edges_are_inclusive_upwards() {
        assert_eq!(assess_risk(Some(5.0), Some(5.0)).level, RiskLevel::Moderate);
        assert_eq!(assess_risk(Some(6.0), Some(8.0)).level, RiskLevel::Ok);
    }

    #[test]
    fn low_first_score_alone_is_moderate() {
        let assessment = assess_risk(Some(4.0), None);
        assert_eq!(assessment.level, RiskLevel::Moderate);
        assert_eq!(assessment.mean, None);
    }

    #[test]
    fn low_first_score_gets_early_warning() {
        let early = assess_risk(Some(4.0), None);
        let complete = assess_risk(Some(6.0), Some(6.0));
        assert_eq!(complete.level, RiskLevel::Moderate);
        assert_ne!(early.recommendation(), complete.recommendation());
        assert!(early.recommendation().contains("second exam"));
        assert_eq!(complete.recommendation(), RiskLevel::Moderate.recommendation());
    }

    #[test]
    fn incomplete_scores_are_pending() {
        assert_eq!(assess_risk(Some(6.0), None).level, RiskLevel::Pending);
        assert_eq!(assess_risk(None, Some(2.0)).level, RiskLevel::Pending);
        assert_eq!(assess_risk(None, None).level, RiskLevel::Pending);
    }

    #[test]
    fn mean_is_reported_when_complete() {
        assert_eq!(assess_risk(Some(3.0), Some(4.0)).mean, Some(3.5));
    }

    #[test]
    fn every_band_has_advice() {
        for level in [
            RiskLevel::Pending,
            RiskLevel::Ok,
            RiskLevel::Moderate,
            RiskLevel::High,
        ] {
            assert!(!level.recommendation().is_empty());
        }
    }
}
