//! # Notas Core
//!
//! Pure grading computations: descriptive statistics over a list of scores,
//! the final grade from two partial scores, and a risk band for a student.
//!
//! Every function here is deterministic and side-effect free. File I/O,
//! argument parsing and logging live in the app layer (`apps/notas`).
//!
//! ```
//! use notas_core::{compute_basic_stats, compute_final_grade};
//!
//! let stats = compute_basic_stats(&[2.0, 8.0, 4.0]).unwrap();
//! assert_eq!(stats.minimum, 2.0);
//! assert_eq!(stats.maximum, 8.0);
//!
//! let grade = compute_final_grade(6.0, 8.0, 7.0);
//! assert!(grade.passed);
//! ```

pub mod error;
pub mod grade;
pub mod risk;
pub mod stats;

pub use error::{Error, Result};
pub use grade::{DEFAULT_PASS_THRESHOLD, GradeResult, GradeStatus, compute_final_grade};
pub use risk::{HIGH_RISK_BELOW, MODERATE_RISK_BELOW, RiskAssessment, RiskLevel, assess_risk};
pub use stats::{BasicStats, StatsSummary, compute_basic_stats, summarize_scores};
