//! # CLI Module
//!
//! Command definitions and handlers for the `notas` binary.
//!
//! Handlers return the rendered output instead of printing it, so the
//! entry point decides where it goes and tests can inspect it.

use clap::{Parser, Subcommand};
use notas_core::{DEFAULT_PASS_THRESHOLD, assess_risk, compute_final_grade, summarize_scores};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Errors from the CLI layer.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the scores file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A scores file entry is neither a number nor a numeric string.
    #[error("Invalid score: {0:?}")]
    InvalidScore(String),

    /// Conflicting arguments.
    #[error("Usage error: {0}")]
    Usage(String),
}

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Grading calculator: score statistics, final grades and risk bands.
#[derive(Debug, Parser)]
#[command(name = "notas", version, about)]
pub struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mean, minimum and maximum of a list of scores.
    Stats {
        /// Scores to summarize.
        #[arg(allow_negative_numbers = true)]
        scores: Vec<f64>,

        /// Read scores from a JSON file shaped like `{"notas": [7.5, 8.0]}`.
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// Final grade from two partial scores.
    Grade {
        #[arg(allow_negative_numbers = true)]
        score1: f64,

        #[arg(allow_negative_numbers = true)]
        score2: f64,

        /// Minimum mean required to pass.
        #[arg(long, short, env = "NOTAS_THRESHOLD", default_value_t = DEFAULT_PASS_THRESHOLD)]
        threshold: f64,
    },

    /// Risk band from the partial scores recorded so far.
    Risk {
        /// First exam score.
        #[arg(long, allow_negative_numbers = true)]
        p1: Option<f64>,

        /// Second exam score.
        #[arg(long, allow_negative_numbers = true)]
        p2: Option<f64>,
    },
}

/// Dispatch a parsed command line to its handler.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    match &cli.command {
        Command::Stats { scores, file } => cmd_stats(scores, file.as_deref(), cli.json),
        Command::Grade {
            score1,
            score2,
            threshold,
        } => cmd_grade(*score1, *score2, *threshold, cli.json),
        Command::Risk { p1, p2 } => cmd_risk(*p1, *p2, cli.json),
    }
}

// =============================================================================
// SCORE PAYLOAD
// =============================================================================

/// Scores file contents. `null` entries are skipped.
#[derive(Debug, Deserialize)]
struct ScoresPayload {
    #[serde(alias = "notas")]
    scores: Vec<Option<ScoreEntry>>,
}

/// A score written either as a JSON number or as a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScoreEntry {
    Number(f64),
    Text(String),
}

impl ScoreEntry {
    fn value(self) -> Result<f64, CliError> {
        match self {
            Self::Number(x) => Ok(x),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| CliError::InvalidScore(text)),
        }
    }
}

/// Load scores from a JSON payload file, dropping `null` entries.
///
/// Numeric strings such as `"7.5"` are accepted alongside numbers.
pub fn load_scores(path: &Path) -> Result<Vec<f64>, CliError> {
    let content = std::fs::read_to_string(path)?;
    let payload: ScoresPayload = serde_json::from_str(&content)?;
    let total = payload.scores.len();
    let scores = payload
        .scores
        .into_iter()
        .flatten()
        .map(ScoreEntry::value)
        .collect::<Result<Vec<f64>, CliError>>()?;

    debug!(
        path = %path.display(),
        total,
        kept = scores.len(),
        "Loaded scores file"
    );
    Ok(scores)
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Summarize scores given inline or through a payload file.
pub fn cmd_stats(scores: &[f64], file: Option<&Path>, json: bool) -> Result<String, CliError> {
    let loaded;
    let values = match file {
        Some(_) if !scores.is_empty() => {
            return Err(CliError::Usage(
                "pass scores either inline or with --file, not both".to_string(),
            ));
        }
        Some(path) => {
            loaded = load_scores(path)?;
            loaded.as_slice()
        }
        None => scores,
    };

    let summary = summarize_scores(values);
    info!(count = summary.count, "Computed score statistics");

    if json {
        return Ok(serde_json::to_string_pretty(&summary)?);
    }

    let Some(stats) = summary.stats() else {
        return Ok(format!("count: {}\nno scores to summarize", summary.count));
    };
    Ok(format!(
        "count: {}\nmean: {}\nminimum: {}\nmaximum: {}",
        summary.count, stats.mean, stats.minimum, stats.maximum
    ))
}

/// Compute the final grade of two partial scores.
pub fn cmd_grade(score1: f64, score2: f64, threshold: f64, json: bool) -> Result<String, CliError> {
    let result = compute_final_grade(score1, score2, threshold);
    info!(
        mean = result.mean,
        threshold,
        passed = result.passed,
        "Computed final grade"
    );

    if json {
        let output = serde_json::json!({
            "mean": result.mean,
            "passed": result.passed,
            "status": result.status(),
            "threshold": threshold,
        });
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    Ok(format!(
        "mean: {}\nthreshold: {}\nstatus: {}",
        result.mean,
        threshold,
        result.status()
    ))
}

/// Classify a student from whichever partial scores are known.
pub fn cmd_risk(p1: Option<f64>, p2: Option<f64>, json: bool) -> Result<String, CliError> {
    let assessment = assess_risk(p1, p2);
    info!(level = %assessment.level, "Assessed risk");

    if json {
        let output = serde_json::json!({
            "level": assessment.level,
            "mean": assessment.mean,
            "recommendation": assessment.recommendation(),
        });
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let mean = assessment
        .mean
        .map(|m| m.to_string())
        .unwrap_or_else(|| "-".to_string());
    Ok(format!(
        "risk: {}\nmean: {}\nrecommendation: {}",
        assessment.level,
        mean,
        assessment.recommendation()
    ))
}

// =============================================================================
// TESTS
// =============================================================================
