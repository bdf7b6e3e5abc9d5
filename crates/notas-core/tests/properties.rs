//! Property tests for the core numeric invariants.

#![allow(clippy::unwrap_used, clippy::panic)]

use notas_core::{Error, compute_basic_stats, compute_final_grade, summarize_scores};
use proptest::prelude::*;

fn scores() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 1..64)
}

proptest! {
    #[test]
    fn mean_lies_between_min_and_max(values in scores()) {
        let stats = compute_basic_stats(&values).unwrap();
        prop_assert!(stats.minimum <= stats.mean);
        prop_assert!(stats.mean <= stats.maximum);
    }

    #[test]
    fn mean_is_sum_over_count(values in scores()) {
        let stats = compute_basic_stats(&values).unwrap();
        let expected = values.iter().sum::<f64>() / values.len() as f64;
        prop_assert!((stats.mean - expected).abs() <= 1e-6);
    }

    #[test]
    fn min_and_max_are_members(values in scores()) {
        let stats = compute_basic_stats(&values).unwrap();
        prop_assert!(values.contains(&stats.minimum));
        prop_assert!(values.contains(&stats.maximum));
        prop_assert!(values.iter().all(|&x| stats.minimum <= x && x <= stats.maximum));
    }

    #[test]
    fn stats_are_bit_identical_across_calls(values in scores()) {
        let a = compute_basic_stats(&values).unwrap();
        let b = compute_basic_stats(&values).unwrap();
        prop_assert_eq!(a.mean.to_bits(), b.mean.to_bits());
        prop_assert_eq!(a.minimum.to_bits(), b.minimum.to_bits());
        prop_assert_eq!(a.maximum.to_bits(), b.maximum.to_bits());
    }

    #[test]
    fn summary_count_matches_len(values in prop::collection::vec(-100.0..100.0f64, 0..32)) {
        let summary = summarize_scores(&values);
        prop_assert_eq!(summary.count, values.len());
        prop_assert_eq!(summary.stats().is_some(), !values.is_empty());
    }

    #[test]
    fn grade_mean_is_exact_average(
        s1 in -1.0e6..1.0e6f64,
        s2 in -1.0e6..1.0e6f64,
        threshold in -1.0e6..1.0e6f64,
    ) {
        let result = compute_final_grade(s1, s2, threshold);
        prop_assert_eq!(result.mean.to_bits(), ((s1 + s2) / 2.0).to_bits());
        prop_assert_eq!(result.passed, result.mean >= threshold);
    }

    #[test]
    fn grade_passes_at_its_own_mean(s1 in 0.0..10.0f64, s2 in 0.0..10.0f64) {
        let mean = (s1 + s2) / 2.0;
        prop_assert!(compute_final_grade(s1, s2, mean).passed);
    }
}

#[test]
fn empty_series_is_rejected() {
    assert!(matches!(compute_basic_stats(&[]), Err(Error::InvalidInput(_))));
}
