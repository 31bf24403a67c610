//! Property tests for the metric suite
//!
//! Ensures the confusion engine satisfies its mathematical invariants:
//! - ratios bounded to [0, 1], never NaN or infinity
//! - count conservation across classes
//! - micro precision = micro recall = accuracy in the single-label case
//! - weighted F1 is a convex combination of per-class F1
//! - rebuilding the same observations yields identical records

use medir::{ndcg, rmse, TallyBuilder};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// Strategy Helpers
// =============================================================================

/// Generate a pair of equal-length label sequences over [0, n_classes).
fn label_pair(
    n_classes: usize,
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    len.prop_flat_map(move |l| (vec(0..n_classes, l), vec(0..n_classes, l)))
}

/// Like `label_pair`, but with one correct observation appended per class so
/// every class has a true positive and every per-class ratio is defined.
fn covered_label_pair(
    n_classes: usize,
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    label_pair(n_classes, len).prop_map(move |(mut y_true, mut y_pred)| {
        y_true.extend(0..n_classes);
        y_pred.extend(0..n_classes);
        (y_true, y_pred)
    })
}

fn build_tally(y_true: &[usize], y_pred: &[usize]) -> medir::ConfusionTally<usize> {
    let mut builder = TallyBuilder::new();
    builder.record_pair(y_true, y_pred).expect("equal lengths");
    builder.build()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // -------------------------------------------------------------------------
    // Count Conservation
    // -------------------------------------------------------------------------

    #[test]
    fn prop_counts_conserve_observations(
        (y_true, y_pred) in label_pair(5, 1..60)
    ) {
        let tally = build_tally(&y_true, &y_pred);
        let counts = tally.per_class_counts();

        let tp_fp: u64 = counts.values().map(|c| c.true_positives + c.false_positives).sum();
        let tp_fn: u64 = counts.values().map(|c| c.true_positives + c.false_negatives).sum();

        prop_assert_eq!(tp_fp, tally.total());
        prop_assert_eq!(tp_fn, tally.total());
    }

    #[test]
    fn prop_tp_plus_fp_is_support(
        (y_true, y_pred) in label_pair(4, 1..60)
    ) {
        let tally = build_tally(&y_true, &y_pred);
        for (label, counts) in tally.per_class_counts() {
            prop_assert_eq!(
                counts.true_positives + counts.false_positives,
                tally.support(&label)
            );
        }
    }

    // -------------------------------------------------------------------------
    // Ratio Bounds
    // -------------------------------------------------------------------------

    #[test]
    fn prop_ratios_bounded(
        (y_true, y_pred) in covered_label_pair(4, 0..40)
    ) {
        let tally = build_tally(&y_true, &y_pred);
        let per_class = tally.per_class().expect("all ratios defined");

        for stats in per_class.values() {
            for value in [
                stats.precision,
                stats.recall,
                stats.specificity,
                stats.false_positive_rate,
                stats.accuracy,
                stats.f1,
            ] {
                prop_assert!((0.0..=1.0).contains(&value), "ratio {} not in [0, 1]", value);
                prop_assert!(!value.is_nan() && !value.is_infinite());
            }
        }
    }

    // -------------------------------------------------------------------------
    // Aggregation Properties
    // -------------------------------------------------------------------------

    #[test]
    fn prop_micro_precision_equals_recall_equals_accuracy(
        (y_true, y_pred) in covered_label_pair(4, 0..40)
    ) {
        let tally = build_tally(&y_true, &y_pred);
        let global = tally.global().expect("all ratios defined");
        let accuracy = tally.accuracy().expect("non-empty");

        prop_assert!((global.micro.precision - global.micro.recall).abs() < 1e-12);
        prop_assert!((global.micro.precision - accuracy).abs() < 1e-12);
        prop_assert!((global.micro.f1 - accuracy).abs() < 1e-12);
    }

    #[test]
    fn prop_weighted_f1_is_convex_combination(
        (y_true, y_pred) in covered_label_pair(5, 0..40)
    ) {
        let tally = build_tally(&y_true, &y_pred);
        let per_class = tally.per_class().expect("all ratios defined");
        let global = tally.global().expect("all ratios defined");

        let min = per_class.values().map(|s| s.f1).fold(f64::INFINITY, f64::min);
        let max = per_class.values().map(|s| s.f1).fold(f64::NEG_INFINITY, f64::max);

        prop_assert!(
            global.weighted_f1 >= min - 1e-12 && global.weighted_f1 <= max + 1e-12,
            "weighted F1 {} outside [{}, {}]",
            global.weighted_f1, min, max
        );
    }

    #[test]
    fn prop_rebuild_is_idempotent(
        (y_true, y_pred) in covered_label_pair(3, 0..30)
    ) {
        let first = build_tally(&y_true, &y_pred);
        let second = build_tally(&y_true, &y_pred);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.per_class().unwrap(), second.per_class().unwrap());
        prop_assert_eq!(first.global().unwrap(), second.global().unwrap());
    }

    // -------------------------------------------------------------------------
    // Sequence Scores
    // -------------------------------------------------------------------------

    #[test]
    fn prop_rmse_non_negative_and_finite(
        pairs in vec((-1e6f64..1e6, -1e6f64..1e6), 1..50)
    ) {
        let (y_true, y_pred): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let rmse = rmse(&y_true, &y_pred).expect("equal lengths, non-empty");

        prop_assert!(rmse >= 0.0);
        prop_assert!(!rmse.is_nan() && !rmse.is_infinite());
    }

    #[test]
    fn prop_rmse_zero_iff_identical(
        y_true in vec(-1e6f64..1e6, 1..50)
    ) {
        let rmse = rmse(&y_true, &y_true).expect("equal lengths, non-empty");
        prop_assert!(rmse.abs() < 1e-12);
    }

    #[test]
    fn prop_ndcg_of_ideal_ordering_is_one(
        gains in vec(0.1f64..100.0, 1..50)
    ) {
        let ndcg = ndcg(&gains, &gains).expect("positive ideal DCG");
        prop_assert!((ndcg - 1.0).abs() < 1e-12);
    }
}
