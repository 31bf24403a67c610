//! Global aggregation of per-class statistics
//!
//! Three policies, all computed simultaneously:
//! - micro: pool raw TP/FP/FN/TN across classes, then compute ratios once
//! - macro: unweighted mean of each per-class ratio
//! - weighted: per-class F1 weighted by support

use std::collections::BTreeMap;

use serde::Serialize;

use super::label::Label;
use super::stats::ClassStats;
use super::tally::ConfusionTally;
use crate::error::{MetricsError, Result};
use crate::num::ratio;

/// Micro-averaged statistics: ratios computed once from pooled counts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MicroAverage {
    /// Pooled TP across all classes.
    pub true_positives: u64,
    /// Pooled TN across all classes.
    pub true_negatives: u64,
    /// Pooled FP across all classes.
    pub false_positives: u64,
    /// Pooled FN across all classes.
    pub false_negatives: u64,
    /// Pooled TP / (TP + FP).
    pub precision: f64,
    /// Pooled TP / (TP + FN).
    pub recall: f64,
    /// F1 from the pooled precision and recall.
    pub f1: f64,
}

/// Macro-averaged statistics: unweighted means of the per-class ratios.
///
/// Macro-F1 is computed from the averaged precision and recall, not as the
/// mean of per-class F1 scores.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MacroAverage {
    /// Mean per-class precision.
    pub precision: f64,
    /// Mean per-class recall.
    pub recall: f64,
    /// Mean per-class specificity.
    pub specificity: f64,
    /// Mean per-class false-positive rate.
    pub false_positive_rate: f64,
    /// Mean per-class accuracy.
    pub accuracy: f64,
    /// 2 * precision * recall / (precision + recall) over the means.
    pub f1: f64,
}

/// Global summary: micro, macro, and support-weighted aggregates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GlobalStats {
    /// Pooled-count aggregate.
    pub micro: MicroAverage,
    /// Unweighted mean aggregate.
    pub macro_avg: MacroAverage,
    /// Per-class F1 weighted by support.
    pub weighted_f1: f64,
}

impl GlobalStats {
    /// Aggregate per-class records under all three policies.
    ///
    /// # Errors
    ///
    /// `MissingConfusionData` for an empty record set; `UndefinedRatio` if a
    /// pooled or averaged denominator is zero.
    pub fn from_per_class<L: Label>(per_class: &BTreeMap<L, ClassStats>) -> Result<Self> {
        if per_class.is_empty() {
            return Err(MetricsError::MissingConfusionData);
        }

        // Micro: pool counts, then derive once.
        let tp: u64 = per_class.values().map(|s| s.counts.true_positives).sum();
        let tn: u64 = per_class.values().map(|s| s.counts.true_negatives).sum();
        let fp: u64 = per_class.values().map(|s| s.counts.false_positives).sum();
        let fn_: u64 = per_class.values().map(|s| s.counts.false_negatives).sum();
        let precision = ratio("micro precision", "all classes", tp as f64, (tp + fp) as f64)?;
        let recall = ratio("micro recall", "all classes", tp as f64, (tp + fn_) as f64)?;
        let f1 = ratio(
            "micro F1",
            "all classes",
            2.0 * precision * recall,
            precision + recall,
        )?;
        let micro = MicroAverage {
            true_positives: tp,
            true_negatives: tn,
            false_positives: fp,
            false_negatives: fn_,
            precision,
            recall,
            f1,
        };

        // Macro: unweighted means; per-class ratios are already defined or
        // the caller never got this far.
        let n = per_class.len() as f64;
        let precision = per_class.values().map(|s| s.precision).sum::<f64>() / n;
        let recall = per_class.values().map(|s| s.recall).sum::<f64>() / n;
        let specificity = per_class.values().map(|s| s.specificity).sum::<f64>() / n;
        let false_positive_rate = per_class
            .values()
            .map(|s| s.false_positive_rate)
            .sum::<f64>()
            / n;
        let accuracy = per_class.values().map(|s| s.accuracy).sum::<f64>() / n;
        let f1 = ratio(
            "macro F1",
            "all classes",
            2.0 * precision * recall,
            precision + recall,
        )?;
        let macro_avg = MacroAverage {
            precision,
            recall,
            specificity,
            false_positive_rate,
            accuracy,
            f1,
        };

        // Weighted: per-class F1 weighted by true-label support.
        let weighted_num: f64 = per_class
            .values()
            .map(|s| s.f1 * s.counts.support as f64)
            .sum();
        let total_support: u64 = per_class.values().map(|s| s.counts.support).sum();
        let weighted_f1 = ratio(
            "weighted F1",
            "all classes",
            weighted_num,
            total_support as f64,
        )?;

        Ok(Self {
            micro,
            macro_avg,
            weighted_f1,
        })
    }
}

impl<L: Label> ConfusionTally<L> {
    /// Derive per-class records and aggregate them in one step.
    ///
    /// # Errors
    ///
    /// As [`ConfusionTally::per_class`] and [`GlobalStats::from_per_class`].
    pub fn global(&self) -> Result<GlobalStats> {
        GlobalStats::from_per_class(&self.per_class()?)
    }
}
