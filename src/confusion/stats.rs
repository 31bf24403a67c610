//! Per-class statistics derived from a confusion tally
//!
//! Counts follow the truth-conditional convention (see the crate docs):
//! for class `c`, FP(c) counts observations whose truth was `c` but whose
//! prediction was not, and FN(c) counts observations predicted as `c`
//! whose truth was not. This is the inverse of the sklearn convention and
//! is applied uniformly across per-class and global derivations.

use std::collections::BTreeMap;

use serde::Serialize;

use super::label::Label;
use super::tally::ConfusionTally;
use crate::error::{MetricsError, Result};
use crate::num::ratio;

/// Raw confusion counts for one class. Pure derivation, never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClassCounts {
    /// Truth and prediction both this class.
    pub true_positives: u64,
    /// Neither truth nor prediction this class.
    pub true_negatives: u64,
    /// Truth was this class, predicted another (truth-conditional).
    pub false_positives: u64,
    /// Predicted this class, truth was another (truth-conditional).
    pub false_negatives: u64,
    /// Total observations whose truth is this class.
    pub support: u64,
}

/// Counts plus derived ratios for one class.
///
/// Every ratio is in [0, 1]; a zero denominator surfaces as
/// [`MetricsError::UndefinedRatio`] during derivation, so a constructed
/// record never carries NaN or infinity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClassStats {
    /// Raw confusion counts.
    pub counts: ClassCounts,
    /// TP / (TP + FP).
    pub precision: f64,
    /// TP / (TP + FN).
    pub recall: f64,
    /// TN / (TN + FP).
    pub specificity: f64,
    /// FP / (FP + TN).
    pub false_positive_rate: f64,
    /// (TP + TN) / (TP + TN + FP + FN).
    pub accuracy: f64,
    /// 2 * precision * recall / (precision + recall).
    pub f1: f64,
}

impl<L: Label> ConfusionTally<L> {
    /// Confusion counts for one class.
    pub fn class_counts(&self, label: &L) -> ClassCounts {
        let tp = self.count(label, label);
        let fp = self.support(label) - tp;
        let fn_ = self.predicted_total(label) - tp;
        let tn = self.total() - tp - fp - fn_;
        ClassCounts {
            true_positives: tp,
            true_negatives: tn,
            false_positives: fp,
            false_negatives: fn_,
            support: self.support(label),
        }
    }

    /// Confusion counts for every observed class, keyed by label.
    pub fn per_class_counts(&self) -> BTreeMap<L, ClassCounts> {
        self.labels()
            .map(|label| (label.clone(), self.class_counts(label)))
            .collect()
    }

    /// Full statistics record for one class.
    ///
    /// # Errors
    ///
    /// `UndefinedRatio` when a ratio's denominator is zero for this class.
    pub fn class_stats(&self, label: &L) -> Result<ClassStats> {
        let counts = self.class_counts(label);
        let subject = format!("class {label}");
        let tp = counts.true_positives as f64;
        let tn = counts.true_negatives as f64;
        let fp = counts.false_positives as f64;
        let fn_ = counts.false_negatives as f64;

        let precision = ratio("precision", &subject, tp, tp + fp)?;
        let recall = ratio("recall", &subject, tp, tp + fn_)?;
        let specificity = ratio("specificity", &subject, tn, tn + fp)?;
        let false_positive_rate = ratio("false positive rate", &subject, fp, fp + tn)?;
        let accuracy = ratio("accuracy", &subject, tp + tn, tp + tn + fp + fn_)?;
        let f1 = ratio("F1", &subject, 2.0 * precision * recall, precision + recall)?;

        Ok(ClassStats {
            counts,
            precision,
            recall,
            specificity,
            false_positive_rate,
            accuracy,
            f1,
        })
    }

    /// Statistics for every observed class, keyed by label.
    ///
    /// # Errors
    ///
    /// `MissingConfusionData` if the tally holds no observations;
    /// `UndefinedRatio` propagated from the first affected class. Callers
    /// wanting to skip or zero-fill such classes can derive from
    /// [`ConfusionTally::per_class_counts`] instead.
    pub fn per_class(&self) -> Result<BTreeMap<L, ClassStats>> {
        if self.is_empty() {
            return Err(MetricsError::MissingConfusionData);
        }
        self.labels()
            .map(|label| Ok((label.clone(), self.class_stats(label)?)))
            .collect()
    }
}
