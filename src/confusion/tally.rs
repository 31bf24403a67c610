//! Confusion tally: accumulated true x predicted counts
//!
//! A [`TallyBuilder`] consumes paired observations (label sequences or
//! one-hot matrices decoded through a [`LabelIndex`]) and produces an
//! immutable [`ConfusionTally`]. Cell `(t, p)` counts samples whose true
//! label was `t` and predicted label was `p`.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::label::{Label, LabelIndex};
use crate::error::{MetricsError, Result};

/// One paired observation: the true label and the predicted label.
///
/// Both input representations are adapted into observations before
/// tallying, so everything downstream is representation-agnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Observation<L: Label> {
    /// Ground-truth class.
    pub truth: L,
    /// Predicted class.
    pub predicted: L,
}

/// Builder accumulating observations into a [`ConfusionTally`].
///
/// Multiple sequence pairs may be recorded into one builder (instance-level
/// batching); `build` consumes the builder and freezes the tally.
#[derive(Clone, Debug, Default)]
pub struct TallyBuilder<L: Label> {
    depth: Option<usize>,
    cells: BTreeMap<L, BTreeMap<L, u64>>,
}

impl<L: Label> TallyBuilder<L> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            depth: None,
            cells: BTreeMap::new(),
        }
    }

    /// Only the first `k` elements of each recorded sequence participate,
    /// for metric@k style evaluation.
    pub fn truncate_at(mut self, k: usize) -> Self {
        self.depth = Some(k);
        self
    }

    /// Record one pair of equal-length label sequences.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` if the sequences differ in length;
    /// `InvalidTruncation` if a configured truncation depth exceeds the
    /// sequence length.
    pub fn record_pair(&mut self, y_true: &[L], y_pred: &[L]) -> Result<()> {
        if y_true.len() != y_pred.len() {
            return Err(MetricsError::LengthMismatch {
                expected: y_true.len(),
                actual: y_pred.len(),
            });
        }
        let take = match self.depth {
            Some(k) if k > y_true.len() => {
                return Err(MetricsError::InvalidTruncation {
                    k,
                    len: y_true.len(),
                })
            }
            Some(k) => k,
            None => y_true.len(),
        };
        for (truth, predicted) in y_true.iter().zip(y_pred.iter()).take(take) {
            self.record(Observation {
                truth: truth.clone(),
                predicted: predicted.clone(),
            });
        }
        Ok(())
    }

    /// Record one pair of equal-length one-hot row matrices, decoded to
    /// labels through `index` (argmax per row).
    ///
    /// # Errors
    ///
    /// `EncodingWidthMismatch` if a row's width differs from the index;
    /// otherwise as [`TallyBuilder::record_pair`].
    pub fn record_one_hot(
        &mut self,
        index: &LabelIndex<L>,
        y_true: &[Vec<f64>],
        y_pred: &[Vec<f64>],
    ) -> Result<()> {
        let truths = decode_matrix(index, y_true)?;
        let predictions = decode_matrix(index, y_pred)?;
        self.record_pair(&truths, &predictions)
    }

    /// Freeze the accumulated counts into an immutable tally.
    pub fn build(self) -> ConfusionTally<L> {
        ConfusionTally { cells: self.cells }
    }

    fn record(&mut self, obs: Observation<L>) {
        let Observation { truth, predicted } = obs;
        // Seed rows and reflexive/cross zero cells for both labels before
        // incrementing, so TP lookups downstream never miss a key.
        let row = self.cells.entry(truth.clone()).or_default();
        row.entry(truth.clone()).or_insert(0);
        *row.entry(predicted.clone()).or_insert(0) += 1;

        let row = self.cells.entry(predicted.clone()).or_default();
        row.entry(predicted).or_insert(0);
        row.entry(truth).or_insert(0);
    }
}

fn decode_matrix<L: Label>(index: &LabelIndex<L>, rows: &[Vec<f64>]) -> Result<Vec<L>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| index.decode_row(i, row))
        .collect()
}

/// Immutable confusion tally over an open label set.
///
/// Sparse ordered map keyed true label -> predicted label -> count; every
/// label observed in either position has its own row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfusionTally<L: Label> {
    cells: BTreeMap<L, BTreeMap<L, u64>>,
}

impl<L: Label> ConfusionTally<L> {
    /// All observed labels, in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.cells.keys()
    }

    /// Number of distinct labels observed.
    pub fn n_classes(&self) -> usize {
        self.cells.len()
    }

    /// Count at cell (true, predicted); unseeded cells read as 0.
    pub fn count(&self, truth: &L, predicted: &L) -> u64 {
        self.cells
            .get(truth)
            .and_then(|row| row.get(predicted))
            .copied()
            .unwrap_or(0)
    }

    /// Support: total observations whose true label is `label`.
    pub fn support(&self, label: &L) -> u64 {
        self.cells
            .get(label)
            .map(|row| row.values().sum())
            .unwrap_or(0)
    }

    /// Total observations whose predicted label is `label`.
    pub fn predicted_total(&self, label: &L) -> u64 {
        self.cells.values().filter_map(|row| row.get(label)).sum()
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.cells.values().flat_map(|row| row.values()).sum()
    }

    /// Whether the tally holds no observations.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Overall accuracy: proportion of observations on the diagonal.
    ///
    /// # Errors
    ///
    /// `MissingConfusionData` if no observations were recorded.
    pub fn accuracy(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(MetricsError::MissingConfusionData);
        }
        let correct: u64 = self
            .cells
            .iter()
            .map(|(t, row)| row.get(t).copied().unwrap_or(0))
            .sum();
        Ok(correct as f64 / self.total() as f64)
    }
}

impl<L: Label> fmt::Display for ConfusionTally<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion tally (rows: true, columns: predicted):")?;

        let width = self
            .cells
            .keys()
            .map(|l| l.to_string().len())
            .max()
            .unwrap_or(0)
            .max(5)
            + 2;

        // Header
        write!(f, "{:>width$}", "")?;
        for predicted in self.cells.keys() {
            write!(f, "{:>width$}", predicted.to_string())?;
        }
        writeln!(f)?;

        // Rows
        for truth in self.cells.keys() {
            write!(f, "{:>width$}", truth.to_string())?;
            for predicted in self.cells.keys() {
                write!(f, "{:>width$}", self.count(truth, predicted))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
