//! Generic class labels and the positional label index

use std::fmt;

use serde::Serialize;

use crate::error::{MetricsError, Result};

/// A class label: any ordered, clonable, printable identifier.
///
/// Blanket-implemented, so `&str`, `String`, integers, and user enums all
/// work without adapters. Ordering gives the tally and every report a
/// deterministic label order.
pub trait Label: Clone + Ord + fmt::Debug + fmt::Display {}

impl<T: Clone + Ord + fmt::Debug + fmt::Display> Label for T {}

/// Sorted, deduplicated index of distinct class labels.
///
/// Used only when inputs arrive in one-hot/positional form: column `i` of a
/// one-hot row corresponds to `index.get(i)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LabelIndex<L: Label> {
    labels: Vec<L>,
}

impl<L: Label> LabelIndex<L> {
    /// Build an index from any collection of labels; duplicates are removed
    /// and the result is sorted for determinism.
    pub fn from_labels(labels: impl IntoIterator<Item = L>) -> Self {
        let mut labels: Vec<L> = labels.into_iter().collect();
        labels.sort();
        labels.dedup();
        Self { labels }
    }

    /// Label at position `pos`, if in range.
    pub fn get(&self, pos: usize) -> Option<&L> {
        self.labels.get(pos)
    }

    /// Position of `label` in the index.
    pub fn position(&self, label: &L) -> Option<usize> {
        self.labels.binary_search(label).ok()
    }

    /// All labels in index order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the index holds no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Decode one one-hot (or score) row to its label by argmax.
    ///
    /// Ties break to the first maximum. `row_idx` is only used to name the
    /// offending row in errors.
    pub fn decode_row(&self, row_idx: usize, row: &[f64]) -> Result<L> {
        // An empty index has no label to decode to; an empty row against
        // an empty index is still a width mismatch.
        if row.len() != self.labels.len() || self.labels.is_empty() {
            return Err(MetricsError::EncodingWidthMismatch {
                row: row_idx,
                width: row.len(),
                expected: self.labels.len(),
            });
        }
        let mut best = 0;
        for (i, value) in row.iter().enumerate() {
            if *value > row[best] {
                best = i;
            }
        }
        Ok(self.labels[best].clone())
    }
}
