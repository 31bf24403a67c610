//! Multi-class confusion-matrix metric engine
//!
//! Builds a per-class confusion tally from paired ground-truth/prediction
//! sequences, derives per-class statistics, and aggregates them into
//! micro/macro/weighted summaries:
//!
//! - `label`: generic [`Label`] bound and the one-hot [`LabelIndex`] adapter
//! - `tally`: [`TallyBuilder`] and the immutable [`ConfusionTally`]
//! - `stats`: per-class [`ClassCounts`] and [`ClassStats`]
//! - `aggregate`: [`GlobalStats`] with micro/macro/weighted policies
//! - `report`: sklearn-style text report

mod aggregate;
mod label;
mod report;
mod stats;
mod tally;


pub use aggregate::{GlobalStats, MacroAverage, MicroAverage};
pub use label::{Label, LabelIndex};
pub use report::classification_report;
pub use stats::{ClassCounts, ClassStats};
pub use tally::{ConfusionTally, Observation, TallyBuilder};
