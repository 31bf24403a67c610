//! Evaluation metrics for classification and recommendation outputs
//!
//! Provides a multi-class confusion-matrix metric suite plus RMSE and NDCG
//! sequence scores. Purely synchronous and in-memory; each evaluation run
//! owns its tally, so independent runs can proceed on separate threads.
//!
//! ## Architecture
//!
//! - `confusion`: tally builder, per-class statistics, micro/macro/weighted
//!   aggregation, text report
//! - `scores`: RMSE and NDCG helper functions
//! - `error`: crate error enum and `Result` alias
//!
//! ## FP/FN convention
//!
//! Per-class counts are **truth-conditional**: FP(c) counts observations
//! whose truth was `c` but whose prediction was not, and FN(c) counts
//! observations predicted as `c` whose truth was not. This is the inverse
//! of the sklearn convention and is applied uniformly, so
//! TP(c) + FP(c) = support(c) and per-class precision is the truth-side
//! ratio.
//!
//! ## Example
//!
//! ```
//! use medir::TallyBuilder;
//!
//! let mut builder = TallyBuilder::new();
//! builder.record_pair(&["Apple", "Apple", "Mango"], &["Apple", "Mango", "Mango"])?;
//! let tally = builder.build();
//!
//! let per_class = tally.per_class()?;
//! let global = tally.global()?;
//! assert_eq!(per_class[&"Apple"].counts.true_positives, 1);
//! assert!((global.micro.precision - global.micro.recall).abs() < 1e-12);
//! # Ok::<(), medir::MetricsError>(())
//! ```

pub mod confusion;
pub mod error;
mod num;
pub mod scores;

// Re-export the main types and functions
pub use confusion::{
    classification_report, ClassCounts, ClassStats, ConfusionTally, GlobalStats, Label,
    LabelIndex, MacroAverage, MicroAverage, Observation, TallyBuilder,
};
pub use error::{MetricsError, Result};
pub use scores::{ndcg, rmse};
