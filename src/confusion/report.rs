//! Text report over a confusion tally

use super::label::Label;
use super::tally::ConfusionTally;
use crate::error::Result;

/// Generate an sklearn-style classification report from a tally.
///
/// Per-class rows keyed by label, then micro/macro/weighted average rows
/// and the overall accuracy. Counts follow the crate's truth-conditional
/// FP/FN convention.
///
/// # Errors
///
/// As [`ConfusionTally::per_class`]: `MissingConfusionData` for an empty
/// tally, `UndefinedRatio` if any class ratio is undefined.
///
/// # Example
/// ```
/// use medir::TallyBuilder;
///
/// let mut builder = TallyBuilder::new();
/// builder.record_pair(&["a", "a", "b"], &["a", "b", "b"])?;
/// let report = medir::classification_report(&builder.build())?;
/// println!("{report}");
/// # Ok::<(), medir::MetricsError>(())
/// ```
pub fn classification_report<L: Label>(tally: &ConfusionTally<L>) -> Result<String> {
    let per_class = tally.per_class()?;
    let global = crate::confusion::GlobalStats::from_per_class(&per_class)?;

    let name_width = per_class
        .keys()
        .map(|l| l.to_string().len())
        .max()
        .unwrap_or(0)
        .max("weighted avg".len());

    let mut report = String::new();

    report.push_str(&format!(
        "{:>name_width$} {:>10} {:>10} {:>10} {:>10}\n",
        "", "precision", "recall", "f1-score", "support"
    ));
    report.push_str(&"-".repeat(name_width + 44));
    report.push('\n');

    for (label, stats) in &per_class {
        report.push_str(&format!(
            "{:>name_width$} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
            label.to_string(),
            stats.precision,
            stats.recall,
            stats.f1,
            stats.counts.support
        ));
    }

    report.push_str(&"-".repeat(name_width + 44));
    report.push('\n');

    let total_support: u64 = per_class.values().map(|s| s.counts.support).sum();

    report.push_str(&format!(
        "{:>name_width$} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
        "micro avg", global.micro.precision, global.micro.recall, global.micro.f1, total_support
    ));
    report.push_str(&format!(
        "{:>name_width$} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
        "macro avg",
        global.macro_avg.precision,
        global.macro_avg.recall,
        global.macro_avg.f1,
        total_support
    ));
    report.push_str(&format!(
        "{:>name_width$} {:>10} {:>10} {:>10.2} {:>10}\n",
        "weighted avg", "", "", global.weighted_f1, total_support
    ));

    report.push_str(&format!("\nAccuracy: {:.4}\n", tally.accuracy()?));

    Ok(report)
}
