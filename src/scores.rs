//! Sequence scoring helpers: RMSE and NDCG
//!
//! Closed-form reductions over paired numeric sequences, independent of the
//! confusion engine.

use crate::error::{MetricsError, Result};
use crate::num::ratio;

/// Root-mean-square error over two equal-length sequences.
///
/// RMSE = sqrt(mean((y_true - y_pred)²))
///
/// # Errors
///
/// `LengthMismatch` if the sequences differ in length; `UndefinedRatio`
/// for empty input (the mean has a zero denominator).
///
/// # Example
/// ```
/// let rmse = medir::rmse(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0])?;
/// assert!((rmse - (1.0f64 / 3.0).sqrt()).abs() < 1e-12);
/// # Ok::<(), medir::MetricsError>(())
/// ```
pub fn rmse(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(MetricsError::LengthMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        });
    }
    let squared_error: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    let mse = ratio("RMSE", "empty input", squared_error, y_true.len() as f64)?;
    Ok(mse.sqrt())
}

/// Normalized discounted cumulative gain: DCG(y_pred) / DCG(y_true).
///
/// DCG(seq) = Σ_{i=1..n} seq[i-1] / log2(i + 1), 1-indexed. The caller is
/// responsible for `y_true` being the ideal ordering; no resort is
/// performed.
///
/// # Errors
///
/// `LengthMismatch` if the sequences differ in length; `UndefinedRatio`
/// when DCG(y_true) is zero (including empty input).
pub fn ndcg(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(MetricsError::LengthMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        });
    }
    ratio("NDCG", "a zero ideal-ordering DCG", dcg(y_pred), dcg(y_true))
}

fn dcg(seq: &[f64]) -> f64 {
    seq.iter()
        .enumerate()
        .map(|(i, gain)| gain / ((i + 2) as f64).log2())
        .sum()
}
