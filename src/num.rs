//! Guarded numeric helpers shared by every derived ratio

use std::fmt::Display;

use crate::error::{MetricsError, Result};

/// Divide `num` by `den`, surfacing a zero denominator as
/// [`MetricsError::UndefinedRatio`] for the named ratio and subject.
///
/// Every ratio in the crate goes through this helper so zero division is
/// a defined, catchable condition rather than a NaN or infinity.
pub(crate) fn ratio(name: &'static str, subject: impl Display, num: f64, den: f64) -> Result<f64> {
    if den == 0.0 {
        return Err(MetricsError::UndefinedRatio {
            ratio: name,
            subject: subject.to_string(),
        });
    }
    Ok(num / den)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_defined() {
        assert_eq!(ratio("precision", "class A", 1.0, 2.0).unwrap(), 0.5);
    }

    #[test]
    fn test_ratio_zero_denominator() {
        let err = ratio("recall", "class B", 1.0, 0.0).unwrap_err();
        match err {
            MetricsError::UndefinedRatio { ratio, subject } => {
                assert_eq!(ratio, "recall");
                assert_eq!(subject, "class B");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
