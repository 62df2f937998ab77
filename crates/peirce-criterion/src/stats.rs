//! Descriptive statistics for a sample.

use serde::{Deserialize, Serialize};

use crate::errors::PeirceError;

/// Read-only summary of a sample: count, sum, mean, population variance
/// and standard deviation.
///
/// Variance and standard deviation divide by N (population form), not
/// N−1, matching the criterion's governing equations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleStats {
    /// Number of observations.
    pub n: usize,
    /// Sum of all values.
    pub sum: f64,
    /// Arithmetic mean.
    pub avg: f64,
    /// Population variance.
    pub var: f64,
    /// Population standard deviation.
    pub std: f64,
}

impl SampleStats {
    /// Compute the summary from a sample.
    ///
    /// Returns `InvalidArgument` for an empty sample — mean and variance
    /// are undefined.
    pub fn from_values(values: &[f64]) -> Result<Self, PeirceError> {
        if values.is_empty() {
            return Err(PeirceError::InvalidArgument {
                reason: "sample is empty; mean and variance are undefined".into(),
            });
        }

        let n = values.len();
        let n_f = n as f64;
        let sum: f64 = values.iter().sum();
        let avg = sum / n_f;
        let var = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / n_f;

        Ok(Self {
            n,
            sum,
            avg,
            var,
            std: var.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let s = SampleStats::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s.n, 4);
        assert_eq!(s.sum, 10.0);
        assert_eq!(s.avg, 2.5);
        // Population variance: mean of squared deviations.
        assert!((s.var - 1.25).abs() < 1e-12);
        assert!((s.std - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_element_has_zero_variance() {
        let s = SampleStats::from_values(&[42.0]).unwrap();
        assert_eq!(s.n, 1);
        assert_eq!(s.avg, 42.0);
        assert_eq!(s.var, 0.0);
        assert_eq!(s.std, 0.0);
    }

    #[test]
    fn test_empty_sample_rejected() {
        let err = SampleStats::from_values(&[]).unwrap_err();
        assert!(matches!(err, PeirceError::InvalidArgument { .. }));
    }
}
