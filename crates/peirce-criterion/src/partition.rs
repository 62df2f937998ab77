//! Outlier partitioner — raises the assumed outlier count until the
//! classification stabilizes.
//!
//! Every pass reclassifies the *entire* sample against the original
//! mean and standard deviation; nothing is removed incrementally.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::PeirceError;
use crate::stats::SampleStats;
use crate::threshold::peirce_threshold;

/// Result of partitioning a sample with Peirce's criterion.
///
/// `trimmed` and `outliers` are disjoint and together carry every value
/// of `original` (as multisets), each in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partition {
    /// The sample as given.
    pub original: Vec<f64>,
    /// Values retained by the criterion.
    pub trimmed: Vec<f64>,
    /// Values rejected as outliers.
    pub outliers: Vec<f64>,
}

/// Partition a sample into retained values and outliers.
///
/// Starts by assuming a single outlier and classifies every value
/// against `sqrt(x²) · std`. Whenever a pass flags more outliers than
/// assumed, the assumption is raised to the flagged count and the pass
/// repeats with the correspondingly looser threshold. Stops once the
/// flagged count no longer grows, or once the assumed count would reach
/// the sample size.
///
/// Returns `InvalidArgument` for an empty sample.
pub fn separate_outliers(values: &[f64]) -> Result<Partition, PeirceError> {
    let stats = SampleStats::from_values(values)?;

    // All values identical: nothing deviates, nothing to reject.
    if stats.std <= 0.0 || !stats.std.is_finite() {
        return Ok(Partition {
            original: values.to_vec(),
            trimmed: values.to_vec(),
            outliers: Vec::new(),
        });
    }

    let mut removed = 0_usize;
    let mut split = (values.to_vec(), Vec::new());

    // The solver needs the assumed count to stay below the sample size.
    while removed + 1 < stats.n {
        let assumed = removed + 1;
        let x2 = peirce_threshold(stats.n, assumed, 1)?;
        let max_deviation = x2.sqrt() * stats.std;
        split = classify(values, stats.avg, max_deviation);

        let flagged = split.1.len();
        debug!(assumed, flagged, max_deviation, "partition pass");
        if flagged <= removed {
            break; // Classification is self-consistent
        }
        removed = flagged;
    }

    let (trimmed, outliers) = split;
    Ok(Partition {
        original: values.to_vec(),
        trimmed,
        outliers,
    })
}

/// Single full pass: values strictly within `max_deviation` of the mean
/// are kept, the rest are flagged.
fn classify(values: &[f64], avg: f64, max_deviation: f64) -> (Vec<f64>, Vec<f64>) {
    let mut trimmed = Vec::with_capacity(values.len());
    let mut outliers = Vec::new();
    for &x in values {
        if (x - avg).abs() < max_deviation {
            trimmed.push(x);
        } else {
            outliers.push(x);
        }
    }
    (trimmed, outliers)
}
