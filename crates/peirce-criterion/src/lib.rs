//! Peirce's criterion — statistical outlier rejection without a
//! user-chosen significance threshold.
//!
//! Implements Gould's formulation: an iterative solver for the squared
//! normalized-deviation cutoff x², and a partitioner that raises the
//! assumed outlier count until the classification is self-consistent.
//!
//! Dependency chain: Stats → Threshold → Partition

pub mod errors;
pub mod partition;
pub mod stats;
pub mod threshold;

pub use errors::PeirceError;
pub use partition::{separate_outliers, Partition};
pub use stats::SampleStats;
pub use threshold::peirce_threshold;
