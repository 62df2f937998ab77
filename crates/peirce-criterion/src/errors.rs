//! Errors for the threshold solver and the partitioner.

/// Errors that can occur while solving for a threshold or partitioning
/// a sample.
#[derive(Debug, thiserror::Error)]
pub enum PeirceError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error(
        "threshold iteration exceeded {iterations} rounds without converging \
         (|r_new - r_old| = {delta:e})"
    )]
    ConvergenceFailure { iterations: usize, delta: f64 },
}
