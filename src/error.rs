//! Error types in linfa-elbow
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ElbowError>;

/// An error when checking the candidate range of a sweep
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElbowParamsError {
    #[error("k_min cannot be 0, a clustering needs at least one cluster")]
    KMin,
}

/// An error when sweeping cluster counts or rendering the elbow chart
#[derive(Error, Debug)]
pub enum ElbowError {
    /// When the candidate range is invalid
    #[error("Invalid hyperparameter: {0}")]
    InvalidParams(#[from] ElbowParamsError),
    /// When a candidate asks for more clusters than there are samples
    #[error("cannot fit {n_clusters} clusters on {n_samples} samples")]
    NotEnoughSamples { n_clusters: usize, n_samples: usize },
    #[error(transparent)]
    KMeans(#[from] linfa_clustering::KMeansError),
    #[error(transparent)]
    LinfaError(#[from] linfa::error::Error),
    /// When the plotting backend fails to draw or write the chart
    #[error("rendering failed: {0}")]
    Render(String),
}
