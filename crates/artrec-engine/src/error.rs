//! Engine error types.

/// Errors from building a [`crate::Recommender`].
///
/// Queries never fail: unknown users and articles degrade to the popularity
/// ranking or an empty list.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Error loading the input datasets.
    #[error("dataset error: {0}")]
    Data(#[from] artrec_data::DataError),
}
