//! Error types for tour construction.

use thiserror::Error;

/// Errors reported by [`TourPlanner::find_path`](crate::tour::TourPlanner::find_path).
///
/// Construction either completes or fails while validating its input,
/// before any path is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// The orientation lookup returned no orientations for an element.
    #[error("no orientations for element at index {index}")]
    NoOrientations {
        /// Position of the offending element in the input sequence.
        index: usize,
    },
}

/// Convenience alias for results carrying a [`TourError`].
pub type Result<T> = std::result::Result<T, TourError>;
