//! Error types shared by the move engine, solver and executor.

use thiserror::Error;

use super::phase::Phase;

/// Errors raised by the cube engine.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CubeError {
    /// Move text is not one of the nine layer letters with an optional
    /// `'` or `2` modifier.
    #[error("invalid move notation: {0:?}")]
    InvalidMoveNotation(String),

    /// A facelet string is malformed or does not hold nine of each color.
    #[error("invalid facelets: {0}")]
    InvalidFacelets(String),

    /// Speed must be positive and not NaN.
    #[error("invalid speed: {0} moves per second")]
    InvalidSpeed(f64),

    /// A session observed its cancellation token at a suspension point.
    #[error("operation cancelled")]
    OperationCancelled,

    /// A decision table found no matching case. Only possible on an
    /// unreachable or corrupted cube state.
    #[error("{phase}: no case matched ({detail})")]
    UnreachableCase {
        /// Phase whose table was exhausted.
        phase: Phase,
        /// Which table or lookup failed.
        detail: &'static str,
    },
}

impl CubeError {
    /// Whether this error is the cooperative-cancellation signal rather
    /// than a fault.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CubeError::OperationCancelled)
    }
}
