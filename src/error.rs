//! Error types for the rules engine
//!
//! Only one error kind exists in the core: a coordinate outside the 9x9
//! grid. Inputs that are merely invalid for the current game phase are
//! ignored silently rather than reported, matching the permissive tap
//! handling the engine was designed for.

/// Core engine errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Coordinate outside the 9x9 board
    #[error("coordinate out of range: ({row}, {col})")]
    OutOfRange { row: i16, col: i16 },
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;
