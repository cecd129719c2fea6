//! Errors raised by the board model and the search entry points

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The column is full or outside the board.
    #[error("illegal move in column {column}")]
    IllegalMove { column: usize },

    /// Win length, board shape or search budget is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The board has no legal column (full) or the game is already decided.
    #[error("no legal move available")]
    NoLegalMove,
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
