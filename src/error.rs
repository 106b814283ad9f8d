//! Error types for the engine.

use thiserror::Error;

/// Everything the engine can reject.
///
/// The first two variants are invalid moves; the last covers bad setup
/// parameters. A failed call never alters the state it was given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move: position {position} is out of range for {len} remaining items")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("invalid move: value {value} is not among the remaining items")]
    ValueNotPresent { value: u8 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl GameError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// True for either kind of illegal move.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            GameError::PositionOutOfRange { .. } | GameError::ValueNotPresent { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
