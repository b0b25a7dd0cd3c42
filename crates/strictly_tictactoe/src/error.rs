//! Error types for the rules engine.

use super::position::Action;
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TicTacToeErrorKind {
    /// The targeted square is already occupied.
    #[display("Square {} is already occupied", _0)]
    IllegalMove(Action),

    /// The action's row or column lies outside the 3x3 board.
    #[display("Action {} is outside the board", _0)]
    OutOfBounds(Action),

    /// A board failed to parse or violates a board invariant.
    #[display("Malformed board: {}", _0)]
    MalformedBoard(String),
}

/// Rules engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Tic-tac-toe error: {} at {}:{}", kind, file, line)]
pub struct TicTacToeError {
    /// Error kind.
    pub kind: TicTacToeErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TicTacToeError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: TicTacToeErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &TicTacToeErrorKind {
        &self.kind
    }
}

impl From<TicTacToeErrorKind> for TicTacToeError {
    #[track_caller]
    fn from(kind: TicTacToeErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind() {
        let err = TicTacToeError::new(TicTacToeErrorKind::IllegalMove(Action::new(0, 0)));
        let text = err.to_string();
        assert!(text.contains("Square (0, 0) is already occupied"));
        assert!(text.contains("error.rs"));
    }

    #[test]
    fn test_from_kind() {
        let err: TicTacToeError = TicTacToeErrorKind::OutOfBounds(Action::new(5, 1)).into();
        assert_eq!(err.kind(), &TicTacToeErrorKind::OutOfBounds(Action::new(5, 1)));
    }
}
