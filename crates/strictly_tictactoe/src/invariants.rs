//! First-class board invariants.
//!
//! The rules engine trusts its input. These invariants describe what a board
//! reachable through legal play looks like, and are checked where boards enter
//! the crate from outside (parsing, resuming a game).

use super::error::{TicTacToeError, TicTacToeErrorKind};
use super::rules::win::completed_lines;
use super::{Board, Player};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalance;

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// Invariant: X and O do not both own a completed line.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        let mut owners = completed_lines(board);
        let valid = match owners.next() {
            Some(first) => owners.all(|p| p == first),
            None => true,
        };
        if !valid {
            warn!("Both players own a completed line");
        }
        valid
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (MarkBalance, SingleWinner);

impl Board {
    /// Checks the board invariants.
    ///
    /// # Errors
    ///
    /// Returns `MalformedBoard` listing every violated invariant.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), TicTacToeError> {
        BoardInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            TicTacToeError::new(TicTacToeErrorKind::MalformedBoard(descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn raw(s: &str) -> Board {
        Board::from_squares(
            s.chars()
                .map(|c| Square::from_symbol(c).unwrap())
                .collect::<Vec<_>>()
                .try_into()
                .unwrap(),
        )
    }

    #[test]
    fn test_empty_board_holds() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_too_many_o_violates() {
        let board = raw("OO.......");
        assert!(!MarkBalance::holds(&board));
        assert!(SingleWinner::holds(&board));
    }

    #[test]
    fn test_too_many_x_violates() {
        let board = raw("XX.......");
        assert!(!MarkBalance::holds(&board));
    }

    #[test]
    fn test_double_winner_violates() {
        let board = raw("XXXOOO...");
        assert!(MarkBalance::holds(&board));
        assert!(!SingleWinner::holds(&board));
    }

    #[test]
    fn test_validate_reports_all_violations() {
        assert!(raw("XXXXOOO.O").validate().is_ok());

        let err = raw("OOOXXXO..").validate().unwrap_err();
        match err.kind() {
            TicTacToeErrorKind::MalformedBoard(msg) => {
                assert!(msg.contains("X has as many marks as O"));
                assert!(msg.contains("At most one player"));
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unbalanced() {
        assert!("XX.......".parse::<Board>().is_err());
        assert!("XXXOOO...".parse::<Board>().is_err());
    }
}
