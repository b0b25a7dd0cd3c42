//! Outcome evaluation: utility, winner and terminal status of a board.

use super::rules::{check_winner, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Signed value of a board from X's point of view.
///
/// Variants are declared in ascending order so the derived `Ord` matches the
/// integer values: `OWins < Neutral < XWins`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(into = "i8", try_from = "i8")]
#[repr(i8)]
pub enum Utility {
    /// O has three in a row (-1).
    #[display("-1")]
    OWins = -1,
    /// No completed line, either ongoing or drawn (0).
    #[display("0")]
    Neutral = 0,
    /// X has three in a row (+1).
    #[display("+1")]
    XWins = 1,
}

impl Utility {
    /// The integer value: -1, 0 or +1.
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Utility of a board won by `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => Utility::XWins,
            Player::O => Utility::OWins,
        }
    }
}

impl From<Utility> for i8 {
    fn from(utility: Utility) -> Self {
        utility.value()
    }
}

impl TryFrom<i8> for Utility {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Utility::OWins),
            0 => Ok(Utility::Neutral),
            1 => Ok(Utility::XWins),
            other => Err(format!("utility must be -1, 0 or 1, got {}", other)),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Outcome of `board`, or `None` while the game is still running.
    pub fn of(board: &Board) -> Option<Self> {
        if !terminal(board) {
            return None;
        }
        Some(match winner(board) {
            Some(player) => Outcome::Winner(player),
            None => Outcome::Draw,
        })
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Returns +1 if X has three in a row, -1 if O does, 0 otherwise.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> Utility {
    check_winner(board).map_or(Utility::Neutral, Utility::won_by)
}

/// Returns the winner of the game, if there is one.
///
/// Ongoing and drawn games both report `None`.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    match utility(board) {
        Utility::XWins => Some(Player::X),
        Utility::OWins => Some(Player::O),
        Utility::Neutral => None,
    }
}

/// Returns true when the game is over: the board is full or someone won.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    is_full(board) || utility(board) != Utility::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_row_x() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(utility(&board), Utility::XWins);
        assert_eq!(winner(&board), Some(Player::X));
        assert!(terminal(&board));
        assert_eq!(Outcome::of(&board), Some(Outcome::Winner(Player::X)));
    }

    #[test]
    fn test_full_board_without_line() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(utility(&board), Utility::Neutral);
        assert_eq!(winner(&board), None);
        assert!(terminal(&board));
        assert_eq!(Outcome::of(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_ongoing_game() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(utility(&board), Utility::Neutral);
        assert!(!terminal(&board));
        assert_eq!(Outcome::of(&board), None);
    }

    #[test]
    fn test_o_win_with_empty_squares() {
        let board: Board = "XX./OOO/X..".parse().unwrap();
        assert_eq!(utility(&board), Utility::OWins);
        assert_eq!(winner(&board), Some(Player::O));
        assert!(terminal(&board));
    }

    #[test]
    fn test_utility_ordering_and_values() {
        assert!(Utility::OWins < Utility::Neutral);
        assert!(Utility::Neutral < Utility::XWins);
        assert_eq!(Utility::OWins.value(), -1);
        assert_eq!(Utility::XWins.to_string(), "+1");
        assert_eq!(Utility::try_from(2i8), Err("utility must be -1, 0 or 1, got 2".to_string()));
    }

    #[test]
    fn test_utility_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Utility::OWins).unwrap(), "-1");
        assert_eq!(serde_json::from_str::<Utility>("1").unwrap(), Utility::XWins);
        assert!(serde_json::from_str::<Utility>("3").is_err());
    }
}
