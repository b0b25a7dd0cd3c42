//! Core domain types for tic-tac-toe.

use super::error::{TicTacToeError, TicTacToeErrorKind};
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used for this square in board notation.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }

    /// Parses a single notation character; `None` for anything unknown.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | '_' => Some(Square::Empty),
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every successor is a fresh copy, nothing is
/// mutated in place outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

/// Returns the starting position: nine empty squares.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares without any validation.
    ///
    /// Use [`str::parse`] or [`Board::validate`] when the input is untrusted.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at `(row, col)`, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of marks the player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, pos) in Position::iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.get(pos).symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = TicTacToeError;

    /// Parses nine squares in row-major order.
    ///
    /// Whitespace and the separators `|` and `/` are ignored, so `"X.O/.X./..O"`
    /// and the multi-line output of `Display` both parse. The parsed board must
    /// satisfy the board invariants.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|' && *c != '/') {
            let square = Square::from_symbol(c).ok_or_else(|| {
                TicTacToeError::new(TicTacToeErrorKind::MalformedBoard(format!(
                    "unknown square symbol {:?}",
                    c
                )))
            })?;
            squares.push(square);
        }

        let squares: [Square; 9] = squares.try_into().map_err(|v: Vec<Square>| {
            TicTacToeError::new(TicTacToeErrorKind::MalformedBoard(format!(
                "expected 9 squares, found {}",
                v.len()
            )))
        })?;

        let board = Board::from_squares(squares);
        board.validate()?;
        Ok(board)
    }
}
