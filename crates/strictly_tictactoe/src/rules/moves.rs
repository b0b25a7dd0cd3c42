//! Legal actions and move application.

use super::super::error::{TicTacToeError, TicTacToeErrorKind};
use super::super::{Action, Board, Position, Square};
use super::turn::player;
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Empty positions in row-major order.
pub(crate) fn open_positions(board: &Board) -> impl Iterator<Item = Position> + '_ {
    Position::iter().filter(|pos| board.is_empty(*pos))
}

/// Places the mover's mark on an empty position, returning the new board.
///
/// The caller guarantees `pos` is empty.
pub(crate) fn place(board: &Board, pos: Position) -> Board {
    let mut next = *board;
    next.set(pos, Square::Occupied(player(board)));
    next
}

/// Returns every legal action: the coordinates of all empty squares.
///
/// Empty when the board is full. The set is ordered by `(row, col)`, but
/// callers should treat it as an unordered set.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> BTreeSet<Action> {
    open_positions(board).map(Action::from).collect()
}

/// Returns the board that results from the player to move taking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// - `OutOfBounds` if the row or column is not in 0-2.
/// - `IllegalMove` if the targeted square is already occupied.
#[instrument(level = "trace", skip(board), fields(action = %action))]
pub fn result(board: &Board, action: Action) -> Result<Board, TicTacToeError> {
    let Some(pos) = action.position() else {
        debug!(%action, "Rejected action outside the board");
        return Err(TicTacToeError::new(TicTacToeErrorKind::OutOfBounds(action)));
    };

    if !board.is_empty(pos) {
        debug!(%action, square = ?board.get(pos), "Rejected move onto occupied square");
        return Err(TicTacToeError::new(TicTacToeErrorKind::IllegalMove(action)));
    }

    Ok(place(board, pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_all_actions_on_empty_board() {
        let legal = actions(&Board::new());
        assert_eq!(legal.len(), 9);
        assert!(legal.contains(&Action::new(0, 0)));
        assert!(legal.contains(&Action::new(2, 2)));
    }

    #[test]
    fn test_actions_skip_occupied() {
        let board: Board = "X...O....".parse().unwrap();
        let legal = actions(&board);
        assert_eq!(legal.len(), 7);
        assert!(!legal.contains(&Action::new(0, 0)));
        assert!(!legal.contains(&Action::new(1, 1)));
    }

    #[test]
    fn test_no_actions_on_full_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(actions(&board).is_empty());
    }

    #[test]
    fn test_result_places_mover_mark() {
        let board = Board::new();
        let next = result(&board, Action::new(1, 1)).unwrap();
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board, Board::new());

        let after = result(&next, Action::new(0, 0)).unwrap();
        assert_eq!(after.get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_result_rejects_occupied() {
        let board: Board = "X........".parse().unwrap();
        let err = result(&board, Action::new(0, 0)).unwrap_err();
        assert_eq!(
            err.kind(),
            &TicTacToeErrorKind::IllegalMove(Action::new(0, 0))
        );
    }

    #[test]
    fn test_result_rejects_out_of_bounds() {
        let err = result(&Board::new(), Action::new(0, 3)).unwrap_err();
        assert_eq!(
            err.kind(),
            &TicTacToeErrorKind::OutOfBounds(Action::new(0, 3))
        );
    }
}
