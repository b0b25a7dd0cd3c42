//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the player owning all three squares of `line`, if any.
pub fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    match board.get(a) {
        Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(player)
        }
        _ => None,
    }
}

/// Owners of every completed line, in line order (rows, columns, diagonals).
///
/// A player appears once per line they complete.
pub fn completed_lines(board: &Board) -> impl Iterator<Item = Player> + '_ {
    LINES.iter().filter_map(|line| line_owner(board, *line))
}

/// Checks if there is a winner on the board.
///
/// Each of the eight lines is checked on its own; the first completed line
/// decides. Returns `None` only after every line has been examined.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    completed_lines(board).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_squares(
            s.chars()
                .map(|c| Square::from_symbol(c).unwrap())
                .collect::<Vec<_>>()
                .try_into()
                .unwrap(),
        )
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_detected_for_both_players() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let mut squares = [Square::Empty; 9];
                for pos in line {
                    squares[pos.to_index()] = Square::Occupied(player);
                }
                let board = Board::from_squares(squares);
                assert_eq!(check_winner(&board), Some(player), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_winner_after_earlier_mixed_lines() {
        // Rows and columns are mixed; only the anti-diagonal is complete.
        assert_eq!(check_winner(&board("XOO.OXOX.")), Some(Player::O));
    }

    #[test]
    fn test_column_win_with_mixed_rows() {
        assert_eq!(check_winner(&board("OX..XO.X.")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX.......")), None);
    }

    #[test]
    fn test_completed_lines_counts_double_win() {
        // X completes the top row and the left column with one move.
        let lines: Vec<_> = completed_lines(&board("XXXXOOXOO")).collect();
        assert_eq!(lines, vec![Player::X, Player::X]);
    }
}
