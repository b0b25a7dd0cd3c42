//! Turn order: whose move it is, derived from the marks on the board.

use super::super::{Board, Player};
use tracing::instrument;

/// Returns the player who moves next on `board`.
///
/// X always opens. Otherwise O moves when X has more marks, and X moves when
/// the counts are equal. Reachability is not checked: a board where O has more
/// marks than X also reports X.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    if *board == Board::new() {
        return Player::X;
    }

    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}
