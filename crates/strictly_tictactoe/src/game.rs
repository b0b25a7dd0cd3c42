//! Phase-specific typestate structs for a single game.
//!
//! A game is either in progress and accepts actions, or finished and carries
//! an [`Outcome`]. Each transition goes through the rules engine: the mover is
//! always derived from the board, and the game ends exactly when the board is
//! terminal.

use super::error::TicTacToeError;
use super::outcome::Outcome;
use super::rules::{actions, player, result};
use super::search::Minimax;
use super::{Action, Board, Player};
use derive_getters::Getters;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - the board is always empty.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game; X moves first.
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - the board is not terminal.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    board: Board,
    history: Vec<Action>,
}

impl GameInProgress {
    /// Resumes a game from an arbitrary board.
    ///
    /// A board that is already terminal comes back as finished.
    ///
    /// # Errors
    ///
    /// Returns `MalformedBoard` if the board violates a board invariant.
    #[instrument(skip(board))]
    pub fn from_board(board: Board) -> Result<GameResult, TicTacToeError> {
        board.validate()?;
        Ok(Self {
            board,
            history: Vec::new(),
        }
        .advance())
    }

    /// Replays actions from the empty board.
    ///
    /// Replay stops at the first action that ends the game; later actions are
    /// ignored.
    #[instrument]
    pub fn replay(moves: &[Action]) -> Result<GameResult, TicTacToeError> {
        let mut game = GameSetup::new().start();

        for action in moves {
            match game.play(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }

    /// Applies `action` for the player to move, consuming the game.
    ///
    /// # Errors
    ///
    /// `IllegalMove` or `OutOfBounds` from [`result`]; the game is lost with
    /// the error, callers that want to retry should clone first.
    #[instrument(skip(self), fields(to_move = %self.to_move()))]
    pub fn play(mut self, action: Action) -> Result<GameResult, TicTacToeError> {
        self.board = result(&self.board, action)?;
        self.history.push(action);
        Ok(self.advance())
    }

    /// Plays the solver's choice for the player to move.
    #[instrument(skip(self, solver))]
    pub fn play_optimal(self, solver: &Minimax) -> Result<GameResult, TicTacToeError> {
        match solver.choose(&self.board) {
            Some(action) => {
                debug!(%action, player = %self.to_move(), "Solver chose action");
                self.play(action)
            }
            None => Ok(self.advance()),
        }
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        player(&self.board)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the actions played in this game.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Returns the legal actions.
    pub fn legal_actions(&self) -> BTreeSet<Action> {
        actions(&self.board)
    }

    fn advance(self) -> GameResult {
        match Outcome::of(&self.board) {
            Some(outcome) => GameResult::Finished(self.finish(outcome)),
            None => GameResult::InProgress(self),
        }
    }

    fn finish(self, outcome: Outcome) -> GameFinished {
        info!(%outcome, moves = self.history.len(), "Game finished");
        GameFinished {
            board: self.board,
            history: self.history,
            outcome,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - the outcome is always present.
#[derive(Debug, Clone, Getters)]
pub struct GameFinished {
    /// Final board.
    board: Board,
    /// Actions played in this game.
    history: Vec<Action>,
    /// How the game ended.
    outcome: Outcome,
}

impl GameFinished {
    /// Restarts the game (consumes finished, returns setup).
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

/// Plays `board` out with both sides using `solver`.
///
/// # Errors
///
/// Returns `MalformedBoard` if the starting board violates a board invariant.
#[instrument(skip(board, solver))]
pub fn self_play(board: &Board, solver: &Minimax) -> Result<GameFinished, TicTacToeError> {
    let mut game = match GameInProgress::from_board(*board)? {
        GameResult::InProgress(game) => game,
        GameResult::Finished(done) => return Ok(done),
    };

    loop {
        match game.play_optimal(solver)? {
            GameResult::InProgress(next) => game = next,
            GameResult::Finished(done) => return Ok(done),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TicTacToeErrorKind;

    #[test]
    fn test_start_is_empty() {
        let game = GameSetup::new().start();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.legal_actions().len(), 9);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_play_alternates() {
        let game = GameSetup::new().start();
        let GameResult::InProgress(game) = game.play(Action::new(1, 1)).unwrap() else {
            panic!("Game shouldn't finish after one move");
        };
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history(), &[Action::new(1, 1)]);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let game = GameSetup::new().start();
        let GameResult::InProgress(game) = game.play(Action::new(1, 1)).unwrap() else {
            panic!("Unexpected finish");
        };
        let err = game.play(Action::new(1, 1)).unwrap_err();
        assert!(matches!(err.kind(), TicTacToeErrorKind::IllegalMove(_)));
    }

    #[test]
    fn test_from_terminal_board_is_finished() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        match GameInProgress::from_board(board).unwrap() {
            GameResult::Finished(done) => {
                assert_eq!(done.outcome(), &Outcome::Winner(Player::X));
                assert!(done.history().is_empty());
            }
            GameResult::InProgress(_) => panic!("Game should be finished"),
        }
    }

    #[test]
    fn test_from_malformed_board_rejected() {
        let board = Board::from_squares([crate::Square::Occupied(Player::O); 9]);
        assert!(GameInProgress::from_board(board).is_err());
    }

    #[test]
    fn test_self_play_from_midgame() {
        // O to move must block (0,2); best play from here is a draw.
        let board: Board = "XX./.O./...".parse().unwrap();
        let done = self_play(&board, &Minimax::default()).unwrap();
        assert_eq!(done.outcome(), &Outcome::Draw);
        assert_eq!(done.history()[0], Action::new(0, 2));
    }

    #[test]
    fn test_finish_records_winner() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let game = match GameInProgress::from_board(board).unwrap() {
            GameResult::InProgress(game) => game,
            GameResult::Finished(_) => panic!("Game shouldn't be finished yet"),
        };
        let GameResult::Finished(done) = game.play(Action::new(0, 2)).unwrap() else {
            panic!("Completing the top row should finish the game");
        };
        assert_eq!(done.outcome(), &Outcome::Winner(Player::X));
        assert_eq!(Some(*done.outcome()), Outcome::of(done.board()));
    }

    #[test]
    fn test_restart_returns_empty_setup() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let done = self_play(&board, &Minimax::default()).unwrap();
        let setup = done.restart();
        assert_eq!(setup.board(), &Board::new());
        assert_eq!(setup.start().to_move(), Player::X);
    }
}
