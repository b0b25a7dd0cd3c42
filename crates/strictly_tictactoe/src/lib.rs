//! Tic-tac-toe rules engine and perfect-play solver.
//!
//! Everything here is a pure function over immutable [`Board`] values:
//!
//! - **Board model**: [`initial_state`], [`Board`], [`Position`], [`Action`]
//! - **Rules**: [`player`], [`actions`], [`result`]
//! - **Outcome**: [`utility`], [`winner`], [`terminal`]
//! - **Search**: [`minimax`], [`max_value`], [`min_value`], [`Minimax`]
//! - **Game driver**: [`GameSetup`] → [`GameInProgress`] → [`GameFinished`]
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{initial_state, minimax, result, terminal, winner};
//!
//! let mut board = initial_state();
//! while !terminal(&board) {
//!     let action = minimax(&board).expect("non-terminal board has a move");
//!     board = result(&board, action)?;
//! }
//! assert_eq!(winner(&board), None);
//! # Ok::<(), strictly_tictactoe::TicTacToeError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod invariants;
mod outcome;
mod position;
pub mod rules;
mod search;
mod types;

pub use error::{TicTacToeError, TicTacToeErrorKind};
pub use game::{self_play, GameFinished, GameInProgress, GameResult, GameSetup};
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalance, SingleWinner,
};
pub use outcome::{terminal, utility, winner, Outcome, Utility};
pub use position::{Action, Position};
pub use rules::{actions, check_winner, is_draw, is_full, player, result, LINES};
pub use search::{
    evaluate, max_value, min_value, minimax, ActionValue, Minimax, Solution, TieBreak,
};
pub use types::{initial_state, Board, Player, Square};
