//! Printable results of the `solve` and `selfplay` commands.

use serde::Serialize;
use strictly_tictactoe::{
    player, result, terminal, winner, Action, ActionValue, Board, GameFinished, Minimax, Outcome,
    Player, TicTacToeError, Utility,
};
use tracing::instrument;

/// Full analysis of one board.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    board: String,
    to_move: Player,
    terminal: bool,
    winner: Option<Player>,
    value: Utility,
    actions: Vec<ActionValue>,
    best: Option<Action>,
}

impl SolveReport {
    /// Analyzes `board` with `solver`.
    #[instrument(skip(board, solver))]
    pub fn new(board: &Board, solver: &Minimax) -> Self {
        let solution = solver.solve(board);
        Self {
            board: board.to_string(),
            to_move: player(board),
            terminal: terminal(board),
            winner: winner(board),
            value: *solution.value(),
            actions: solution.actions().clone(),
            best: *solution.best(),
        }
    }

    /// Human-readable rendering.
    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n\n", self.board);
        if self.terminal {
            match self.winner {
                Some(p) => out.push_str(&format!("Game over: player {} wins\n", p)),
                None => out.push_str("Game over: draw\n"),
            }
            return out;
        }

        out.push_str(&format!("To move: {}\n", self.to_move));
        out.push_str(&format!("Value:   {}\n", self.value));
        for av in &self.actions {
            out.push_str(&format!("  {} -> {}\n", av.action(), av.value()));
        }
        if let Some(best) = self.best {
            out.push_str(&format!("Best:    {}\n", best));
        }
        out
    }
}

/// One position in a self-play record.
#[derive(Debug, Clone, Serialize)]
pub struct Ply {
    player: Player,
    action: Action,
    board: String,
}

/// Record of a game played out by the solver.
#[derive(Debug, Clone, Serialize)]
pub struct SelfPlayReport {
    start: String,
    plies: Vec<Ply>,
    outcome: Outcome,
}

impl SelfPlayReport {
    /// Rebuilds the sequence of boards from `start` and the finished game.
    #[instrument(skip(start, game))]
    pub fn new(start: &Board, game: &GameFinished) -> Result<Self, TicTacToeError> {
        let mut board = *start;
        let mut plies = Vec::with_capacity(game.history().len());
        for action in game.history() {
            let mover = player(&board);
            board = result(&board, *action)?;
            plies.push(Ply {
                player: mover,
                action: *action,
                board: board.to_string(),
            });
        }

        Ok(Self {
            start: start.to_string(),
            plies,
            outcome: *game.outcome(),
        })
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Human-readable rendering.
    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n", self.start);
        for ply in &self.plies {
            out.push_str(&format!("\n{} plays {}\n{}\n", ply.player, ply.action, ply.board));
        }
        out.push_str(&format!("\n{}\n", self.outcome));
        out
    }
}
