//! Exhaustive minimax search.
//!
//! Every search walks the full remaining game tree depth-first: no pruning and
//! no transposition table. From the empty board that is at most 9! leaf paths,
//! which is small enough to solve on every call.

use super::outcome::{terminal, utility, Utility};
use super::rules::moves::{open_positions, place};
use super::rules::player;
use super::{Action, Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Rule for choosing among several equally good actions.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// The optimal action with the smallest `(row, col)`.
    #[default]
    #[display("first")]
    First,
    /// The optimal action with the largest `(row, col)`.
    #[display("last")]
    Last,
}

/// A legal action together with the value of the position it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ActionValue {
    /// The action.
    action: Action,
    /// Game-theoretic value after playing `action`.
    value: Utility,
}

/// Everything one search learns about a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Solution {
    /// Game-theoretic value of the position.
    value: Utility,
    /// Every legal action with its value, in `(row, col)` order.
    actions: Vec<ActionValue>,
    /// The chosen optimal action; `None` on a terminal board.
    best: Option<Action>,
}

/// Node-counting search context shared by one recursive walk.
#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    fn max_value(&mut self, board: &Board) -> Utility {
        self.nodes += 1;
        if terminal(board) {
            return utility(board);
        }
        open_positions(board)
            .map(|pos| self.min_value(&place(board, pos)))
            .max()
            .unwrap_or_else(|| utility(board))
    }

    fn min_value(&mut self, board: &Board) -> Utility {
        self.nodes += 1;
        if terminal(board) {
            return utility(board);
        }
        open_positions(board)
            .map(|pos| self.max_value(&place(board, pos)))
            .min()
            .unwrap_or_else(|| utility(board))
    }

    /// Value of the position reached by `mover` playing `pos`.
    fn lookahead(&mut self, board: &Board, pos: Position, mover: Player) -> Utility {
        let child = place(board, pos);
        match mover {
            Player::X => self.min_value(&child),
            Player::O => self.max_value(&child),
        }
    }

    fn evaluate(&mut self, board: &Board) -> Utility {
        match player(board) {
            Player::X => self.max_value(board),
            Player::O => self.min_value(board),
        }
    }

    fn analyze(&mut self, board: &Board) -> Vec<ActionValue> {
        if terminal(board) {
            return Vec::new();
        }
        let mover = player(board);
        open_positions(board)
            .map(|pos| ActionValue {
                action: Action::from(pos),
                value: self.lookahead(board, pos, mover),
            })
            .collect()
    }
}

/// Returns the best value X can force from `board`, assuming O replies optimally.
#[instrument(skip(board))]
pub fn max_value(board: &Board) -> Utility {
    Search::default().max_value(board)
}

/// Returns the best value O can force from `board`, assuming X replies optimally.
#[instrument(skip(board))]
pub fn min_value(board: &Board) -> Utility {
    Search::default().min_value(board)
}

/// Game-theoretic value of `board` with the player to move playing optimally.
///
/// Terminal boards evaluate to their utility.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Utility {
    let mut search = Search::default();
    let value = search.evaluate(board);
    debug!(nodes = search.nodes, %value, "Evaluated position");
    value
}

/// Returns an optimal action for the player to move, or `None` if the game is over.
///
/// Ties resolve to the lexicographically smallest `(row, col)`. Use
/// [`Minimax::choose`] for a different [`TieBreak`].
pub fn minimax(board: &Board) -> Option<Action> {
    Minimax::default().choose(board)
}

/// Minimax move selection with a fixed tie-break rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_new::new)]
pub struct Minimax {
    tie_break: TieBreak,
}

impl Minimax {
    /// Returns the tie-break rule.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Returns an optimal action for the player to move, or `None` if the game is over.
    ///
    /// X maximizes, O minimizes. The chosen action always achieves the
    /// position's game-theoretic value; among several such actions the
    /// tie-break decides.
    #[instrument(skip(self, board), fields(tie_break = %self.tie_break))]
    pub fn choose(&self, board: &Board) -> Option<Action> {
        if terminal(board) {
            debug!("No move on a terminal board");
            return None;
        }
        self.solve(board).best
    }

    /// Solves `board`: its value, every action's value and the chosen action.
    ///
    /// One exhaustive walk of the remaining tree. On a terminal board the value
    /// is the board's utility and there are no actions.
    #[instrument(skip(self, board), fields(tie_break = %self.tie_break))]
    pub fn solve(&self, board: &Board) -> Solution {
        let mut search = Search::default();
        let actions = search.analyze(board);
        let value = best_value(player(board), &actions).unwrap_or_else(|| utility(board));
        let best = self.select(&actions, value);

        debug!(
            nodes = search.nodes,
            %value,
            best = ?best,
            "Search complete"
        );
        Solution {
            value,
            actions,
            best,
        }
    }

    /// Every legal action with the value of the position it leads to.
    ///
    /// Actions are listed in `(row, col)` order; empty on a terminal board.
    #[instrument(skip(self, board))]
    pub fn analyze(&self, board: &Board) -> Vec<ActionValue> {
        let mut search = Search::default();
        let analysis = search.analyze(board);
        debug!(nodes = search.nodes, actions = analysis.len(), "Analyzed position");
        analysis
    }

    /// Picks an action whose one-ply lookahead value equals `value`.
    ///
    /// `value` is normally the result of [`evaluate`]; if no action reaches it
    /// (or the board is terminal) the result is `None`.
    #[instrument(skip(self, board), fields(value = %value))]
    pub fn value_move(&self, board: &Board, value: Utility) -> Option<Action> {
        self.select(&self.analyze(board), value)
    }

    fn select(&self, analysis: &[ActionValue], value: Utility) -> Option<Action> {
        let mut candidates = analysis
            .iter()
            .filter(|av| av.value == value)
            .map(|av| av.action);
        match self.tie_break {
            TieBreak::First => candidates.next(),
            TieBreak::Last => candidates.last(),
        }
    }
}

/// The value the mover aims for: maximum for X, minimum for O.
fn best_value(mover: Player, analysis: &[ActionValue]) -> Option<Utility> {
    let values = analysis.iter().map(|av| av.value);
    match mover {
        Player::X => values.max(),
        Player::O => values.min(),
    }
}
