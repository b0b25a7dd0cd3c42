//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`](super::Board) values. Turn order and move
//! application live next to win and draw detection so the search engine can
//! compose them without touching board storage.

pub mod draw;
pub mod moves;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::{actions, result};
pub use turn::player;
pub use win::{check_winner, LINES};
