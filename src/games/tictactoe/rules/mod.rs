//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage; [`Board::evaluate_status`](super::Board::evaluate_status)
//! composes them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
