//! Tic-tac-toe on a 3x3 board addressed by slot tokens.

mod board;
pub mod rules;
mod slot;
mod status;
mod types;

pub use board::Board;
pub use slot::{Coordinates, Slot, SlotError};
pub use status::{Line, MatchStatus};
pub use types::{Cell, Mark};
