//! Two-player terminal tic-tac-toe addressed by slot tokens.
//!
//! # Architecture
//!
//! - **Games**: the board engine (slot tokens, move gate, win and draw
//!   rules)
//! - **Player / Controller**: alternating turns over a [`Console`]
//! - **Console**: line I/O, backed by stdio or a script
//! - **Config**: optional preset names and log filter
//!
//! # Example
//!
//! ```
//! use tictactoe_slots::{Board, Mark, MatchStatus};
//!
//! let mut board = Board::new();
//! for (token, mark) in [("ar", Mark::O), ("br", Mark::X), ("as", Mark::O), ("bs", Mark::X)] {
//!     let coords = board.resolve_slot(token).unwrap();
//!     board.apply_move(coords, mark);
//! }
//! let coords = board.resolve_slot("at").unwrap();
//! assert!(matches!(board.apply_move(coords, Mark::O), MatchStatus::Won { mark: Mark::O, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod controller;
mod games;
mod player;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_LOG_FILTER, MatchConfig};

// Crate-level exports - Console I/O
pub use console::{Console, ConsoleError, ScriptedConsole, Terminal, prompt_non_empty};

// Crate-level exports - Match orchestration
pub use controller::{MatchController, MatchOutcome};
pub use player::Player;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, Coordinates, Line, Mark, MatchStatus, Slot, SlotError, rules,
};
