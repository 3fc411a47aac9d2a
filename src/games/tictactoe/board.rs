//! Board state and the move gate.

use super::rules::{check_winner, is_full};
use super::slot::{Coordinates, Slot, SlotError};
use super::status::MatchStatus;
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// The board is the single source of truth for a match. Its status is
/// recomputed from the cells after every move and cached. Only the cells
/// are serialized; the status is re-evaluated on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[[Cell; 3]; 3]", into = "[[Cell; 3]; 3]")]
pub struct Board {
    /// Cells indexed `[row][col]`.
    rows: [[Cell; 3]; 3],
    /// Status as of the last change to `rows`.
    status: MatchStatus,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::from_rows([[Cell::Empty; 3]; 3])
    }

    /// Creates a board from existing cell contents.
    #[instrument]
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut board = Self {
            rows,
            status: MatchStatus::InProgress,
        };
        board.status = board.evaluate_status();
        board
    }

    /// Resolves a slot token to playable coordinates.
    ///
    /// This is the only check a move goes through: the token must name
    /// one of the 9 slots and that slot must be empty. Read-only.
    ///
    /// # Errors
    ///
    /// [`SlotError::UnknownSlot`] for anything but the 9 tokens,
    /// [`SlotError::SlotOccupied`] if the slot was already played.
    #[instrument(skip(self))]
    pub fn resolve_slot(&self, token: &str) -> Result<Coordinates, SlotError> {
        let slot = Slot::parse(token).ok_or_else(|| SlotError::UnknownSlot(token.to_string()))?;
        if self.is_played(slot) {
            debug!(%slot, "Slot already played");
            return Err(SlotError::SlotOccupied(slot));
        }
        Ok(slot.coordinates())
    }

    /// Places `mark` at `coords` and returns the recomputed status.
    ///
    /// Trusted entry point: `coords` must come from [`Board::resolve_slot`]
    /// so the cell is known to be empty.
    #[instrument(skip(self), fields(slot = %Slot::from_coordinates(coords)))]
    pub fn apply_move(&mut self, coords: Coordinates, mark: Mark) -> MatchStatus {
        let cell = &mut self.rows[coords.row()][coords.col()];
        debug_assert!(cell.is_empty(), "move applied to a played cell at {coords}");
        *cell = mark.into();

        self.status = self.evaluate_status();
        debug!(status = ?self.status, "Move applied");
        self.status
    }

    /// Computes the match status from scratch.
    ///
    /// Scans the 8 lines in order (rows, columns, diagonals); the first
    /// line of three equal marks wins. Without a winner, a full board is
    /// a draw.
    #[instrument(skip(self))]
    pub fn evaluate_status(&self) -> MatchStatus {
        if let Some((mark, line)) = check_winner(self) {
            MatchStatus::Won { mark, line }
        } else if is_full(self) {
            MatchStatus::Draw
        } else {
            MatchStatus::InProgress
        }
    }

    /// Status as of the last move.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Cell at the given coordinates.
    pub fn cell(&self, coords: Coordinates) -> Cell {
        self.rows[coords.row()][coords.col()]
    }

    /// Cell addressed by a slot.
    pub fn cell_at(&self, slot: Slot) -> Cell {
        self.cell(slot.coordinates())
    }

    /// Checks whether a slot has already been played.
    pub fn is_played(&self, slot: Slot) -> bool {
        !self.cell_at(slot).is_empty()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().flatten().copied()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[[Cell; 3]; 3]> for Board {
    fn from(rows: [[Cell; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Board> for [[Cell; 3]; 3] {
    fn from(board: Board) -> Self {
        board.rows
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "       r   s   t")?;
        writeln!(f)?;
        for (label, [r, s, t]) in ["a", "b", "c"].iter().zip(&self.rows) {
            writeln!(f, "{label}    | {r} | {s} | {t} |")?;
        }
        writeln!(f)?;
        write!(f, "move syntax: <row><col> e.g ar")
    }
}
