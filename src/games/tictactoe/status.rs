//! Match status and the eight winning lines.

use super::slot::{Coordinates, Slot};
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// One of the 8 fixed triples of cells checked for a win.
///
/// Variants are declared in scan order: rows, then columns, then the
/// two diagonals. Iteration order decides ties.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Line {
    /// ar, as, at
    #[strum(to_string = "row a")]
    RowA,
    /// br, bs, bt
    #[strum(to_string = "row b")]
    RowB,
    /// cr, cs, ct
    #[strum(to_string = "row c")]
    RowC,
    /// ar, br, cr
    #[strum(to_string = "column r")]
    ColumnR,
    /// as, bs, cs
    #[strum(to_string = "column s")]
    ColumnS,
    /// at, bt, ct
    #[strum(to_string = "column t")]
    ColumnT,
    /// ar, bs, ct
    #[strum(to_string = "diagonal ar-bs-ct")]
    Diagonal,
    /// at, bs, cr
    #[strum(to_string = "diagonal at-bs-cr")]
    AntiDiagonal,
}

impl Line {
    /// The three slots making up this line.
    pub const fn slots(self) -> [Slot; 3] {
        match self {
            Line::RowA => [Slot::Ar, Slot::As, Slot::At],
            Line::RowB => [Slot::Br, Slot::Bs, Slot::Bt],
            Line::RowC => [Slot::Cr, Slot::Cs, Slot::Ct],
            Line::ColumnR => [Slot::Ar, Slot::Br, Slot::Cr],
            Line::ColumnS => [Slot::As, Slot::Bs, Slot::Cs],
            Line::ColumnT => [Slot::At, Slot::Bt, Slot::Ct],
            Line::Diagonal => [Slot::Ar, Slot::Bs, Slot::Ct],
            Line::AntiDiagonal => [Slot::At, Slot::Bs, Slot::Cr],
        }
    }

    /// Coordinates of the three cells, e.g. for highlighting.
    pub fn coordinates(self) -> [Coordinates; 3] {
        self.slots().map(Slot::coordinates)
    }
}

/// Status of a match, derived from the board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    /// No line completed and at least one empty cell.
    InProgress,
    /// A line holds three equal marks.
    Won {
        /// The completing mark.
        mark: Mark,
        /// The first completed line in scan order.
        line: Line,
    },
    /// Every cell is filled and no line is complete.
    Draw,
}

impl MatchStatus {
    /// Checks whether the match has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }
}
