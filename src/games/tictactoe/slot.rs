//! Slot tokens: the two-letter names players type to address a cell.
//!
//! A token is a row letter (`a`, `b`, `c`) followed by a column letter
//! (`r`, `s`, `t`). The mapping to grid coordinates is a fixed table,
//! shared by every board.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A named cell on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// Row a, column r.
    Ar,
    /// Row a, column s.
    As,
    /// Row a, column t.
    At,
    /// Row b, column r.
    Br,
    /// Row b, column s.
    Bs,
    /// Row b, column t.
    Bt,
    /// Row c, column r.
    Cr,
    /// Row c, column s.
    Cs,
    /// Row c, column t.
    Ct,
}

impl Slot {
    /// All 9 slots in row-major order.
    pub const ALL: [Slot; 9] = [
        Slot::Ar,
        Slot::As,
        Slot::At,
        Slot::Br,
        Slot::Bs,
        Slot::Bt,
        Slot::Cr,
        Slot::Cs,
        Slot::Ct,
    ];

    /// Parses a token. Matching is exact: no trimming, no case folding.
    #[instrument]
    pub fn parse(token: &str) -> Option<Self> {
        Slot::from_str(token).ok()
    }

    /// Grid coordinates of this slot.
    pub const fn coordinates(self) -> Coordinates {
        let (row, col) = match self {
            Slot::Ar => (0, 0),
            Slot::As => (0, 1),
            Slot::At => (0, 2),
            Slot::Br => (1, 0),
            Slot::Bs => (1, 1),
            Slot::Bt => (1, 2),
            Slot::Cr => (2, 0),
            Slot::Cs => (2, 1),
            Slot::Ct => (2, 2),
        };
        Coordinates { row, col }
    }

    /// Slot addressing the given coordinates.
    pub fn from_coordinates(coords: Coordinates) -> Self {
        Self::ALL[coords.row * 3 + coords.col]
    }
}

/// In-range (row, col) coordinates of a cell.
///
/// Only obtainable from a [`Slot`], so both components are always in `0..3`.
/// Serialized as the slot token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(from = "Slot", into = "Slot")]
#[display("({row}, {col})")]
pub struct Coordinates {
    row: usize,
    col: usize,
}

impl Coordinates {
    /// Row index (0 = a, 1 = b, 2 = c).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0 = r, 1 = s, 2 = t).
    pub fn col(self) -> usize {
        self.col
    }
}

impl From<Slot> for Coordinates {
    fn from(slot: Slot) -> Self {
        slot.coordinates()
    }
}

impl From<Coordinates> for Slot {
    fn from(coords: Coordinates) -> Self {
        Slot::from_coordinates(coords)
    }
}

impl From<Coordinates> for (usize, usize) {
    fn from(coords: Coordinates) -> Self {
        (coords.row, coords.col)
    }
}

/// Why a submitted token cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SlotError {
    /// The token is not one of the 9 slot names.
    #[display("'{_0}' is not a valid move. Try again")]
    UnknownSlot(String),

    /// The slot has already been played.
    #[display("slot '{_0}' has already been played, choose another one")]
    SlotOccupied(Slot),
}

impl std::error::Error for SlotError {}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_is_injective() {
        let mut seen = std::collections::HashSet::new();
        for slot in Slot::iter() {
            assert!(seen.insert(slot.coordinates()), "duplicate coords for {slot}");
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_from_coordinates_inverts_table() {
        for slot in Slot::iter() {
            assert_eq!(Slot::from_coordinates(slot.coordinates()), slot);
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Slot::parse("bs"), Some(Slot::Bs));
        assert_eq!(Slot::parse("BS"), None);
        assert_eq!(Slot::parse(" bs"), None);
        assert_eq!(Slot::parse("b"), None);
    }

    #[test]
    fn test_display_is_token() {
        assert_eq!(Slot::Ct.to_string(), "ct");
    }
}
