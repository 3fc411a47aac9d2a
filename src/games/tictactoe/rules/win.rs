//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are scanned rows first, then columns, then diagonals. A line
/// counts only when its three cells hold the same mark; three empty
/// cells never match. Returns the first completed line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, Line)> {
    Line::iter().find_map(|line| {
        let [a, b, c] = line.slots().map(|slot| board.cell_at(slot));
        match a.mark() {
            Some(mark) if a == b && b == c => Some((mark, line)),
            _ => None,
        }
    })
}
