//! Win condition checking
//!
//! A player wins by occupying all three cells of one of the 8 fixed lines
//! (3 rows, 3 columns, 2 diagonals). Lines are checked in a fixed
//! enumeration order, so the reported line is deterministic even for
//! board patterns no legal game can reach.

use crate::board::{Board, Mark, Pos};

/// The 8 winning lines as cell indices, in enumeration order:
/// rows top to bottom, then columns left to right, then both diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Bit masks matching `LINES`, index for index
const LINE_MASKS: [u16; 8] = {
    let mut masks = [0u16; 8];
    let mut i = 0;
    while i < LINES.len() {
        masks[i] = (1 << LINES[i][0]) | (1 << LINES[i][1]) | (1 << LINES[i][2]);
        i += 1;
    }
    masks
};

/// A completed line and the mark that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [Pos; 3],
}

impl WinningLine {
    /// Check whether a position lies on this line
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }
}

/// Check for a winner
///
/// Returns the first completed line in enumeration order, or `None`.
/// For each line the X bitboard is consulted before the O bitboard,
/// matching the board's read policy on overlapping patterns.
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    for (i, &mask) in LINE_MASKS.iter().enumerate() {
        let mark = if board.x.covers(mask) {
            Mark::X
        } else if board.o.covers(mask) {
            Mark::O
        } else {
            continue;
        };

        let [a, b, c] = LINES[i];
        return Some(WinningLine {
            mark,
            cells: [Pos::from_index(a), Pos::from_index(b), Pos::from_index(c)],
        });
    }
    None
}

/// Check if any line is complete
#[inline]
pub fn has_winner(board: &Board) -> bool {
    check_winner(board).is_some()
}

/// Check for a draw: every cell occupied and no line complete
#[inline]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
