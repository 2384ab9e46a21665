use crate::puzzle_sliding::board::Board;

/// Returns the number of non-blank tiles that are not in their goal cell.
///
/// `tiles` is indexed by cell number and tile `t` belongs to cell `t-1`.
pub fn hamming(tiles: &[u8]) -> u32 {
    tiles.iter().enumerate().filter(|(cell, t)| **t != 0 && **t as usize != cell + 1).count() as u32
}

/// Returns the sum of Manhattan distances between non-blank tiles and their goal cells
/// in the board with `dimension` columns.
pub fn manhattan(tiles: &[u8], dimension: usize) -> u32 {
    tiles.iter().enumerate().map(|(cell, t)| {
        if *t == 0 { return 0; }
        let goal = *t as usize - 1;
        ((cell / dimension).abs_diff(goal / dimension) + (cell % dimension).abs_diff(goal % dimension)) as u32
    }).sum()
}

/// Estimates the number of moves needed to reach the goal from a board.
///
/// The solver finds minimum-move solutions only if the estimate never exceeds
/// the real number of moves (that is, the heuristic is admissible).
pub trait Heuristic {
    fn estimate(&self, board: &Board) -> u32;
}

/// Sum of Manhattan distances of tiles, the default heuristic.
#[derive(Default, Clone, Copy, Debug)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline(always)] fn estimate(&self, board: &Board) -> u32 { board.manhattan() }
}

/// Number of misplaced tiles. Weaker than `Manhattan`, so the search expands more nodes.
#[derive(Default, Clone, Copy, Debug)]
pub struct Hamming;

impl Heuristic for Hamming {
    #[inline(always)] fn estimate(&self, board: &Board) -> u32 { board.hamming() }
}
