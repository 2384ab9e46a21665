use crate::puzzle_sliding::board::Board;
use crate::puzzle_sliding::neighbors::{construct_neighbors, neighbors_of};
use crate::puzzle_sliding::utils::DENIED;
use rand::Rng;
use rand::seq::SliceRandom;

/// Returns the board reached from the goal by `steps` random slides of the blank.
/// A slide never undoes the previous one. The result is always solvable in at most `steps` moves.
pub fn random_walk<R: Rng + ?Sized>(dimension: u8, steps: usize, rng: &mut R) -> Board {
    let neighbors = construct_neighbors(dimension);
    let mut board = Board::goal(dimension);
    let mut prev_blank_pos = DENIED;
    let mut made = 0;
    while made < steps {
        let blank_pos = board.blank_cell();
        let Some(&new_blank_pos) = neighbors_of(&neighbors, blank_pos).choose(rng) else { break };
        if new_blank_pos == prev_blank_pos { continue; }
        prev_blank_pos = blank_pos;
        board = board.slide_blank(new_blank_pos);
        made += 1;
    }
    board
}

/// Returns the twin of a random walk board, which is never solvable.
///
/// Panics if `dimension < 2`, as every board with a single cell is solvable.
pub fn random_unsolvable<R: Rng + ?Sized>(dimension: u8, steps: usize, rng: &mut R) -> Board {
    assert!(dimension >= 2);
    random_walk(dimension, steps, rng).twin()
}
