//! The `N` x `N` sliding puzzle: boards, their heuristics and generators of test positions.

pub mod board;
pub mod heuristic;
pub mod neighbors;
pub mod parse;
pub mod scramble;
pub mod utils;

pub use board::Board;
