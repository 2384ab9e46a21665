#![doc = include_str!("../README.md")]

pub mod error;
pub mod frontier;
pub mod solver;
pub mod stats;
pub mod puzzle_sliding;
