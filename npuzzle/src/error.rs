use crate::puzzle_sliding::utils::MAX_DIMENSION;
use std::fmt;
use thiserror::Error;

/// Reasons for rejecting a board description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("no board dimension given")]
    Empty,
    #[error("board dimension {0} is outside the supported range 1..={max}", max = MAX_DIMENSION)]
    Dimension(usize),
    #[error("row {row} has {len} tiles, expected {dimension}")]
    Ragged { row: usize, len: usize, dimension: usize },
    #[error("expected {expected} tiles, found {found}")]
    MissingTiles { expected: usize, found: usize },
    #[error("tile {tile} is out of range 0..{cells}")]
    OutOfRange { tile: u64, cells: usize },
    #[error("tile {0} occurs more than once")]
    Duplicate(u8),
    #[error("cannot parse {token:?} as a tile number")]
    Parse { token: String },
    #[error("unexpected input after the last tile: {token:?}")]
    TrailingInput { token: String },
}

/// Identifies one of the two searches run by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The search starting from the board given to the solver.
    Original,
    /// The search starting from its twin.
    Twin,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Original => "original",
            Side::Twin => "twin",
        })
    }
}

/// Reasons for a search to stop without classifying the board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The frontier of one search became empty, which is impossible for a valid board.
    #[error("the {0} search has no nodes left to expand")]
    FrontierExhausted(Side),
    /// The statistics collector stopped the search.
    #[error("search cancelled by the statistics collector")]
    Cancelled,
}
