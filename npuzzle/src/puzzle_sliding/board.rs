use crate::error::BoardError;
use crate::puzzle_sliding::heuristic::{hamming, manhattan};
use crate::puzzle_sliding::neighbors::{cell_coords, neighbors_of_cell};
use crate::puzzle_sliding::utils::MAX_DIMENSION;
use arrayvec::ArrayVec;
use std::fmt;

/// Immutable state of the `N` x `N` sliding puzzle.
///
/// Tile `0` is the blank. In the goal board tile `t > 0` occupies cell `t-1`
/// (cells are numbered row by row) and the blank occupies the last cell.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: u8,

    /// Indexed by cell numbers, gives tiles that occupy given cell.
    tiles: Box<[u8]>,

    /// Cell of the blank (to speed up neighbors generation).
    blank: u8
}

impl Board {
    /// Constructs a board from its rows. Each row must have as many tiles as there are rows.
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, BoardError> {
        let dimension = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != dimension) {
            return Err(BoardError::Ragged { row, len: r.len(), dimension });
        }
        Self::from_tiles(dimension, rows.into_iter().flatten().collect())
    }

    /// Constructs a board from tiles listed row by row.
    ///
    /// Fails unless `tiles` contains each of `0..dimension²` exactly once.
    pub fn from_tiles(dimension: usize, tiles: Vec<u8>) -> Result<Self, BoardError> {
        if dimension == 0 || dimension > MAX_DIMENSION as usize {
            return Err(BoardError::Dimension(dimension));
        }
        let cells = dimension * dimension;
        if tiles.len() != cells {
            return Err(BoardError::MissingTiles { expected: cells, found: tiles.len() });
        }
        let mut seen = vec![false; cells];
        let mut blank = 0;
        for (cell, &tile) in tiles.iter().enumerate() {
            let slot = seen.get_mut(tile as usize)
                .ok_or(BoardError::OutOfRange { tile: tile as u64, cells })?;
            if *slot { return Err(BoardError::Duplicate(tile)); }
            *slot = true;
            if tile == 0 { blank = cell as u8; }
        }
        Ok(Self { dimension: dimension as u8, tiles: tiles.into_boxed_slice(), blank })
    }

    /// Constructs goal board of the size `dimension` x `dimension`.
    pub fn goal(dimension: u8) -> Self {
        assert!(dimension != 0 && dimension <= MAX_DIMENSION);
        let cells = dimension as usize * dimension as usize;
        let tiles: Box<[u8]> = (1..cells).map(|t| t as u8).chain(std::iter::once(0)).collect();
        Self { dimension, tiles, blank: (cells - 1) as u8 }
    }

    /// Returns the number of rows (equal to the number of columns).
    #[inline] pub fn dimension(&self) -> usize { self.dimension as usize }

    /// Returns tiles listed row by row.
    #[inline] pub fn tiles(&self) -> &[u8] { &self.tiles }

    /// Returns the tile in the given `row` and `col`.
    #[inline] pub fn tile_at(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * self.dimension() + col]
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.tiles.chunks(self.dimension())
    }

    /// Returns cell number of the blank.
    #[inline] pub fn blank_cell(&self) -> u8 { self.blank }

    /// Returns (row, col) of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        let (c, r) = cell_coords(self.dimension, self.blank);
        (r as usize, c as usize)
    }

    /// Number of tiles out of place.
    #[inline] pub fn hamming(&self) -> u32 { hamming(&self.tiles) }

    /// Sum of Manhattan distances between tiles and their goal cells.
    #[inline] pub fn manhattan(&self) -> u32 { manhattan(&self.tiles, self.dimension()) }

    #[inline] pub fn is_goal(&self) -> bool { self.hamming() == 0 }

    /// Returns the board obtained by swapping the first (in row-major order)
    /// pair of horizontally adjacent non-blank tiles.
    ///
    /// Exactly one of a board and its twin is solvable. A board with a single
    /// cell has no such pair and its twin is its copy.
    pub fn twin(&self) -> Self {
        let n = self.dimension();
        let mut tiles = self.tiles.clone();
        if let Some(cell) = (0..tiles.len())
            .find(|&cell| (cell + 1) % n != 0 && tiles[cell] != 0 && tiles[cell + 1] != 0)
        {
            tiles.swap(cell, cell + 1);
        }
        Self { dimension: self.dimension, tiles, blank: self.blank }
    }

    /// Returns a copy of the board with blank swapped with the tile that occupies `new_blank_cell`.
    ///
    /// `new_blank_cell` should be adjacent to the blank.
    pub fn slide_blank(&self, new_blank_cell: u8) -> Self {
        debug_assert!(neighbors_of_cell(self.dimension, self.blank).contains(&new_blank_cell));
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank as usize, new_blank_cell as usize);
        Self { dimension: self.dimension, tiles, blank: new_blank_cell }
    }

    /// Returns all boards reachable by a single slide, trying to move the blank
    /// up, left, down and right, in this order.
    pub fn neighbors(&self) -> ArrayVec<Board, 4> {
        neighbors_of_cell(self.dimension, self.blank).into_iter()
            .map(|cell| self.slide_blank(cell))
            .collect()
    }
}

impl fmt::Display for Board {
    /// Writes the dimension and then the rows, each tile padded to width 2.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dimension)?;
        for row in self.rows() {
            for tile in row {
                write!(f, "{:2} ", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}
