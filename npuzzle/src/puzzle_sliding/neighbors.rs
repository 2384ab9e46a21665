use crate::puzzle_sliding::utils::DENIED;
use arrayvec::ArrayVec;

// Directions in the order the blank is tried when neighbors are generated.
pub const UP: usize = 0;
pub const LEFT: usize = 1;
pub const DOWN: usize = 2;
pub const RIGHT: usize = 3;

/// Stores indices of neighbors (or DENIED in the case of no neighbor) and is indexed by (in order): index of the cell and the direction.
pub type Neighbors = Vec<[u8; 4]>;

/// Returns cell number = index of cell with given (c, r) coordinates in the board with given number of cols.
#[inline(always)] pub fn cell_nr(cols: u8, c: u8, r: u8) -> u8 { r * cols + c }

/// Returns (c, r) coordinates of the cell with given number in the board with given number of cols.
#[inline(always)] pub fn cell_coords(cols: u8, cell: u8) -> (u8, u8) { (cell % cols, cell / cols) }

/// Returns the cell adjacent to `cell` in direction `dir`, or DENIED if it lies outside the `dimension` x `dimension` board.
pub fn neighbor_in(dimension: u8, cell: u8, dir: usize) -> u8 {
    let (c, r) = cell_coords(dimension, cell);
    match dir {
        UP if r != 0 => cell_nr(dimension, c, r - 1),
        LEFT if c != 0 => cell_nr(dimension, c - 1, r),
        DOWN if r + 1 != dimension => cell_nr(dimension, c, r + 1),
        RIGHT if c + 1 != dimension => cell_nr(dimension, c + 1, r),
        _ => DENIED
    }
}

/// Constructs neighbors matrix for the board of the size `dimension` x `dimension`.
pub fn construct_neighbors(dimension: u8) -> Neighbors {
    let cells = dimension as usize * dimension as usize;
    (0..cells as u8).map(|cell| {
        let mut dirs = [DENIED; 4];
        for (dir, neighbor) in dirs.iter_mut().enumerate() {
            *neighbor = neighbor_in(dimension, cell, dir);
        }
        dirs
    }).collect()
}

/// Returns neighbors (cell numbers) of the given `cell`.
pub fn neighbors_of(neighbors: &Neighbors, cell: u8) -> ArrayVec<u8, 4> {
    neighbors[cell as usize].iter().copied().filter(|n| *n != DENIED).collect()
}

/// Returns neighbors of `cell` without building the whole neighbors matrix.
pub fn neighbors_of_cell(dimension: u8, cell: u8) -> ArrayVec<u8, 4> {
    (0..4).map(|dir| neighbor_in(dimension, cell, dir)).filter(|n| *n != DENIED).collect()
}
