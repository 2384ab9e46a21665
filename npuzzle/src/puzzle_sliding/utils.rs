/// Marks a missing neighbor (the edge of the board) in neighbor tables.
pub const DENIED: u8 = u8::MAX;

/// The largest supported board dimension. Tiles `0..N²` and cell numbers must fit in `u8`.
pub const MAX_DIMENSION: u8 = 15;
