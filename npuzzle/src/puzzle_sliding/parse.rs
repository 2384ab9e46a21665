use crate::error::BoardError;
use crate::puzzle_sliding::board::Board;
use crate::puzzle_sliding::utils::MAX_DIMENSION;
use std::str::FromStr;

fn parse_number(token: &str) -> Result<u64, BoardError> {
    token.parse().map_err(|_| BoardError::Parse { token: token.to_owned() })
}

/// Reads the dimension `N` followed by `N²` tiles listed row by row,
/// all separated by whitespace.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let dimension = parse_number(tokens.next().ok_or(BoardError::Empty)?)?;
        if dimension == 0 || dimension > MAX_DIMENSION as u64 {
            return Err(BoardError::Dimension(dimension.try_into().unwrap_or(usize::MAX)));
        }
        let dimension = dimension as usize;
        let cells = dimension * dimension;
        let mut tiles = Vec::with_capacity(cells);
        for token in tokens.by_ref().take(cells) {
            let tile = parse_number(token)?;
            if tile >= cells as u64 { return Err(BoardError::OutOfRange { tile, cells }); }
            tiles.push(tile as u8);
        }
        if tiles.len() != cells {
            return Err(BoardError::MissingTiles { expected: cells, found: tiles.len() });
        }
        if let Some(token) = tokens.next() {
            return Err(BoardError::TrailingInput { token: token.to_owned() });
        }
        Board::from_tiles(dimension, tiles)
    }
}
