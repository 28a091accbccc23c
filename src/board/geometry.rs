use crate::error::BoardError;
use crate::tiles::{Coords, Tile, TileIterator, BOARD_LEN};

/// This struct contains information about the geometry of the board, such as its size and which
/// squares are playable. It does not contain information about piece placement or any other state
/// that would be expected to change over the course of a game.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoardGeometry {
    pub side_len: u8
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardGeometry {

    pub fn new() -> Self {
        Self { side_len: BOARD_LEN }
    }

    /// Check whether the given tile is on the board.
    pub fn tile_in_bounds(&self, tile: Tile) -> bool {
        let r = 1..=self.side_len;
        r.contains(&tile.h) && r.contains(&tile.v)
    }

    /// Check whether the given tile is on the board and is a square pieces may stand on.
    pub fn tile_playable(&self, tile: Tile) -> bool {
        self.tile_in_bounds(tile) && tile.is_playable()
    }

    /// Check whether the coords refer to a position on the board.
    pub fn coords_in_bounds(&self, coords: Coords) -> bool {
        let range = 1..=i16::from(self.side_len);
        range.contains(&coords.h) && range.contains(&coords.v)
    }

    /// Convert an unbounded [`Coords`] to a [`Tile`] representing a position on the board, if
    /// possible. If the coords represents a position not on the board, return a
    /// [`BoardError::OutOfRange`] error.
    pub fn coords_to_tile(&self, coords: Coords) -> Result<Tile, BoardError> {
        let clamp = |x: i16| x.clamp(0, u8::MAX.into()) as u8;
        let tile = Tile::new(clamp(coords.h), clamp(coords.v));
        if self.coords_in_bounds(coords) {
            Ok(tile)
        } else {
            Err(BoardError::OutOfRange(tile))
        }
    }

    /// Whether the two positions are one step apart along a diagonal.
    pub fn diagonally_adjacent(&self, from: Coords, to: Coords) -> bool {
        to.offset_from(from).is_unit_diagonal()
    }

    /// Return an iterator over all playable tiles on the board.
    pub fn iter_tiles(&self) -> TileIterator {
        TileIterator::new()
    }
}
