use crate::tiles::Tile;
use std::fmt::{Debug, Formatter};
use std::ops::{BitAnd, BitOr, Not};

/// A set of tiles stored as one bit per square of the 8x8 board, in row-major order starting from
/// `A1`. The board keeps one of these per color as an index of where that color's pieces are.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {

    /// An empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a bitmask for the given tile. Only the bit corresponding to the tile's position on
    /// the board will be set.
    pub fn tile_mask(t: Tile) -> Self {
        Self(1u64 << t.index())
    }

    pub fn insert(&mut self, t: Tile) {
        *self = *self | Self::tile_mask(t);
    }

    pub fn remove(&mut self, t: Tile) {
        *self = *self & !Self::tile_mask(t);
    }

    /// Number of tiles in the set.
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the tiles in the set, in row-major order.
    pub fn iter(&self) -> BitboardIter {
        BitboardIter { state: self.0, i: 0 }
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl Debug for Bitboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the tiles whose bits are set in a [`Bitboard`].
pub struct BitboardIter {
    /// Bits not yet visited.
    state: u64,
    /// Keeps track of current position in the bitfield.
    i: u32
}

impl Iterator for BitboardIter {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= u64::BITS {
            return None
        }
        let skipped = self.state >> self.i;
        if skipped == 0 {
            return None
        }
        self.i += skipped.trailing_zeros() + 1;
        Some(Tile::from_index(self.i - 1))
    }
}

#[cfg(test)]
mod tests {
    use crate::bitfield::Bitboard;
    use crate::tiles::Tile;
    use std::collections::HashSet;

    #[test]
    fn test_insert_remove() {
        let mut bb = Bitboard::empty();
        assert_eq!(bb.count(), 0);
        bb.insert(Tile::new(1, 1));
        bb.insert(Tile::new(8, 8));
        bb.insert(Tile::new(3, 5));
        assert_eq!(bb.count(), 3);
        assert!(bb.iter().any(|t| t == Tile::new(8, 8)));
        assert!(bb.iter().all(|t| t != Tile::new(7, 7)));
        bb.remove(Tile::new(8, 8));
        assert!(bb.iter().all(|t| t != Tile::new(8, 8)));
        assert_eq!(bb.count(), 2);
        bb.remove(Tile::new(8, 8));
        assert_eq!(bb.count(), 2);
    }

    #[test]
    fn test_iter() {
        let mut bb = Bitboard::empty();
        for t in [Tile::new(8, 8), Tile::new(1, 1), Tile::new(2, 4), Tile::new(7, 1)] {
            bb.insert(t);
        }
        let tiles: Vec<Tile> = bb.iter().collect();
        assert_eq!(tiles, vec![Tile::new(1, 1), Tile::new(7, 1), Tile::new(2, 4), Tile::new(8, 8)]);
        assert_eq!(
            tiles.into_iter().collect::<HashSet<Tile>>(),
            hashset!(Tile::new(1, 1), Tile::new(7, 1), Tile::new(2, 4), Tile::new(8, 8))
        );
        assert_eq!(Bitboard::empty().iter().next(), None);
    }
}
