use crate::error::ParseError;
use crate::error::ParseError::{BadChar, BadDirection, BadStringLen, EmptyString};
use crate::tiles::Direction::{Northeast, Northwest, Southeast, Southwest};
use std::fmt::{Debug, Display, Formatter};
use std::ops::Add;
use std::str::FromStr;

/// The length of each side of the board.
pub const BOARD_LEN: u8 = 8;

/// One of the four diagonal directions a piece may move in. Directions are named by their
/// screen-space compass quadrant: north is towards row 1, west is towards column 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Horizontal -1, vertical -1.
    Northwest,
    /// Horizontal +1, vertical -1.
    Northeast,
    /// Horizontal -1, vertical +1.
    Southwest,
    /// Horizontal +1, vertical +1.
    Southeast
}

impl Direction {

    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [Northwest, Northeast, Southwest, Southeast];

    /// The unit diagonal vector for this direction.
    pub fn offset(&self) -> DiagonalOffset {
        match self {
            Northwest => DiagonalOffset::new(-1, -1),
            Northeast => DiagonalOffset::new(1, -1),
            Southwest => DiagonalOffset::new(-1, 1),
            Southeast => DiagonalOffset::new(1, 1)
        }
    }

    /// Whether moving this way takes a piece towards row 1.
    pub fn is_northward(&self) -> bool {
        matches!(self, Northwest | Northeast)
    }

}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Northwest => "NW",
            Northeast => "NE",
            Southwest => "SW",
            Southeast => "SE"
        };
        write!(f, "{s}")
    }
}

impl FromStr for Direction {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" => Err(EmptyString),
            "NW" => Ok(Northwest),
            "NE" => Ok(Northeast),
            "SW" => Ok(Southwest),
            "SE" => Ok(Southeast),
            other => Err(BadDirection(other.to_string()))
        }
    }
}

/// A signed offset which can be applied to [`Coords`], made up of a horizontal and a vertical
/// displacement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DiagonalOffset {
    pub h: i16,
    pub v: i16
}

impl DiagonalOffset {
    pub fn new(h: i16, v: i16) -> Self {
        Self { h, v }
    }

    /// Scale the offset by the given number of steps.
    pub fn times(&self, steps: i16) -> Self {
        Self { h: self.h * steps, v: self.v * steps }
    }

    /// Whether this offset is exactly one step along a diagonal.
    pub fn is_unit_diagonal(&self) -> bool {
        self.h.abs() == 1 && self.v.abs() == 1
    }
}

/// An unbounded column-row pair representing a hypothetical location, which may or may not be on
/// the board. Can be used to represent out-of-bounds locations, including those with negative
/// values. The fields are wide enough to hold any [`Tile`] plus a jump in any direction.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Coords {
    pub h: i16,
    pub v: i16
}

impl Coords {
    pub fn new(h: i16, v: i16) -> Self {
        Self { h, v }
    }

    pub fn offset_from(&self, other: Coords) -> DiagonalOffset {
        DiagonalOffset {
            h: self.h - other.h,
            v: self.v - other.v
        }
    }
}

impl From<Tile> for Coords {
    fn from(t: Tile) -> Self {
        Self {
            h: t.h.into(),
            v: t.v.into()
        }
    }
}

impl Add<DiagonalOffset> for Coords {
    type Output = Self;

    fn add(self, rhs: DiagonalOffset) -> Self {
        Self {
            h: self.h + rhs.h,
            v: self.v + rhs.v
        }
    }
}

impl Display for Coords {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.h, self.v)
    }
}

/// The location of a single square on the board: column `h` (1 = west) and row `v` (1 = north),
/// both 1-based. This struct is only a reference to a location on the board, and does not contain
/// any other information such as piece placement.
///
/// Constructing a `Tile` does not check that it is on the board or playable; the board and the
/// game logic check that before using one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Tile {
    pub h: u8,
    pub v: u8
}

impl Tile {

    /// Create a new [`Tile`] with the given column and row.
    pub const fn new(h: u8, v: u8) -> Self {
        Self { h, v }
    }

    /// Whether both coordinates lie within `1..=8`.
    pub fn in_bounds(&self) -> bool {
        let r = 1..=BOARD_LEN;
        r.contains(&self.h) && r.contains(&self.v)
    }

    /// Whether this is one of the squares pieces may stand on (`h + v` even).
    pub fn is_playable(&self) -> bool {
        self.h % 2 == self.v % 2
    }

    /// Zero-based index of this tile in row-major order, used for bitboards.
    pub(crate) fn index(&self) -> u32 {
        (self.v as u32 - 1) * (BOARD_LEN as u32) + (self.h as u32 - 1)
    }

    /// Inverse of [`Self::index`].
    pub(crate) fn from_index(i: u32) -> Self {
        let len = BOARD_LEN as u32;
        Self::new((i % len) as u8 + 1, (i / len) as u8 + 1)
    }
}

impl Debug for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile(h={}, v={})", self.h, self.v)
    }
}

impl Display for Tile {
    /// Columns `A` to `Z` are written as letters; anything else falls back to `(h, v)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.h {
            1..=26 => write!(f, "{}{}", (b'A' + self.h - 1) as char, self.v),
            _ => write!(f, "({}, {})", self.h, self.v)
        }
    }
}

impl FromStr for Tile {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let h = if let Some(&byte) = s.as_bytes().first() {
            let byte = byte.to_ascii_uppercase();
            if !(b'A'..=b'Z').contains(&byte) {
                return Err(BadChar(byte as char))
            }
            byte - b'A' + 1
        } else {
            return Err(EmptyString)
        };
        if s.len() < 2 {
            return Err(BadStringLen(s.len()))
        }
        Ok(Tile::new(h, s[1..].parse::<u8>()?))
    }
}

impl From<Tile> for (u8, u8) {
    fn from(value: Tile) -> Self {
        (value.h, value.v)
    }
}

impl From<(u8, u8)> for Tile {
    fn from((h, v): (u8, u8)) -> Self {
        Tile::new(h, v)
    }
}

/// Iterator over the playable squares of the board, row by row from the north.
pub struct TileIterator {
    current_h: u8,
    current_v: u8
}

impl TileIterator {
    pub(crate) fn new() -> Self {
        Self {
            current_h: 1,
            current_v: 1
        }
    }
}

impl Iterator for TileIterator {
    type Item = Tile;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_v > BOARD_LEN {
                return None
            }
            let tile = Tile::new(self.current_h, self.current_v);
            if self.current_h >= BOARD_LEN {
                self.current_v += 1;
                self.current_h = 1;
            } else {
                self.current_h += 1;
            }
            if tile.is_playable() {
                return Some(tile)
            }
        }
    }
}
