use std::fmt::{Display, Formatter};
use crate::error::ParseError;
use crate::error::ParseError::BadChar;
use crate::pieces::Color::{Black, White};
use crate::pieces::Rank::{King, Standard};
use crate::tiles::{Direction, Tile};

/// The two sides of the game. Black starts on the south side of the board (high rows) and moves
/// north; white starts on the north side and moves south.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    Black,
    White
}

impl Color {

    /// Return the other side.
    pub fn other(&self) -> Self {
        match self {
            Black => White,
            White => Black
        }
    }

    /// Whether `direction` takes a piece of this color forward, ie, towards the far row.
    pub fn is_forward(&self, direction: Direction) -> bool {
        match self {
            Black => direction.is_northward(),
            White => !direction.is_northward()
        }
    }

    /// The row on which a piece of this color is promoted to king.
    pub fn far_row(&self) -> u8 {
        match self {
            Black => 1,
            White => 8
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Black => write!(f, "black"),
            White => write!(f, "white")
        }
    }
}

/// The rank of a piece. Standard pieces may only move forward; kings may move in all four
/// diagonal directions.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Rank {
    Standard,
    King
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
/// A piece belonging to a particular side.
pub struct Piece {
    pub color: Color,
    pub rank: Rank
}

impl Piece {
    /// Create a new piece of the given color and rank.
    pub fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// Create a new standard piece of the given color.
    pub fn standard(color: Color) -> Self {
        Self { color, rank: Standard }
    }

    /// Create a new king of the given color.
    pub fn king(color: Color) -> Self {
        Self { color, rank: King }
    }

    pub fn is_king(&self) -> bool {
        self.rank == King
    }

    /// Whether this piece is allowed to move in the given direction at all.
    pub fn may_move(&self, direction: Direction) -> bool {
        self.is_king() || self.color.is_forward(direction)
    }
}

impl From<Piece> for char {
    /// A single-character representation of a given piece: `b`/`w` for standard pieces and
    /// `B`/`W` for kings.
    fn from(value: Piece) -> Self {
        let c = match value.color {
            Black => 'b',
            White => 'w'
        };
        match value.rank {
            Standard => c,
            King => c.to_ascii_uppercase()
        }
    }
}

impl TryFrom<char> for Piece {

    type Error = ParseError;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        let rank = if value.is_ascii_uppercase() {
            King
        } else {
            Standard
        };
        match value.to_ascii_lowercase() {
            'b' => Ok(Piece::new(Black, rank)),
            'w' => Ok(Piece::new(White, rank)),
            _ => Err(BadChar(value))
        }
    }
}

/// A struct representing a combination of a tile and a piece.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct PlacedPiece {
    pub tile: Tile,
    pub piece: Piece
}

impl PlacedPiece {
    pub fn new(tile: Tile, piece: Piece) -> Self {
        Self { tile, piece }
    }
}
