use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use crate::bitfield::{Bitboard, BitboardIter};
use crate::error::{BoardError, ParseError};
use crate::error::ParseError::{BadLineLen, BadStringLen};
use crate::pieces::{Color, Piece, PlacedPiece, Rank};
use crate::tiles::{Tile, BOARD_LEN};

const LEN: usize = BOARD_LEN as usize;

/// The current placement of pieces on the board.
///
/// Pieces are stored by position: each square holds at most one [`Piece`], and a piece's location
/// is simply the square that holds it. Alongside the grid, the board keeps a [`Bitboard`] per
/// color recording which squares that color occupies, so that pieces can be counted and
/// enumerated without scanning the grid. Every mutating method updates the grid and the index
/// together.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Board {
    /// Indexed as `squares[v - 1][h - 1]`.
    squares: [[Option<Piece>; LEN]; LEN],
    black: Bitboard,
    white: Bitboard
}

impl Board {

    /// Create a board with no pieces on it.
    pub fn empty() -> Self {
        Self::default()
    }

    fn check_range(t: Tile) -> Result<(), BoardError> {
        if t.in_bounds() {
            Ok(())
        } else {
            Err(BoardError::OutOfRange(t))
        }
    }

    fn index_mut(&mut self, color: Color) -> &mut Bitboard {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white
        }
    }

    /// Get the piece that occupies the given tile, if any. Fails if the tile is off the board.
    pub fn get(&self, t: Tile) -> Result<Option<Piece>, BoardError> {
        Self::check_range(t)?;
        Ok(self.squares[t.v as usize - 1][t.h as usize - 1])
    }

    /// Get the piece that occupies the given tile, if any. Tiles off the board are treated as
    /// empty.
    pub fn get_piece(&self, t: Tile) -> Option<Piece> {
        self.get(t).ok().flatten()
    }

    /// Check if there is any piece occupying a tile.
    pub fn tile_occupied(&self, t: Tile) -> bool {
        self.get_piece(t).is_some()
    }

    /// Place a piece at the given position. The tile must be a playable square with nothing on it.
    pub fn place(&mut self, t: Tile, piece: Piece) -> Result<(), BoardError> {
        Self::check_range(t)?;
        if !t.is_playable() {
            return Err(BoardError::NotPlayable(t))
        }
        if self.tile_occupied(t) {
            return Err(BoardError::Occupied(t))
        }
        self.squares[t.v as usize - 1][t.h as usize - 1] = Some(piece);
        self.index_mut(piece.color).insert(t);
        Ok(())
    }

    /// Remove and return the piece at the given position.
    pub fn remove(&mut self, t: Tile) -> Result<Piece, BoardError> {
        Self::check_range(t)?;
        let piece = self.squares[t.v as usize - 1][t.h as usize - 1]
            .take()
            .ok_or(BoardError::Empty(t))?;
        self.index_mut(piece.color).remove(t);
        Ok(piece)
    }

    /// Move a piece from one position to another, keeping its rank. This does not check whether a
    /// move is legal; it only checks that `from` holds a piece and that `to` can receive it.
    /// Returns the piece that was moved. On error the board is unchanged.
    pub fn relocate(&mut self, from: Tile, to: Tile) -> Result<Piece, BoardError> {
        Self::check_range(to)?;
        if !to.is_playable() {
            return Err(BoardError::NotPlayable(to))
        }
        if self.tile_occupied(to) {
            return Err(BoardError::Occupied(to))
        }
        let piece = self.remove(from)?;
        self.place(to, piece)?;
        Ok(piece)
    }

    /// Make the piece at the given tile a king. Returns `true` if its rank changed.
    pub fn promote(&mut self, t: Tile) -> Result<bool, BoardError> {
        Self::check_range(t)?;
        let square = &mut self.squares[t.v as usize - 1][t.h as usize - 1];
        match square {
            Some(piece) if piece.rank == Rank::King => Ok(false),
            Some(piece) => {
                piece.rank = Rank::King;
                Ok(true)
            },
            None => Err(BoardError::Empty(t))
        }
    }

    /// Return an iterator over the tiles that are occupied by pieces of the given color.
    pub fn iter_occupied(&self, color: Color) -> BitboardIter {
        match color {
            Color::Black => self.black.iter(),
            Color::White => self.white.iter()
        }
    }

    /// A snapshot of the pieces of the given color along with their positions. Order is not
    /// guaranteed.
    pub fn pieces_of(&self, color: Color) -> Vec<PlacedPiece> {
        self.iter_occupied(color)
            .filter_map(|t| self.get_piece(t).map(|p| PlacedPiece::new(t, p)))
            .collect()
    }

    /// Count the number of pieces of the given color left on the board.
    pub fn count_pieces(&self, color: Color) -> u8 {
        match color {
            Color::Black => self.black.count() as u8,
            Color::White => self.white.count() as u8
        }
    }

    /// Parse board state from a string in FEN-like format: one field per row from row 1 to row
    /// 8, separated by `/`, where digits count empty squares and letters are pieces.
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let rows: Vec<&str> = fen.trim().split('/').collect();
        if rows.len() != LEN {
            return Err(BadStringLen(rows.len()))
        }
        let mut board = Self::empty();
        for (r, line) in rows.into_iter().enumerate() {
            let mut h = 0u8;
            for chr in line.chars() {
                if let Some(n_empty) = chr.to_digit(10) {
                    h += n_empty as u8;
                } else {
                    h += 1;
                    board.place(Tile::new(h, r as u8 + 1), Piece::try_from(chr)?)?;
                }
                if h > BOARD_LEN {
                    return Err(BadLineLen(h as usize))
                }
            }
            if h != BOARD_LEN {
                return Err(BadLineLen(h as usize))
            }
        }
        Ok(board)
    }

    /// Parse board state from a string in the format output by [`Self::to_display_str`].
    pub fn from_display_str(display_str: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = display_str.trim().lines().map(str::trim).collect();
        if lines.len() != LEN {
            return Err(BadStringLen(lines.len()))
        }
        let mut board = Self::empty();
        for (r, line) in lines.into_iter().enumerate() {
            if line.chars().count() != LEN {
                return Err(BadLineLen(line.chars().count()))
            }
            for (c, chr) in line.chars().enumerate() {
                if chr != '.' {
                    board.place(Tile::new(c as u8 + 1, r as u8 + 1), Piece::try_from(chr)?)?;
                }
            }
        }
        Ok(board)
    }

    /// Return a string in FEN-like format representing the board state.
    pub fn to_fen(&self) -> String {
        let mut s = String::new();
        for v in 1..=BOARD_LEN {
            let mut n_empty = 0;
            for h in 1..=BOARD_LEN {
                if let Some(piece) = self.get_piece(Tile::new(h, v)) {
                    if n_empty > 0 {
                        s.push_str(n_empty.to_string().as_str());
                        n_empty = 0;
                    }
                    s.push(piece.into());
                } else {
                    n_empty += 1;
                }
            }
            if n_empty > 0 {
                s.push_str(n_empty.to_string().as_str());
            }
            if v < BOARD_LEN {
                s.push('/');
            }
        }
        s
    }

    /// Return a string representing the board state, in a format suitable for printing.
    pub fn to_display_str(&self) -> String {
        let mut s = String::new();
        for v in 1..=BOARD_LEN {
            for h in 1..=BOARD_LEN {
                match self.get_piece(Tile::new(h, v)) {
                    Some(piece) => s.push(piece.into()),
                    None => s.push('.'),
                }
            }
            s.push('\n');
        }
        s
    }
}

impl FromStr for Board {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_display_str())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;
    use crate::board::state::Board;
    use crate::error::{BoardError, ParseError};
    use crate::pieces::Color::{Black, White};
    use crate::pieces::Piece;
    use crate::preset::boards;
    use crate::tiles::Tile;

    #[test]
    fn test_from_str() {
        let from_fen = Board::from_fen(boards::NORMAL);
        let from_display_str = Board::from_display_str(
            &[
                "w.w.w.w.",
                ".w.w.w.w",
                "w.w.w.w.",
                "........",
                "........",
                ".b.b.b.b",
                "b.b.b.b.",
                ".b.b.b.b"
            ].join("\n")
        );
        assert!(from_fen.is_ok());
        assert_eq!(from_fen, from_display_str);
        assert_eq!(from_fen.unwrap().to_fen(), boards::NORMAL);
    }

    #[test]
    fn test_bad_boards() {
        assert_eq!(Board::from_fen("8/8/8"), Err(ParseError::BadStringLen(3)));
        assert_eq!(Board::from_fen("8/8/8/8/8/8/8/7"), Err(ParseError::BadLineLen(7)));
        assert_eq!(Board::from_fen("8/8/8/8/8/8/8/9"), Err(ParseError::BadLineLen(9)));
        assert_eq!(Board::from_fen("8/8/8/8/8/8/8/x7"), Err(ParseError::BadChar('x')));
        assert_eq!(
            Board::from_fen("1w6/8/8/8/8/8/8/8"),
            Err(ParseError::BadPlacement(BoardError::NotPlayable(Tile::new(2, 1))))
        );
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::empty();
        assert_eq!(board.get(Tile::new(0, 1)), Err(BoardError::OutOfRange(Tile::new(0, 1))));
        assert_eq!(board.get(Tile::new(1, 9)), Err(BoardError::OutOfRange(Tile::new(1, 9))));
        assert_eq!(board.get(Tile::new(1, 1)), Ok(None));
        assert_eq!(board.get_piece(Tile::new(9, 9)), None);
    }

    #[test]
    fn test_place_remove_relocate() {
        let mut board = Board::empty();
        assert_eq!(board.place(Tile::new(3, 5), Piece::standard(Black)), Ok(()));
        assert_eq!(
            board.place(Tile::new(3, 5), Piece::standard(White)),
            Err(BoardError::Occupied(Tile::new(3, 5)))
        );
        assert_eq!(
            board.place(Tile::new(3, 4), Piece::standard(White)),
            Err(BoardError::NotPlayable(Tile::new(3, 4)))
        );
        assert_eq!(board.count_pieces(Black), 1);
        assert_eq!(board.count_pieces(White), 0);

        board.place(Tile::new(2, 4), Piece::standard(White)).unwrap();
        assert_eq!(
            board.relocate(Tile::new(3, 5), Tile::new(2, 4)),
            Err(BoardError::Occupied(Tile::new(2, 4)))
        );
        assert_eq!(board.relocate(Tile::new(3, 5), Tile::new(4, 4)), Ok(Piece::standard(Black)));
        assert_eq!(board.get_piece(Tile::new(3, 5)), None);
        assert_eq!(board.get_piece(Tile::new(4, 4)), Some(Piece::standard(Black)));
        assert_eq!(board.iter_occupied(Black).collect::<Vec<_>>(), vec![Tile::new(4, 4)]);
        assert_eq!(
            board.relocate(Tile::new(3, 5), Tile::new(6, 6)),
            Err(BoardError::Empty(Tile::new(3, 5)))
        );

        assert_eq!(board.remove(Tile::new(2, 4)), Ok(Piece::standard(White)));
        assert_eq!(board.remove(Tile::new(2, 4)), Err(BoardError::Empty(Tile::new(2, 4))));
        assert_eq!(board.count_pieces(White), 0);
        assert!(board.pieces_of(White).is_empty());
    }

    #[test]
    fn test_promote_keeps_rank_on_relocate() {
        let mut board = Board::from_str("8/8/8/8/8/8/8/1b6").unwrap();
        assert_eq!(board.promote(Tile::new(2, 8)), Ok(true));
        assert_eq!(board.promote(Tile::new(2, 8)), Ok(false));
        assert_eq!(board.promote(Tile::new(4, 8)), Err(BoardError::Empty(Tile::new(4, 8))));
        board.relocate(Tile::new(2, 8), Tile::new(3, 7)).unwrap();
        assert_eq!(board.get_piece(Tile::new(3, 7)), Some(Piece::king(Black)));
        assert_eq!(board.to_fen(), "8/8/8/8/8/8/2B5/8");
    }

    #[test]
    fn test_index_matches_grid() {
        let board = Board::from_fen(boards::NORMAL).unwrap();
        for color in [Black, White] {
            let pieces = board.pieces_of(color);
            assert_eq!(pieces.len(), 12);
            assert_eq!(board.count_pieces(color) as usize, pieces.len());
            for placed in pieces {
                assert_eq!(board.get_piece(placed.tile), Some(placed.piece));
                assert_eq!(placed.piece.color, color);
            }
        }
        let occupied: HashSet<Tile> = board.iter_occupied(White).collect();
        let expected: HashSet<Tile> = (1..=3u8)
            .flat_map(|v| (1..=8u8).map(move |h| Tile::new(h, v)))
            .filter(|t| t.is_playable())
            .collect();
        assert_eq!(occupied, expected);
    }
}
