use crate::pieces::Color;
use crate::preset::boards;
use std::fmt::{Display, Formatter};

/// The variant of the game to play. The variants differ only in their starting position; the
/// movement rules are the same.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default, Hash)]
pub enum Ruleset {
    /// Standard rules and board setup.
    #[default]
    Normal,
    /// Players start with eight pieces each instead of twelve.
    Sparse
}

impl Ruleset {

    /// The starting position for this variant, as a board string (see
    /// [`crate::board::state::Board::from_fen`]).
    pub fn starting_board(&self) -> &'static str {
        match self {
            Ruleset::Normal => boards::NORMAL,
            Ruleset::Sparse => boards::SPARSE
        }
    }

    /// Which side goes first.
    pub fn starting_side(&self) -> Color {
        Color::Black
    }
}

impl Display for Ruleset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Ruleset::Normal => write!(f, "normal"),
            Ruleset::Sparse => write!(f, "sparse")
        }
    }
}
