use std::num::ParseIntError;
use thiserror::Error;
use crate::play::Play;
use crate::tiles::{Coords, Tile};

/// Errors that may be encountered when parsing a string.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    /// Tried to parse a string, but it was not the expected length. The given `usize` is the
    /// actual length.
    #[error("unexpected string length {0}")]
    BadStringLen(usize),
    /// Tried to parse a multi-line (or multi-row) string but encountered a line that was not the
    /// expected length. The given `usize` is the actual length.
    #[error("unexpected line length {0}")]
    BadLineLen(usize),
    /// Encountered an unexpected character in a string.
    #[error("unexpected character '{0}'")]
    BadChar(char),
    /// Tried to parse an empty string.
    #[error("empty string")]
    EmptyString,
    /// Could not parse an integer from a string. This variant wraps the [`ParseIntError`] that was
    /// returned when trying to parse.
    #[error("bad number: {0}")]
    BadInt(#[from] ParseIntError),
    /// The string is not one of `NW`, `NE`, `SW` or `SE`.
    #[error("unknown direction \"{0}\"")]
    BadDirection(String),
    /// A board string tried to put a piece somewhere it cannot go.
    #[error("bad piece placement: {0}")]
    BadPlacement(#[from] BoardError),
    /// A generic error type where the given string could not be parsed for some reason.
    #[error("could not parse \"{0}\"")]
    BadString(String)
}

/// Errors relating to the board. These are breaches of the board's own contract; the game logic
/// validates plays so that it never triggers them.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum BoardError {
    /// Coordinates are out of range, ie, not on board.
    #[error("{0} is not on the board")]
    OutOfRange(Tile),
    /// The tile is on the board but is not a playable (dark) square.
    #[error("{0} is not a playable square")]
    NotPlayable(Tile),
    /// There is already a piece at the given tile.
    #[error("{0} is already occupied")]
    Occupied(Tile),
    /// There is no piece at the given tile, where one is expected.
    #[error("there is no piece at {0}")]
    Empty(Tile)
}

/// Different ways a play (or pass) can break the rules. All of these are recoverable: the game is
/// left exactly as it was and the caller may try again.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RuleViolation {
    /// The origin is off the board or is not a playable square.
    #[error("invalid coordinates")]
    InvalidCoordinates,
    /// The destination would be outside the board.
    #[error("can't move off the board")]
    OffBoard,
    /// There is no piece to move at the origin.
    #[error("no piece at given coordinates")]
    NoPieceAtOrigin,
    /// The destination is not one step along a diagonal from the origin.
    #[error("destination is not diagonally adjacent")]
    NotDiagonallyAdjacent,
    /// The piece being moved does not belong to the side whose turn it is.
    #[error("it's not your turn")]
    NotYourTurn,
    /// A standard piece tried to move towards its own side of the board.
    #[error("can't move backwards")]
    CannotMoveBackward,
    /// The destination is occupied by a piece of the same color.
    #[error("you have a piece in the way")]
    BlockedByOwnPiece,
    /// The square beyond the opponent's piece is occupied or off the board.
    #[error("jump is blocked")]
    JumpBlocked,
    /// A piece is part-way through a multi-jump and must jump again before anything else happens.
    #[error("piece at {0} must jump again")]
    MustContinueForcedJump(Tile),
    /// Game is already over.
    #[error("the game is over")]
    GameOver
}

/// A rejected play, with the rule that was broken and enough context for the caller to describe
/// what was attempted.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("unable to play {play}: {violation}")]
pub struct InvalidPlay {
    /// The rule that the play breaks.
    #[source]
    pub violation: RuleViolation,
    /// The play that was attempted.
    pub play: Play,
    /// The square one step from the origin in the direction of the play. May be off the board.
    pub destination: Coords
}

impl InvalidPlay {
    pub fn new(violation: RuleViolation, play: Play) -> Self {
        Self { violation, play, destination: play.step_coords() }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{InvalidPlay, RuleViolation};
    use crate::play::Play;
    use crate::tiles::{Coords, Direction, Tile};
    use std::error::Error;

    #[test]
    fn test_messages() {
        assert_eq!(
            RuleViolation::MustContinueForcedJump(Tile::new(1, 3)).to_string(),
            "piece at A3 must jump again"
        );
        let err = InvalidPlay::new(
            RuleViolation::CannotMoveBackward,
            Play::new(Tile::new(2, 4), Direction::Northwest)
        );
        assert_eq!(err.destination, Coords::new(1, 3));
        assert_eq!(err.to_string(), "unable to play B4 NW: can't move backwards");
        assert_eq!(
            err.source().map(|e| e.to_string()),
            Some(String::from("can't move backwards"))
        );
    }
}
