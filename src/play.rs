use crate::tiles::{Coords, Direction, Tile};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::error::ParseError;
use crate::error::ParseError::BadString;
use crate::game::logic::GameLogic;
use crate::game::PlayEffects;
use crate::game::state::GameState;
use crate::pieces::Color;

/// A single move of a piece one diagonal step (or, when jumping, two steps) in a given direction.
/// (Named "Play" rather than "Move" as the lower-cased version of the latter would clash with the
/// Rust keyword.)
///
/// Whether the play is a simple move or a jump is decided by the game logic from what is on the
/// board, not by the caller. A `Play` is not guaranteed to be within the bounds of the board, nor
/// to be valid generally.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct Play {
    pub from: Tile,
    pub direction: Direction
}

impl Play {

    pub fn new(from: Tile, direction: Direction) -> Self {
        Self { from, direction }
    }

    /// The position one step from the origin in the play's direction. This is where a simple move
    /// ends and where the piece to be jumped stands.
    pub fn step_coords(&self) -> Coords {
        Coords::from(self.from) + self.direction.offset()
    }

    /// The position two steps from the origin in the play's direction, ie, where a jump lands.
    pub fn jump_coords(&self) -> Coords {
        Coords::from(self.from) + self.direction.offset().times(2)
    }
}

impl FromStr for Play {
    type Err = ParseError;

    /// Parse a play of the form `C3 NE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(BadString(String::from(s)))
        };
        Ok(Play::new(
            Tile::from_str(tokens[0])?,
            Direction::from_str(tokens[1])?
        ))
    }
}

impl Display for Play {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.from, self.direction)
    }
}

/// A [`Play`] that is known to be legal in the current game, along with the classification the
/// game logic made of it.
///
/// **NOTE:** A `ValidPlay` should only be obtained from [`GameLogic::validate_play`]. Passing a
/// hand-built `ValidPlay` around an invalid `Play` to [`GameLogic::apply_play`] can cause panics.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct ValidPlay {
    pub play: Play,
    /// Where the piece ends up.
    pub to: Tile,
    /// The tile of the opponent's piece that is jumped, if this play is a jump.
    pub captured: Option<Tile>
}

impl ValidPlay {
    pub fn is_jump(&self) -> bool {
        self.captured.is_some()
    }
}

/// Something a side did on its turn.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum Action {
    Play(Play),
    Pass
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(play) => write!(f, "{play}"),
            Action::Pass => write!(f, "pass")
        }
    }
}

/// A record of a single committed ply.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PlayRecord {
    /// The side that made the play.
    pub side: Color,
    /// What the side did.
    pub action: Action,
    /// Details of the effects of the play. Always default for a pass.
    pub effects: PlayEffects
}

impl Display for PlayRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.action)?;
        if let Some(captured) = self.effects.captured {
            write!(f, " x{}", captured.tile)?;
        }
        if self.effects.promoted {
            write!(f, " (king)")?;
        }
        Ok(())
    }
}

/// An iterator over the legal plays that can be made by the piece at the given tile, taking
/// account of whose turn it is and of any pending jump. Note that because this struct holds a
/// reference to the [`GameLogic`] and [`GameState`], neither may be mutated while the iterator
/// exists. Plays are yielded in the order of [`Direction::ALL`].
pub struct ValidPlayIterator<'logic, 'state> {
    game_logic: &'logic GameLogic,
    game_state: &'state GameState,
    start_tile: Tile,
    /// Index into [`Direction::ALL`] of the next direction to try.
    next_direction: usize
}

impl<'logic, 'state> ValidPlayIterator<'logic, 'state> {
    pub fn new(game_logic: &'logic GameLogic, game_state: &'state GameState, tile: Tile) -> Self {
        Self {
            game_logic,
            game_state,
            start_tile: tile,
            next_direction: 0
        }
    }
}

impl Iterator for ValidPlayIterator<'_, '_> {
    type Item = ValidPlay;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&direction) = Direction::ALL.get(self.next_direction) {
            self.next_direction += 1;
            let play = Play::new(self.start_tile, direction);
            if let Ok(valid) = self.game_logic.validate_play(play, self.game_state) {
                return Some(valid)
            }
        }
        None
    }
}
