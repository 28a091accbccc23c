use crate::board::geometry::BoardGeometry;
use crate::board::state::Board;
use crate::error::RuleViolation::{BlockedByOwnPiece, CannotMoveBackward, GameOver, InvalidCoordinates, JumpBlocked, MustContinueForcedJump, NoPieceAtOrigin, NotDiagonallyAdjacent, NotYourTurn, OffBoard};
use crate::error::{InvalidPlay, RuleViolation};
use crate::game::state::GameState;
use crate::game::GameStatus::{Ongoing, Over};
use crate::game::PlayEffects;
use crate::pieces::{Color, PlacedPiece};
use crate::play::{Action, Play, PlayRecord, ValidPlay, ValidPlayIterator};
use crate::tiles::{Coords, Direction, Tile};
use log::trace;

/// The result of making a play.
pub struct DoPlayResult {
    /// The game state following the play.
    pub new_state: GameState,
    /// A record of the play and its effect.
    pub record: PlayRecord
}

impl From<DoPlayResult> for (GameState, PlayRecord) {
    fn from(result: DoPlayResult) -> (GameState, PlayRecord) {
        (result.new_state, result.record)
    }
}

/// This struct implements the rules of the game. It knows the geometry of the board and provides
/// methods for validating plays and working out their effects.
///
/// It does not contain the current game state (piece placement, side to play, etc). Its methods
/// take a reference to that state and, where a play changes it, return a new state rather than
/// modifying the one they were given. A rejected play therefore never leaves anything half done.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameLogic {
    pub board_geo: BoardGeometry
}

impl GameLogic {

    pub fn new() -> Self {
        Self { board_geo: BoardGeometry::new() }
    }

    /// Classify a play by the given side on the given board, ignoring any pending jump. Returns a
    /// [`ValidPlay`] describing where the piece ends up and what it captures, or the
    /// [`RuleViolation`] that the play breaks.
    pub fn classify_play(&self, play: Play, side: Color, board: &Board)
        -> Result<ValidPlay, RuleViolation> {
        let from = play.from;
        if !self.board_geo.tile_playable(from) {
            return Err(InvalidCoordinates)
        }
        let piece = board.get_piece(from).ok_or(NoPieceAtOrigin)?;
        if piece.color != side {
            return Err(NotYourTurn)
        }

        let step = play.step_coords();
        let to = self.board_geo.coords_to_tile(step).map_err(|_| OffBoard)?;
        if !self.board_geo.diagonally_adjacent(Coords::from(from), step) {
            return Err(NotDiagonallyAdjacent)
        }
        if !piece.may_move(play.direction) {
            return Err(CannotMoveBackward)
        }

        match board.get_piece(to) {
            None => Ok(ValidPlay { play, to, captured: None }),
            Some(other) if other.color == piece.color => Err(BlockedByOwnPiece),
            Some(_) => {
                // Opponent's piece: see whether it can be jumped.
                let landing = self.board_geo.coords_to_tile(play.jump_coords())
                    .map_err(|_| JumpBlocked)?;
                if board.tile_occupied(landing) {
                    return Err(JumpBlocked)
                }
                Ok(ValidPlay { play, to: landing, captured: Some(to) })
            }
        }
    }

    /// Check whether a play is valid for the given side in the given state, including the rule
    /// that a piece part-way through a multi-jump must keep jumping.
    ///
    /// While a jump is pending, anything other than a legal jump by the pending piece fails with
    /// [`MustContinueForcedJump`], whatever else is wrong with it.
    pub fn validate_play_for_side(&self, play: Play, side: Color, state: &GameState)
        -> Result<ValidPlay, RuleViolation> {
        if state.status != Ongoing {
            return Err(GameOver)
        }
        match state.pending_jump {
            Some(pending) if play.from != pending => Err(MustContinueForcedJump(pending)),
            Some(pending) => self.classify_play(play, side, &state.board)
                .ok()
                .filter(ValidPlay::is_jump)
                .ok_or(MustContinueForcedJump(pending)),
            None => self.classify_play(play, side, &state.board)
        }
    }

    /// Check whether a play is valid for the side whose turn it is. Returns a `Result` which
    /// contains a [`ValidPlay`] if it is valid, and a [`RuleViolation`] describing the reason for
    /// the invalidity otherwise.
    pub fn validate_play(&self, play: Play, state: &GameState) -> Result<ValidPlay, RuleViolation> {
        self.validate_play_for_side(play, state.side_to_play, state)
    }

    /// Whether the piece on the given tile could jump in any direction on the given board. Standard
    /// pieces are only considered for forward jumps. Returns `false` if the tile is empty.
    pub fn can_jump_from(&self, tile: Tile, board: &Board) -> bool {
        let Some(piece) = board.get_piece(tile) else {
            return false
        };
        Direction::ALL.iter().any(|d| {
            self.classify_play(Play::new(tile, *d), piece.color, board)
                .is_ok_and(|valid| valid.is_jump())
        })
    }

    /// Apply a play that has already been validated against `state`, returning the resulting
    /// state and a record of the play. The given state is not modified.
    ///
    /// Panics if `valid` was not produced by validating against `state`.
    pub fn apply_play(&self, valid: ValidPlay, state: &GameState) -> DoPlayResult {
        let mut new_state = *state;
        let side = state.side_to_play;
        let board = &mut new_state.board;

        board.relocate(valid.play.from, valid.to).expect("Validated play should have a piece to move.");
        let captured = valid.captured.map(|t| {
            let piece = board.remove(t).expect("Validated jump should have a piece to capture.");
            PlacedPiece::new(t, piece)
        });
        // Promotion takes effect before looking for a further jump, so a piece crowned mid-chain
        // may carry on jumping backwards.
        let promoted = valid.to.v == side.far_row()
            && board.promote(valid.to).expect("Piece should be at its destination.");
        let continuation = captured.is_some() && self.can_jump_from(valid.to, board);

        if continuation {
            trace!("{} must jump again from {}", side, valid.to);
            new_state.pending_jump = Some(valid.to);
        } else {
            self.hand_off(&mut new_state);
        }
        new_state.turn += 1;

        DoPlayResult {
            new_state,
            record: PlayRecord {
                side,
                action: Action::Play(valid.play),
                effects: PlayEffects {
                    to: Some(valid.to),
                    captured,
                    promoted,
                    continuation
                }
            }
        }
    }

    /// Give the turn to the other side and end the game if that side has no pieces left.
    fn hand_off(&self, state: &mut GameState) {
        let mover = state.side_to_play;
        state.pending_jump = None;
        state.side_to_play = mover.other();
        if state.board.count_pieces(state.side_to_play) == 0 {
            state.status = Over { winner: mover };
        }
    }

    /// Validate a play and, if it is valid, work out its outcome. Returns the state following the
    /// play together with a record of it, or an [`InvalidPlay`] if the play breaks the rules.
    pub fn do_play(&self, play: Play, state: &GameState) -> Result<DoPlayResult, InvalidPlay> {
        let valid = self.validate_play(play, state)
            .map_err(|violation| InvalidPlay::new(violation, play))?;
        Ok(self.apply_play(valid, state))
    }

    /// Cede the turn to the other side. There is no requirement that the passing side be unable to
    /// move; the only restrictions are that the game is still going and that no jump is pending.
    pub fn do_pass(&self, state: &GameState) -> Result<DoPlayResult, RuleViolation> {
        if state.status != Ongoing {
            return Err(GameOver)
        }
        if let Some(pending) = state.pending_jump {
            return Err(MustContinueForcedJump(pending))
        }
        let mut new_state = *state;
        self.hand_off(&mut new_state);
        new_state.turn += 1;
        Ok(DoPlayResult {
            new_state,
            record: PlayRecord {
                side: state.side_to_play,
                action: Action::Pass,
                effects: PlayEffects::default()
            }
        })
    }

    /// Iterate over the legal plays of the piece on the given tile.
    pub fn iter_plays<'logic, 'state>(&'logic self, state: &'state GameState, tile: Tile)
        -> ValidPlayIterator<'logic, 'state> {
        ValidPlayIterator::new(self, state, tile)
    }

    /// All legal plays available to the side whose turn it is. While a jump is pending, only that
    /// piece's jumps are returned.
    pub fn legal_plays(&self, state: &GameState) -> Vec<ValidPlay> {
        match state.pending_jump {
            Some(tile) => self.iter_plays(state, tile).collect(),
            None => state.board.iter_occupied(state.side_to_play)
                .flat_map(|tile| self.iter_plays(state, tile))
                .collect()
        }
    }
}
