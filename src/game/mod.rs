pub mod logic;
pub mod state;

use crate::error::{InvalidPlay, ParseError, RuleViolation};
use crate::game::logic::GameLogic;
use crate::game::state::{GameState, Phase};
use crate::pieces::{Color, PlacedPiece};
use crate::play::{Play, PlayRecord, ValidPlay, ValidPlayIterator};
use crate::rules::Ruleset;
use crate::tiles::Tile;
use log::{debug, info, trace};
use std::fmt::{Debug, Formatter};

/// The current status of the game.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum GameStatus {
    /// Game is still ongoing.
    Ongoing,
    /// Game is over: the other side has no pieces left.
    Over { winner: Color }
}

/// The effects of a single play.
#[derive(Eq, PartialEq, Debug, Default, Clone, Copy, Hash)]
pub struct PlayEffects {
    /// Where the moving piece ended up. `None` for a pass.
    pub to: Option<Tile>,
    /// The piece captured by the play, if it was a jump.
    pub captured: Option<PlacedPiece>,
    /// Whether the moving piece was made a king by this play.
    pub promoted: bool,
    /// Whether the moving piece must now jump again.
    pub continuation: bool
}

/// What the caller learns from a successful play.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct PlayOutcome {
    /// The tile the piece now stands on.
    pub to: Tile,
    /// The tile of the captured piece, if the play was a jump.
    pub captured: Option<Tile>,
    /// Whether the piece was promoted to king by this play.
    pub promoted: bool,
    /// Whether the same piece must now jump again before the turn passes.
    pub continuation_pending: bool,
    /// The status of the game after the play.
    pub status: GameStatus
}

type GameEndedCallback = Box<dyn FnMut(Color)>;

/// A struct representing a single game, including all state needed to play. This struct also
/// keeps a record of every ply and of the game state after each one.
///
/// `Game` is driven through `&mut self` and does no internal synchronisation; a host that shares
/// a game between threads must serialise calls itself.
pub struct Game {
    pub logic: GameLogic,
    state: GameState,
    play_history: Vec<PlayRecord>,
    state_history: Vec<GameState>,
    on_game_ended: Option<GameEndedCallback>
}

impl Game {

    /// Create a new [`Game`] with the starting position of the given ruleset.
    pub fn new(ruleset: Ruleset) -> Self {
        let state = GameState::new(ruleset.starting_board(), ruleset.starting_side())
            .expect("Preset boards should be valid.");
        debug!("new {ruleset} game");
        Self::from_state(state)
    }

    /// Create a new [`Game`] from a custom starting position (see
    /// [`crate::board::state::Board::from_fen`]) with the given side to play first.
    pub fn with_board(starting_board: &str, side_to_play: Color) -> Result<Self, ParseError> {
        Ok(Self::from_state(GameState::new(starting_board, side_to_play)?))
    }

    fn from_state(state: GameState) -> Self {
        Self {
            logic: GameLogic::new(),
            state,
            play_history: vec![],
            state_history: vec![state],
            on_game_ended: None
        }
    }

    /// Register a function to be called, once, with the winner when the game ends. Replaces any
    /// previously registered function.
    pub fn on_game_ended(&mut self, callback: impl FnMut(Color) + 'static) {
        self.on_game_ended = Some(Box::new(callback));
    }

    /// The current state: board, side to play, pending jump and status.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The input the game is currently waiting for.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Every committed ply, oldest first.
    pub fn play_history(&self) -> &[PlayRecord] {
        &self.play_history
    }

    /// The starting state followed by the state after each committed ply.
    pub fn state_history(&self) -> &[GameState] {
        &self.state_history
    }

    /// Actually "do" a play: check validity, apply its effects to the board, promote, work out
    /// whether the piece must jump again, hand the turn over if not and check for the end of the
    /// game. On error nothing about the game changes.
    pub fn do_play(&mut self, play: Play) -> Result<PlayOutcome, InvalidPlay> {
        let result = self.logic.do_play(play, &self.state);
        let (state, record) = match result {
            Ok(result) => result.into(),
            Err(e) => {
                trace!("rejected {}: {}", play, e.violation);
                return Err(e)
            }
        };
        debug!("{} played {}", record.side, record);
        self.commit(state, record);
        Ok(PlayOutcome {
            to: record.effects.to.unwrap_or(play.from),
            captured: record.effects.captured.map(|c| c.tile),
            promoted: record.effects.promoted,
            continuation_pending: record.effects.continuation,
            status: self.state.status
        })
    }

    /// Cede the turn to the other side. This is always allowed unless a jump is pending or the game
    /// is over; it does not matter whether the passing side has a legal play.
    pub fn pass(&mut self) -> Result<GameStatus, RuleViolation> {
        let (state, record) = self.logic.do_pass(&self.state)
            .inspect_err(|e| trace!("rejected pass: {e}"))?
            .into();
        debug!("{} passed", record.side);
        self.commit(state, record);
        Ok(self.state.status)
    }

    fn commit(&mut self, state: GameState, record: PlayRecord) {
        let was_ongoing = self.state.status == GameStatus::Ongoing;
        self.state = state;
        self.state_history.push(state);
        self.play_history.push(record);
        if let (true, GameStatus::Over { winner }) = (was_ongoing, state.status) {
            info!("game over after {} plies, {} wins", state.turn, winner);
            if let Some(callback) = self.on_game_ended.as_mut() {
                callback(winner);
            }
        }
    }

    /// Iterate over the legal plays that can be made by the piece at the given tile. Yields
    /// nothing if the tile is empty or holds a piece that may not move now. Order of iteration is
    /// not guaranteed.
    pub fn iter_plays(&self, tile: Tile) -> ValidPlayIterator<'_, '_> {
        self.logic.iter_plays(&self.state, tile)
    }

    /// All legal plays available to the side whose turn it is.
    pub fn legal_plays(&self) -> Vec<ValidPlay> {
        self.logic.legal_plays(&self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Ruleset::Normal)
    }
}

impl Debug for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("plies", &self.play_history.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::RuleViolation::{GameOver, InvalidCoordinates, MustContinueForcedJump, NotYourTurn};
    use crate::game::state::Phase;
    use crate::game::{Game, GameStatus};
    use crate::pieces::Color::{Black, White};
    use crate::pieces::Piece;
    use crate::play::{Action, Play};
    use crate::rules::Ruleset;
    use crate::tiles::Direction::{Northeast, Northwest, Southeast};
    use crate::tiles::{Coords, Direction, Tile};
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;
    use std::str::FromStr;

    fn play(h: u8, v: u8, d: Direction) -> Play {
        Play::new(Tile::new(h, v), d)
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(Ruleset::Normal);
        assert_eq!(game.phase(), Phase::AwaitingMove(Black));
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.state_history().len(), 1);
        assert!(game.play_history().is_empty());
        assert_eq!(game.state().board.count_pieces(White), 12);
        let game = Game::new(Ruleset::Sparse);
        assert_eq!(game.state().board.count_pieces(Black), 8);
    }

    #[test]
    fn test_rejected_play_changes_nothing() {
        let mut game = Game::new(Ruleset::Normal);
        let before = *game.state();
        let err = game.do_play(play(1, 3, Southeast)).unwrap_err();
        assert_eq!(err.violation, NotYourTurn);
        assert_eq!(err.play, play(1, 3, Southeast));
        assert_eq!(*game.state(), before);
        assert_eq!(game.state_history().len(), 1);
        assert!(game.play_history().is_empty());
    }

    #[test]
    fn test_history() {
        let mut game = Game::new(Ruleset::Normal);
        let state_0 = *game.state();
        game.do_play(play(2, 6, Northeast)).unwrap();
        let state_1 = *game.state();
        assert_ne!(state_0, state_1);
        assert_eq!(game.pass(), Ok(GameStatus::Ongoing));
        let state_2 = *game.state();
        assert_eq!(state_2.board, state_1.board);
        assert_eq!(state_2.side_to_play, Black);
        assert_eq!(game.state_history(), &[state_0, state_1, state_2]);
        let actions: Vec<Action> = game.play_history().iter().map(|r| r.action).collect();
        assert_eq!(actions, vec![Action::Play(play(2, 6, Northeast)), Action::Pass]);
        assert_eq!(game.play_history()[1].side, White);
        assert_eq!(game.state().turn, 2);
    }

    #[test]
    fn test_game_ended_fires_once() {
        let winners = Rc::new(RefCell::new(vec![]));
        let mut game = Game::with_board("8/8/8/8/2w5/3b4/8/8", Black).unwrap();
        let sink = winners.clone();
        game.on_game_ended(move |winner| sink.borrow_mut().push(winner));

        let outcome = game.do_play(play(4, 6, Northwest)).unwrap();
        assert_eq!(outcome.captured, Some(Tile::new(3, 5)));
        assert_eq!(outcome.status, GameStatus::Over { winner: Black });
        assert_eq!(*winners.borrow(), vec![Black]);

        assert_eq!(game.do_play(play(2, 4, Northeast)).unwrap_err().violation, GameOver);
        assert_eq!(game.pass(), Err(GameOver));
        assert_eq!(*winners.borrow(), vec![Black]);
        assert_eq!(game.state_history().len(), 2);
    }

    #[test]
    fn test_pass_during_continuation() {
        let mut game = Game::with_board("8/8/8/1w6/8/3w4/4b3/8", Black).unwrap();
        let outcome = game.do_play(play(5, 7, Northwest)).unwrap();
        assert!(outcome.continuation_pending);
        assert_eq!(game.phase(), Phase::AwaitingContinuation(Black, Tile::new(3, 5)));
        assert_eq!(game.pass(), Err(MustContinueForcedJump(Tile::new(3, 5))));
        assert_eq!(game.phase(), Phase::AwaitingContinuation(Black, Tile::new(3, 5)));
    }

    #[test]
    fn test_pass_needs_no_reason() {
        // Black has a perfectly good move available and may still pass.
        let mut game = Game::new(Ruleset::Sparse);
        assert!(!game.legal_plays().is_empty());
        assert_eq!(game.pass(), Ok(GameStatus::Ongoing));
        assert_eq!(game.phase(), Phase::AwaitingMove(White));
    }

    #[test]
    fn test_far_off_board_origins_are_rejected() {
        let mut game = Game::new(Ruleset::Normal);
        let before = *game.state();

        let err = game.do_play(Play::from_str("A128 NW").unwrap()).unwrap_err();
        assert_eq!(err.violation, InvalidCoordinates);
        assert_eq!(err.destination, Coords::new(0, 127));

        let err = game.do_play(play(1, 127, Southeast)).unwrap_err();
        assert_eq!(err.violation, InvalidCoordinates);
        assert_eq!(err.destination, Coords::new(2, 128));

        let err = game.do_play(play(255, 255, Southeast)).unwrap_err();
        assert_eq!(err.destination, Coords::new(256, 256));

        let err = game.do_play(play(200, 2, Northwest)).unwrap_err();
        assert_eq!(err.to_string(), "unable to play (200, 2) NW: invalid coordinates");

        assert_eq!(*game.state(), before);
        assert_eq!(game.state_history().len(), 1);
    }

    #[test]
    fn test_iter_plays() {
        let game = Game::new(Ruleset::Normal);
        let plays: HashSet<Tile> = game.iter_plays(Tile::new(4, 6)).map(|vp| vp.to).collect();
        assert_eq!(plays, hashset!(Tile::new(3, 5), Tile::new(5, 5)));
        assert_eq!(game.iter_plays(Tile::new(4, 8)).count(), 0);
        assert_eq!(game.iter_plays(Tile::new(4, 4)).count(), 0);
        assert_eq!(game.legal_plays().len(), 7);
        assert!(game.legal_plays().iter().all(|vp| !vp.is_jump()));
    }

    #[test]
    fn test_promotion_outcome() {
        let mut game = Game::with_board("8/1b6/8/8/8/8/8/7w", Black).unwrap();
        let outcome = game.do_play(play(2, 2, Northeast)).unwrap();
        assert!(outcome.promoted);
        assert!(!outcome.continuation_pending);
        assert_eq!(outcome.to, Tile::new(3, 1));
        assert_eq!(game.state().board.get_piece(Tile::new(3, 1)), Some(Piece::king(Black)));
        assert_eq!(game.phase(), Phase::AwaitingMove(White));
    }
}
