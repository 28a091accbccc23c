use crate::board::state::Board;
use crate::error::ParseError;
use crate::game::GameStatus;
use crate::game::GameStatus::Ongoing;
use crate::pieces::Color;
use crate::tiles::Tile;

/// Which input the game is waiting for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The given side may move any of its pieces, or pass.
    AwaitingMove(Color),
    /// The given side has just jumped with the piece on the given tile, and that piece must jump
    /// again.
    AwaitingContinuation(Color, Tile)
}

/// This struct contains all state that can be used to evaluate plays and that changes over the
/// course of a game. It is small and `Copy`, so that the game logic can build the state that
/// follows a play without touching the current one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Board state, ie, the current pieces on the board.
    pub board: Board,
    /// The side whose turn it is.
    pub side_to_play: Color,
    /// If set, the piece on this tile is part-way through a multi-jump and is the only piece
    /// that may move, and only by jumping.
    pub pending_jump: Option<Tile>,
    /// Current status of the game.
    pub status: GameStatus,
    /// Number of plies (plays and passes) that have been committed.
    pub turn: usize
}

impl GameState {

    /// Create a state from a board string (see [`Board::from_fen`]) with the given side to play.
    pub fn new(fen_str: &str, side_to_play: Color) -> Result<Self, ParseError> {
        Ok(Self::from_board(Board::from_fen(fen_str)?, side_to_play))
    }

    pub fn from_board(board: Board, side_to_play: Color) -> Self {
        Self {
            board,
            side_to_play,
            pending_jump: None,
            status: Ongoing,
            turn: 0
        }
    }

    /// The input the game is currently waiting for.
    pub fn phase(&self) -> Phase {
        match self.pending_jump {
            Some(tile) => Phase::AwaitingContinuation(self.side_to_play, tile),
            None => Phase::AwaitingMove(self.side_to_play)
        }
    }

    /// Whether it is black's turn to move.
    pub fn is_black_turn(&self) -> bool {
        self.side_to_play == Color::Black
    }
}
