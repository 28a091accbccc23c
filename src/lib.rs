//! This crate implements the rules of checkers (draughts) on an 8x8 board: simple moves, jumps,
//! forced multi-jump continuation, promotion to king and detection of the end of the game. It
//! includes structs and enums that encapsulate game data and logic, to help build game clients,
//! bots, etc. Apart from a small demo binary (behind the `demo` feature), it is not a goal of this
//! crate to provide a concrete game client.
//!
//! # Getting started
//!
//! As a starting point, you will likely want to use the following:
//!
//! - [`rules::Ruleset`]: Chooses the starting position (twelve or eight pieces per side).
//! - [`game::logic::GameLogic`]: Implements the logic required to assess the validity and outcome
//!   of a given play. It does not keep information about the current game state; its methods take
//!   a reference to that state and return the state that follows.
//! - [`game::state::GameState`]: Keeps track of everything that changes over the course of the
//!   game: the pieces on the board, which side is to play, any jump that must be continued and
//!   whether the game is over. It is `Copy` and makes no heap allocations.
//! - [`game::Game`]: Contains a `GameLogic` and a `GameState`, commits plays and passes, keeps the
//!   history of plays and states, and tells a registered callback when the game is won.
//!
//! # Coordinates
//!
//! A [`tiles::Tile`] is a `(h, v)` pair, each between 1 and 8. `h` counts columns from west to
//! east and `v` counts rows from north to south. Only tiles where `h + v` is even are played on.
//! Black starts at the south of the board and moves north; white moves south. Black plays first.
//!
//! # Board state
//!
//! [`board::state::Board`] holds an 8x8 grid of squares alongside a [`bitfield::Bitboard`] per
//! color, so pieces can be enumerated and counted without scanning the grid. Boards can be built
//! from strings (see [`preset::boards`] for the starting positions).

/// Miscellaneous utilities used elsewhere in the crate.
#[macro_use]
mod utils;

/// Code for choosing the variant of the game.
pub mod rules;

/// Code relating to game pieces.
pub mod pieces;

/// Errors used elsewhere in the crate.
pub mod error;

/// Code for implementing a game, including game logic and state.
pub mod game;

/// Code relating to board tiles, coordinates and directions.
pub mod tiles;

/// An implementation of a bitfield, used to index the pieces on the board.
pub mod bitfield;

/// Code relating to "plays" (ie, game moves).
pub mod play;

/// Pre-defined board positions.
pub mod preset;

/// Code relating to the board, including board state and geometry.
pub mod board;
