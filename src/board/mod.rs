/// Code for storing and updating the placement of pieces on the board.
pub mod state;

/// Code describing the shape of the board: bounds, playable squares and diagonal steps.
pub mod geometry;
