//! Core types and game logic for Othello (Reversi)
//!
//! The crate splits into three layers:
//! - [`board`]: the 8x8 grid and its cell/player types, pure storage.
//! - [`rules`]: stateless legality checks, move enumeration and flipping.
//! - [`game`]: the turn state machine with forced passes and the move log.

pub mod board;
pub mod error;
pub mod game;
pub mod rules;

pub use board::{Board, Cell, Player, SIZE};
pub use error::OthelloError;
pub use game::{GameState, Move, MoveRecord, Status};
