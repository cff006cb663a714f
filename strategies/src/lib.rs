//! Othello Move-Selection Strategies
//!
//! This crate contains the AI players that drive the core engine:
//! - `random`: uniform choice over the legal moves, seedable for tests
//! - `greedy`: maximizes immediate flips, first row-major move wins ties
//! - `positional`: fixed position-weight table, same tie-break rule
//! - `suggestion`: adapter that validates free-text move suggestions from
//!   an external source and falls back to the random strategy
//!
//! Every strategy implements [`Strategy`] and draws its candidates from the
//! engine's `legal_moves` enumeration, so it can never produce an illegal
//! placement.

pub mod greedy;
pub mod positional;
pub mod random;
pub mod suggestion;

pub use greedy::GreedyStrategy;
pub use positional::PositionalStrategy;
pub use random::RandomStrategy;
pub use suggestion::{SuggestedStrategy, SuggestionSource};

use othello::{Board, Move, Player};

/// A move-selection policy.
///
/// Implementations hold only immutable configuration (plus an RNG for the
/// random variant): the chosen move is a function of the board and color
/// they are handed each call.
pub trait Strategy {
    /// Display name for narration and score sheets.
    fn name(&self) -> &str;

    /// Pick a move for `player` on `board`. Returns [`Move::Pass`] when no
    /// legal move exists instead of failing.
    fn select_move(&mut self, board: &Board, player: Player) -> Move;
}
