//! Uniform-random strategy.
//!
//! Picks any legal move with equal probability. Useful as a baseline
//! opponent and as the fallback for the suggestion adapter. The RNG is a
//! seedable ChaCha8 stream so games can be replayed exactly in tests.

use othello::{rules, Board, Move, Player};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::Strategy;

pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Strategy with an entropy-derived seed.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Strategy with a fixed seed; same seed and same boards give the same
    /// move sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "Random"
    }

    fn select_move(&mut self, board: &Board, player: Player) -> Move {
        let moves = rules::legal_moves(board, player);
        match moves.choose(&mut self.rng) {
            Some(&(row, col)) => Move::Place { row, col },
            None => Move::Pass,
        }
    }
}
