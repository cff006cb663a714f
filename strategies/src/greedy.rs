//! Greedy maximal-flip strategy.
//!
//! Evaluates every legal move by the number of opponent stones it would
//! flip and takes the maximum. Ties go to the first move in row-major
//! enumeration order, which makes the strategy fully deterministic.

use othello::{rules, Board, Move, Player};

use crate::Strategy;

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    pub fn new() -> Self {
        GreedyStrategy
    }
}

impl Strategy for GreedyStrategy {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn select_move(&mut self, board: &Board, player: Player) -> Move {
        let mut best: Option<(usize, usize)> = None;
        let mut best_flips = 0;

        for (row, col) in rules::legal_moves(board, player) {
            let flips = rules::count_flips(board, player, row, col);
            // Strictly greater, so the first row-major move wins ties.
            if flips > best_flips {
                best_flips = flips;
                best = Some((row, col));
            }
        }

        match best {
            Some((row, col)) => Move::Place { row, col },
            None => Move::Pass,
        }
    }
}
