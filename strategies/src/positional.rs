//! Positional-weight strategy.
//!
//! Scores each legal move by a fixed 8x8 weight table: corners are prized,
//! the cells next to a corner are poison, edges are mildly good. The table
//! is symmetric under the board's rotations and reflections. Ties go to the
//! first move in row-major enumeration order, same as the greedy strategy.

use othello::{rules, Board, Move, Player, SIZE};

use crate::Strategy;

/// Position weights (corners > edges > center).
const WEIGHTS: [[i32; SIZE]; SIZE] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, 5, 1, 1, 5, -2, 10],
    [5, -2, 1, 1, 1, 1, -2, 5],
    [5, -2, 1, 1, 1, 1, -2, 5],
    [10, -2, 5, 1, 1, 5, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalStrategy;

impl PositionalStrategy {
    pub fn new() -> Self {
        PositionalStrategy
    }
}

impl Strategy for PositionalStrategy {
    fn name(&self) -> &str {
        "Positional"
    }

    fn select_move(&mut self, board: &Board, player: Player) -> Move {
        let mut best: Option<(usize, usize)> = None;
        let mut best_weight = i32::MIN;

        for (row, col) in rules::legal_moves(board, player) {
            let weight = WEIGHTS[row][col];
            // Strictly greater, so the first row-major move wins ties.
            if weight > best_weight {
                best_weight = weight;
                best = Some((row, col));
            }
        }

        match best {
            Some((row, col)) => Move::Place { row, col },
            None => Move::Pass,
        }
    }
}
