//! Stateless rule engine: move legality, enumeration and stone flipping.
//!
//! All functions here operate on a [`Board`] passed in by the caller; none
//! of them keep state of their own. `apply_move` is the only mutation and
//! validates fully before touching the board.

use crate::board::{Board, Cell, Player, SIZE};
use crate::error::OthelloError;

/// The 8 ray directions scanned from a candidate cell.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Check if a move is legal for `player` at position (row, col).
///
/// A move is legal if the cell is empty and at least one direction holds a
/// contiguous run of opponent stones terminated by a same-color stone.
/// Out-of-range coordinates are simply not legal.
pub fn is_legal_move(board: &Board, player: Player, row: usize, col: usize) -> bool {
    if row >= SIZE || col >= SIZE {
        return false;
    }

    if board.at(row, col) != Cell::Empty {
        return false;
    }

    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| flips_in_direction(board, player, row, col, dr, dc) > 0)
}

/// Length of the opponent run that would flip in direction (dr, dc), or 0
/// if the run is not bounded by a same-color stone.
fn flips_in_direction(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    dr: i8,
    dc: i8,
) -> usize {
    let own = player.to_cell();
    let opponent = player.opponent().to_cell();

    let mut r = row as i8 + dr;
    let mut c = col as i8 + dc;
    let mut run = 0;

    while r >= 0 && r < SIZE as i8 && c >= 0 && c < SIZE as i8 {
        let cell = board.at(r as usize, c as usize);
        if cell == opponent {
            run += 1;
            r += dr;
            c += dc;
        } else if cell == own {
            return run;
        } else {
            return 0;
        }
    }

    // Ran off the board without a bounding stone
    0
}

/// Enumerate every legal move for `player` in row-major order.
///
/// Row-major order is part of the contract: strategies break ties by taking
/// the first enumerated move, so the order must be reproducible.
pub fn legal_moves(board: &Board, player: Player) -> Vec<(usize, usize)> {
    let mut moves = Vec::new();
    for row in 0..SIZE {
        for col in 0..SIZE {
            if is_legal_move(board, player, row, col) {
                moves.push((row, col));
            }
        }
    }
    moves
}

/// Whether `player` has at least one legal move.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    for row in 0..SIZE {
        for col in 0..SIZE {
            if is_legal_move(board, player, row, col) {
                return true;
            }
        }
    }
    false
}

/// Total number of opponent stones that placing at (row, col) would flip,
/// summed over all 8 directions. The same walk as `apply_move`, counting
/// instead of mutating.
pub fn count_flips(board: &Board, player: Player, row: usize, col: usize) -> usize {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| flips_in_direction(board, player, row, col, dr, dc))
        .sum()
}

/// Place a stone for `player` at (row, col) and flip every bounded opponent
/// run. Returns the number of stones flipped.
///
/// Calling this with an illegal move is a caller bug: it fails with
/// `InvalidMove` (or `OutOfRange`) and leaves the board untouched.
pub fn apply_move(
    board: &mut Board,
    player: Player,
    row: usize,
    col: usize,
) -> Result<usize, OthelloError> {
    if row >= SIZE || col >= SIZE {
        return Err(OthelloError::OutOfRange { row, col });
    }
    if !is_legal_move(board, player, row, col) {
        return Err(OthelloError::InvalidMove { row, col });
    }

    // Determine every direction's run length against the pre-flip board so
    // that flips in one direction cannot affect the scan of another.
    let runs: [usize; 8] = std::array::from_fn(|i| {
        let (dr, dc) = DIRECTIONS[i];
        flips_in_direction(board, player, row, col, dr, dc)
    });

    board.set(row, col, player.to_cell());

    let mut total_flipped = 0;
    for (i, &(dr, dc)) in DIRECTIONS.iter().enumerate() {
        let mut r = row as i8;
        let mut c = col as i8;
        for _ in 0..runs[i] {
            r += dr;
            c += dc;
            board.set(r as usize, c as usize, player.to_cell());
            total_flipped += 1;
        }
    }

    Ok(total_flipped)
}
