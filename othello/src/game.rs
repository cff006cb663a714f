//! Turn state machine: alternation, forced passes, terminal detection and
//! the append-only move log.

use std::fmt;

use crate::board::{Board, Player};
use crate::error::OthelloError;
use crate::rules;

/// A concrete placement or the pass sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Move {
    Place { row: usize, col: usize },
    Pass,
}

/// Coordinate notation: columns A-H, rows 1-8, e.g. (2, 3) prints as "D3".
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { row, col } => {
                write!(f, "{}{}", (b'A' + *col as u8) as char, row + 1)
            }
            Move::Pass => write!(f, "PASS"),
        }
    }
}

/// One entry of the move log. Forced passes are recorded too, so the turn
/// counter stays equal to the number of log entries.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveRecord {
    pub turn: usize,
    pub player: Player,
    pub mv: Move,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    ToMove(Player),
    Terminal,
}

/// A single game: board, turn counter and move log.
///
/// The driver only ever supplies placements. Forced passes are applied by
/// the state machine itself while computing the next mover, so whenever the
/// status is `ToMove(p)`, `p` is guaranteed to have at least one legal move.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    status: Status,
    turns: usize,
    log: Vec<MoveRecord>,
}

impl GameState {
    /// Start a new game from the standard initial position, Black to move.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            status: Status::ToMove(Player::Black),
            turns: 0,
            log: Vec::new(),
        }
    }

    /// Resume from an arbitrary position. Runs the same entry transition as
    /// regular play: if `to_move` has no legal move a pass is recorded, and
    /// if neither color can move the game is immediately terminal.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let mut state = GameState {
            board,
            status: Status::ToMove(to_move),
            turns: 0,
            log: Vec::new(),
        };
        state.settle(to_move);
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The color to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        match self.status {
            Status::ToMove(player) => Some(player),
            Status::Terminal => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status == Status::Terminal
    }

    /// Number of recorded turns, passes included.
    pub fn turn_count(&self) -> usize {
        self.turns
    }

    pub fn move_log(&self) -> &[MoveRecord] {
        &self.log
    }

    pub fn count_stones(&self, player: Player) -> usize {
        self.board.count_stones(player)
    }

    /// Legal moves for the current mover, empty when terminal.
    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        match self.status {
            Status::ToMove(player) => rules::legal_moves(&self.board, player),
            Status::Terminal => Vec::new(),
        }
    }

    /// Execute one turn for the current mover. Returns the number of stones
    /// flipped. A rejected move leaves board, counter and log unchanged.
    pub fn play(&mut self, mv: Move) -> Result<usize, OthelloError> {
        let mover = match self.status {
            Status::ToMove(player) => player,
            Status::Terminal => return Err(OthelloError::GameOver),
        };

        let (row, col) = match mv {
            Move::Place { row, col } => (row, col),
            // Forced passes are handled internally, so a mover always has a
            // legal move and an explicit pass is a contract violation.
            Move::Pass => return Err(OthelloError::IllegalPass),
        };

        let flipped = rules::apply_move(&mut self.board, mover, row, col)?;
        self.record(mover, mv);
        self.settle(mover.opponent());
        Ok(flipped)
    }

    /// The winner once terminal; `None` while running or on a draw.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_terminal() {
            return None;
        }

        let black = self.board.count_stones(Player::Black);
        let white = self.board.count_stones(Player::White);
        if black > white {
            Some(Player::Black)
        } else if white > black {
            Some(Player::White)
        } else {
            None
        }
    }

    fn record(&mut self, player: Player, mv: Move) {
        self.log.push(MoveRecord {
            turn: self.turns,
            player,
            mv,
        });
        self.turns += 1;
        debug_assert_eq!(self.turns, self.log.len());
    }

    /// Hand the turn to `next`, applying a forced pass or ending the game
    /// if the board allows no move.
    fn settle(&mut self, next: Player) {
        if rules::has_legal_move(&self.board, next) {
            self.status = Status::ToMove(next);
        } else if rules::has_legal_move(&self.board, next.opponent()) {
            self.record(next, Move::Pass);
            self.status = Status::ToMove(next.opponent());
        } else {
            self.status = Status::Terminal;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
