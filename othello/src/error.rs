//! Error types for the core engine.

/// Errors surfaced by the rule engine and the turn state machine.
///
/// These are caller contract violations: the engine expects to be driven
/// only with moves drawn from `legal_moves`. None of them leave the board
/// or game state modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OthelloError {
    #[error("illegal move at ({row}, {col})")]
    InvalidMove { row: usize, col: usize },

    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfRange { row: usize, col: usize },

    #[error("a pass was supplied while legal moves exist")]
    IllegalPass,

    #[error("the game is already over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OthelloError::InvalidMove { row: 0, col: 0 };
        assert_eq!(err.to_string(), "illegal move at (0, 0)");

        let err = OthelloError::OutOfRange { row: 9, col: 2 };
        assert_eq!(err.to_string(), "coordinate (9, 2) is off the board");
    }
}
