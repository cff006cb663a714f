//! Adapter for external move-suggestion sources.
//!
//! A [`SuggestionSource`] is anything that can look at a textual board
//! rendering and reply with free text, e.g. a text-generation backend.
//! This is the only place unstructured input enters the engine, so the
//! reply is validated strictly: the first `[A-H][1-8]` token is extracted
//! and checked against the legal-move list, and anything else falls back to
//! a uniform-random choice. The engine's `apply_move` is never fed an
//! unvalidated coordinate.

use othello::{rules, Board, Move, Player};

use crate::{RandomStrategy, Strategy};

/// Source of untrusted move suggestions.
pub trait SuggestionSource {
    /// Produce a reply for the given prompt, or `None` if the source is
    /// unavailable. Retrying is the caller's business, not the adapter's.
    fn suggest(&mut self, prompt: &str) -> Option<String>;
}

impl<F> SuggestionSource for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn suggest(&mut self, prompt: &str) -> Option<String> {
        self(prompt)
    }
}

/// Strategy backed by a [`SuggestionSource`] with a random fallback.
pub struct SuggestedStrategy<S> {
    name: String,
    source: S,
    fallback: RandomStrategy,
}

impl<S: SuggestionSource> SuggestedStrategy<S> {
    pub fn new(name: impl Into<String>, source: S) -> Self {
        Self {
            name: name.into(),
            source,
            fallback: RandomStrategy::new(),
        }
    }

    /// Adapter whose fallback RNG is seeded, for reproducible games.
    pub fn seeded(name: impl Into<String>, source: S, seed: u64) -> Self {
        Self {
            name: name.into(),
            source,
            fallback: RandomStrategy::seeded(seed),
        }
    }

    fn prompt(board: &Board, player: Player) -> String {
        let color = match player {
            Player::Black => "Black (B)",
            Player::White => "White (W)",
        };
        format!(
            "You are playing Othello as {color}.\n\n\
             Current board state:\n{board}\n\
             Choose your next move. Return ONLY the move in a format like \
             \"D3\", or \"PASS\" if you cannot move.\n\nYour move:"
        )
    }
}

/// Extract the first coordinate token (`[A-H][1-8]`) or pass keyword from a
/// free-text reply. Returns `None` when no token is found.
pub fn parse_reply(reply: &str) -> Option<Move> {
    let reply = reply.to_ascii_uppercase();
    if reply.contains("PASS") {
        return Some(Move::Pass);
    }

    for pair in reply.as_bytes().windows(2) {
        if (b'A'..=b'H').contains(&pair[0]) && (b'1'..=b'8').contains(&pair[1]) {
            return Some(Move::Place {
                row: (pair[1] - b'1') as usize,
                col: (pair[0] - b'A') as usize,
            });
        }
    }

    None
}

impl<S: SuggestionSource> Strategy for SuggestedStrategy<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, board: &Board, player: Player) -> Move {
        let legal = rules::legal_moves(board, player);
        if legal.is_empty() {
            return Move::Pass;
        }

        if let Some(reply) = self.source.suggest(&Self::prompt(board, player)) {
            if let Some(Move::Place { row, col }) = parse_reply(&reply) {
                if legal.contains(&(row, col)) {
                    return Move::Place { row, col };
                }
            }
            // A pass reply while moves exist is treated like any other
            // invalid suggestion.
        }

        self.fallback.select_move(board, player)
    }
}
