//! Error types for deck, round and match operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    ///
    /// A round never needs more than a fraction of a deck, so this indicates a
    /// logic defect rather than a recoverable condition.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The operation is not valid in the round's current state.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// The deck ran out of cards.
    #[error("no cards left in the deck")]
    EmptyDeck(#[from] DeckError),
}

/// Errors that can occur while running a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A participant already reached the win threshold.
    #[error("the match is already over")]
    MatchOver,
    /// A rematch was requested before the match finished.
    #[error("the match is still in progress")]
    NotOver,
    /// The current round failed.
    #[error(transparent)]
    Round(#[from] RoundError),
}
