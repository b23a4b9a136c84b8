//! Round and match state types.

use crate::hand::Role;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Initial cards have not been dealt yet.
    Dealing,
    /// Waiting for the human to hit or stay.
    HumanTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Outcome is decided.
    Resolved,
}

/// Match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchState {
    /// Neither participant has reached the win threshold.
    InProgress,
    /// A participant reached the win threshold.
    Over {
        /// The participant who reached it.
        winner: Role,
    },
}
