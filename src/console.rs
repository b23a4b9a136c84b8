//! Boundary traits for player input and table presentation.
//!
//! The engine never reads input or prints anything itself. A front end
//! implements [`Decider`] and [`Presenter`] and is handed to
//! [`Game::run`](crate::Game::run) or [`Round::play`](crate::game::Round::play).

use crate::game::RoundState;
use crate::hand::{Hand, Role};
use crate::result::{RoundOutcome, Scoreboard};

/// The human's choice during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stay,
}

/// A read-only snapshot of the table, handed to presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView<'a> {
    /// State of the round being shown.
    pub state: RoundState,
    /// The human's hand.
    pub human: &'a Hand,
    /// The dealer's hand.
    pub dealer: &'a Hand,
    /// Match scores.
    pub scores: Scoreboard,
    /// Cards left in the round's deck.
    pub cards_remaining: usize,
}

impl<'a> TableView<'a> {
    /// Creates a new view.
    #[must_use]
    pub const fn new(
        state: RoundState,
        human: &'a Hand,
        dealer: &'a Hand,
        scores: Scoreboard,
        cards_remaining: usize,
    ) -> Self {
        Self {
            state,
            human,
            dealer,
            scores,
            cards_remaining,
        }
    }

    /// Returns whether the dealer's second card should stay face down.
    ///
    /// The dealer's hand is only shown in full once the human's turn is over.
    #[must_use]
    pub const fn dealer_hole_hidden(&self) -> bool {
        matches!(self.state, RoundState::Dealing | RoundState::HumanTurn)
    }

    /// Returns the human's current total.
    #[must_use]
    pub fn human_total(&self) -> u16 {
        self.human.total()
    }

    /// Returns the dealer's current total.
    #[must_use]
    pub fn dealer_total(&self) -> u16 {
        self.dealer.total()
    }
}

/// Source of the human's decisions.
///
/// Implementations block until a valid answer is available and must
/// re-prompt on unrecognized input rather than pick a default.
pub trait Decider {
    /// Asks whether the human hits or stays.
    fn hit_or_stay(&mut self, view: &TableView<'_>) -> Decision;

    /// Asks whether to start another match once one has been decided.
    fn play_again(&mut self, scores: Scoreboard) -> bool;
}

/// Receiver of table updates.
pub trait Presenter {
    /// Called after every change to either hand, and when the dealer's
    /// turn begins.
    fn table_changed(&mut self, view: &TableView<'_>);

    /// Called once per round after the outcome is scored.
    fn round_over(&mut self, outcome: RoundOutcome, view: &TableView<'_>) {
        let _ = (outcome, view);
    }

    /// Called when a participant reaches the win threshold.
    fn match_over(&mut self, winner: Role, scores: Scoreboard) {
        let _ = (winner, scores);
    }
}

/// Everything a round or match needs from the outside world.
pub trait Console: Decider + Presenter {}

impl<T: Decider + Presenter + ?Sized> Console for T {}
