extern crate alloc;

use alloc::vec::Vec;

use log::{debug, info};

use crate::card::Card;
use crate::console::{Console, Decision, TableView};
use crate::deck::Deck;
use crate::error::{DeckError, RoundError};
use crate::hand::Hand;
use crate::result::{RoundOutcome, Scoreboard};

use super::dealer::{DealerAction, DealerDecision, DealerPolicy};
use super::state::RoundState;

/// Cards needed for the initial deal.
const INITIAL_DEAL: usize = 4;

/// One hand of play, from the initial deal to a decided outcome.
///
/// A round moves through [`RoundState::Dealing`], [`RoundState::HumanTurn`],
/// [`RoundState::DealerTurn`] and [`RoundState::Resolved`]. A human bust
/// skips the dealer's turn. Calling an operation in the wrong state returns
/// [`RoundError::InvalidState`] and leaves the round untouched.
///
/// The round owns its deck and borrows both hands, which it clears on
/// creation.
#[derive(Debug)]
pub struct Round<'a> {
    deck: Deck,
    human: &'a mut Hand,
    dealer: &'a mut Hand,
    policy: DealerPolicy,
    state: RoundState,
    outcome: Option<RoundOutcome>,
}

impl<'a> Round<'a> {
    /// Creates a round ready to deal from `deck`.
    #[must_use]
    pub fn new(
        deck: Deck,
        human: &'a mut Hand,
        dealer: &'a mut Hand,
        policy: DealerPolicy,
    ) -> Self {
        human.clear();
        dealer.clear();
        Self {
            deck,
            human,
            dealer,
            policy,
            state: RoundState::Dealing,
            outcome: None,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the outcome once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Returns the human's hand.
    #[must_use]
    pub fn human(&self) -> &Hand {
        self.human
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub fn dealer(&self) -> &Hand {
        self.dealer
    }

    /// Returns the number of cards left in this round's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns a snapshot of the table for presentation.
    #[must_use]
    pub fn view(&self, scores: Scoreboard) -> TableView<'_> {
        TableView::new(
            self.state,
            self.human,
            self.dealer,
            scores,
            self.deck.len(),
        )
    }

    fn ensure_state(&self, expected: RoundState) -> Result<(), RoundError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }

    fn resolve(&mut self, outcome: RoundOutcome) {
        info!(
            "round resolved: {outcome:?} (human {}, dealer {})",
            self.human.total(),
            self.dealer.total()
        );
        self.outcome = Some(outcome);
        self.state = RoundState::Resolved;
    }

    /// Deals two cards each, alternating human and dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealing state or the deck holds
    /// fewer than four cards.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        self.ensure_state(RoundState::Dealing)?;
        if self.deck.len() < INITIAL_DEAL {
            return Err(DeckError::Empty.into());
        }

        for _ in 0..2 {
            let card = self.deck.draw()?;
            debug!("dealt {card} to human");
            self.human.add_card(card);

            let card = self.deck.draw()?;
            debug!("dealt {card} to dealer");
            self.dealer.add_card(card);
        }

        self.state = RoundState::HumanTurn;
        Ok(())
    }

    /// Human action: Hit (draw a card).
    ///
    /// A bust resolves the round as [`RoundOutcome::DealerWins`] immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the human's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.ensure_state(RoundState::HumanTurn)?;

        let card = self.deck.draw()?;
        debug!("human hits: {card}");
        self.human.add_card(card);

        if self.human.is_busted() {
            self.resolve(RoundOutcome::DealerWins);
        }

        Ok(card)
    }

    /// Human action: Stay (hand the turn to the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the human's turn.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_state(RoundState::HumanTurn)?;
        debug!("human stays on {}", self.human.total());
        self.state = RoundState::DealerTurn;
        Ok(())
    }

    /// Plays one step of the dealer's turn.
    ///
    /// The round resolves as soon as the dealer stands or busts, so a hit
    /// that leaves the dealer at or above the threshold also ends the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty.
    pub fn dealer_step(&mut self) -> Result<DealerAction, RoundError> {
        self.ensure_state(RoundState::DealerTurn)?;

        match self.policy.decide(self.dealer) {
            DealerDecision::Stand => {
                debug!("dealer stands on {}", self.dealer.total());
                self.resolve_by_comparison();
                Ok(DealerAction::Stand)
            }
            DealerDecision::Hit => {
                let card = self.deck.draw()?;
                debug!("dealer hits: {card}");
                self.dealer.add_card(card);

                if self.dealer.is_busted()
                    || self.policy.decide(self.dealer) == DealerDecision::Stand
                {
                    self.resolve_by_comparison();
                }
                Ok(DealerAction::Hit(card))
            }
        }
    }

    /// Plays the dealer's whole turn.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        self.ensure_state(RoundState::DealerTurn)?;

        let mut drawn = Vec::new();
        while self.state == RoundState::DealerTurn {
            if let DealerAction::Hit(card) = self.dealer_step()? {
                drawn.push(card);
            }
        }
        Ok(drawn)
    }

    fn resolve_by_comparison(&mut self) {
        let outcome = RoundOutcome::from_hands(self.human, self.dealer);
        self.resolve(outcome);
    }

    /// Plays the round to completion through `console`.
    ///
    /// The presenter sees the table after the deal, after every card drawn,
    /// and when the dealer's turn begins. `scores` is only passed through to
    /// presentation.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out.
    pub fn play<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        scores: Scoreboard,
    ) -> Result<RoundOutcome, RoundError> {
        loop {
            match self.state {
                RoundState::Dealing => {
                    self.deal()?;
                    console.table_changed(&self.view(scores));
                }
                RoundState::HumanTurn => match console.hit_or_stay(&self.view(scores)) {
                    Decision::Hit => {
                        self.hit()?;
                        console.table_changed(&self.view(scores));
                    }
                    Decision::Stay => {
                        self.stand()?;
                        console.table_changed(&self.view(scores));
                    }
                },
                RoundState::DealerTurn => {
                    if let DealerAction::Hit(_) = self.dealer_step()? {
                        console.table_changed(&self.view(scores));
                    }
                }
                RoundState::Resolved => return self.outcome.ok_or(RoundError::InvalidState),
            }
        }
    }
}
