//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A single deck of cards, consumed by drawing.
///
/// The top of the deck is the end of the internal vector. A deck is never
/// refilled: each round gets a freshly built one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck shuffled with `rng`.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use twenty_one::{DECK_SIZE, Deck};
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::new(&mut rng);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::ordered_cards();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck that yields `draws` in order, first element first.
    ///
    /// Useful for replaying a known deal.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    fn ordered_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
