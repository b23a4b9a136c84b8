//! Hands and the participants holding them.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total a hand can have without busting.
pub const TWENTY_ONE: u16 = 21;

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces = aces.saturating_add(1);
        }
        value = value.saturating_add(card.rank.value());
    }

    // Each ace still counted as 11 may drop to 1, one at a time.
    while value > TWENTY_ONE && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= TWENTY_ONE;
    (value, is_soft)
}

/// An ordered sequence of cards held by one participant.
///
/// The total is always recomputed from the current cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    ///
    /// Cards are accepted even once the hand is busted.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order they were received.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the best total for the hand.
    ///
    /// Aces count 11, and are downgraded to 1 one at a time while the total
    /// exceeds 21.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::{Card, Hand, Rank, Suit};
    ///
    /// let hand: Hand = [
    ///     Card::new(Rank::Ace, Suit::Hearts),
    ///     Card::new(Rank::Ace, Suit::Spades),
    ///     Card::new(Rank::Nine, Suit::Clubs),
    /// ]
    /// .into_iter()
    /// .collect();
    /// assert_eq!(hand.total(), 21);
    /// ```
    #[must_use]
    pub fn total(&self) -> u16 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the total exceeds 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total() > TWENTY_ONE
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Discards every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Which side of the table a participant plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The human player.
    Human,
    /// The dealer.
    Dealer,
}

impl Role {
    /// Returns the other side of the table.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Dealer,
            Self::Dealer => Self::Human,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => f.write_str("Player"),
            Self::Dealer => f.write_str("Dealer"),
        }
    }
}

/// A seat at the table: a role, the current hand and the match score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    role: Role,
    hand: Hand,
    score: u8,
}

impl Participant {
    /// Creates a participant with an empty hand and no wins.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            hand: Hand::new(),
            score: 0,
        }
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the participant's current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the number of rounds won in the current match.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    pub(crate) const fn add_win(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    pub(crate) const fn reset_score(&mut self) {
        self.score = 0;
    }
}
