use crate::card::Card;
use crate::hand::Hand;
use crate::options::DEFAULT_DEALER_STANDS_AT;

/// What the dealer policy asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DealerDecision {
    /// Draw a card.
    Hit,
    /// Stop drawing.
    Stand,
}

/// What the dealer actually did on one step of their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DealerAction {
    /// The dealer drew this card.
    Hit(Card),
    /// The dealer stopped without drawing.
    Stand,
}

/// The dealer's fixed drawing rule: hit below a threshold, stand otherwise.
///
/// The rule only looks at the dealer's own total. With the default threshold
/// of 16 the dealer hits on 15 and stands on 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealerPolicy {
    stands_at: u16,
}

impl DealerPolicy {
    /// Creates a policy that stands once the total reaches `stands_at`.
    #[must_use]
    pub const fn new(stands_at: u16) -> Self {
        Self { stands_at }
    }

    /// Returns the total at which the dealer stands.
    #[must_use]
    pub const fn stands_at(&self) -> u16 {
        self.stands_at
    }

    /// Decides from a dealer total.
    #[must_use]
    pub const fn decide_total(&self, total: u16) -> DealerDecision {
        if total < self.stands_at {
            DealerDecision::Hit
        } else {
            DealerDecision::Stand
        }
    }

    /// Decides from the dealer's hand.
    #[must_use]
    pub fn decide(&self, hand: &Hand) -> DealerDecision {
        self.decide_total(hand.total())
    }
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DEALER_STANDS_AT)
    }
}
