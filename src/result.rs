//! Round outcomes and match scores.

use crate::hand::{Hand, Role, TWENTY_ONE};

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Dealer busts, or the human has the higher total without busting.
    HumanWins,
    /// Human busts, or the dealer has the higher total without busting.
    DealerWins,
    /// Equal totals, neither side busted.
    Push,
}

impl RoundOutcome {
    /// Compares two final hands.
    #[must_use]
    pub fn from_hands(human: &Hand, dealer: &Hand) -> Self {
        let human_total = human.total();
        let dealer_total = dealer.total();
        Self::from_totals(
            human_total,
            human_total > TWENTY_ONE,
            dealer_total,
            dealer_total > TWENTY_ONE,
        )
    }

    /// Compares two totals with their bust flags.
    ///
    /// A busted dealer is checked first, so the human wins whenever the
    /// dealer busted. Rounds never reach this point with both sides busted:
    /// a human bust ends the round before the dealer plays.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::RoundOutcome;
    ///
    /// assert_eq!(RoundOutcome::from_totals(20, false, 19, false), RoundOutcome::HumanWins);
    /// assert_eq!(RoundOutcome::from_totals(23, true, 19, false), RoundOutcome::DealerWins);
    /// assert_eq!(RoundOutcome::from_totals(18, false, 18, false), RoundOutcome::Push);
    /// ```
    #[must_use]
    pub const fn from_totals(
        human_total: u16,
        human_busted: bool,
        dealer_total: u16,
        dealer_busted: bool,
    ) -> Self {
        if dealer_busted || (!human_busted && human_total > dealer_total) {
            Self::HumanWins
        } else if human_busted || (!dealer_busted && dealer_total > human_total) {
            Self::DealerWins
        } else {
            Self::Push
        }
    }

    /// Returns the side that won the round, or `None` for a push.
    #[must_use]
    pub const fn winner(self) -> Option<Role> {
        match self {
            Self::HumanWins => Some(Role::Human),
            Self::DealerWins => Some(Role::Dealer),
            Self::Push => None,
        }
    }
}

/// Round wins for both sides in the current match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Scoreboard {
    /// Rounds won by the human.
    pub human: u8,
    /// Rounds won by the dealer.
    pub dealer: u8,
}

impl Scoreboard {
    /// Returns the score for `role`.
    #[must_use]
    pub const fn get(&self, role: Role) -> u8 {
        match role {
            Role::Human => self.human,
            Role::Dealer => self.dealer,
        }
    }
}
