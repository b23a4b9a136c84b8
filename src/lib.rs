//! A Twenty-One (blackjack) match engine with optional `no_std` support.
//!
//! One human plays the dealer. The dealer hits below 16 and stands
//! otherwise, and the first side to win five rounds takes the match. The
//! crate provides a [`Game`] type that runs matches, a [`Round`](game::Round)
//! state machine for a single hand of play, and the [`Decider`] and
//! [`Presenter`] traits a front end implements to take part.
//!
//! # Example
//!
//! ```no_run
//! use twenty_one::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let game = Game::new(options, 42);
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::{Console, Decider, Decision, Presenter, TableView};
pub use deck::Deck;
pub use error::{DeckError, MatchError, RoundError};
pub use game::{DealerAction, DealerDecision, DealerPolicy, Game, MatchState, Round, RoundState};
pub use hand::{Hand, Participant, Role, TWENTY_ONE};
pub use options::{DEFAULT_DEALER_STANDS_AT, DEFAULT_WIN_THRESHOLD, GameOptions};
pub use result::{RoundOutcome, Scoreboard};
