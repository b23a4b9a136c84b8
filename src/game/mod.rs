//! Round and match engine.

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::console::{Console, TableView};
use crate::deck::Deck;
use crate::error::MatchError;
use crate::hand::{Participant, Role};
use crate::options::GameOptions;
use crate::result::{RoundOutcome, Scoreboard};

mod dealer;
mod round;
pub mod state;

pub use dealer::{DealerAction, DealerDecision, DealerPolicy};
pub use round::Round;
pub use state::{MatchState, RoundState};

/// A Twenty-One match between one human and the dealer.
///
/// The game owns both participants, their scores and the random number
/// generator that shuffles a fresh deck for every round. Rounds are played
/// until one side reaches [`GameOptions::win_threshold`] wins.
#[derive(Debug)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    human: Participant,
    dealer: Participant,
    state: MatchState,
    rounds_played: u32,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::{Game, GameOptions, MatchState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), MatchState::InProgress);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            human: Participant::new(Role::Human),
            dealer: Participant::new(Role::Dealer),
            state: MatchState::InProgress,
            rounds_played: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current match state.
    #[must_use]
    pub const fn state(&self) -> MatchState {
        self.state
    }

    /// Returns both scores.
    #[must_use]
    pub const fn scores(&self) -> Scoreboard {
        Scoreboard {
            human: self.human.score(),
            dealer: self.dealer.score(),
        }
    }

    /// Returns the human participant.
    #[must_use]
    pub const fn human(&self) -> &Participant {
        &self.human
    }

    /// Returns the dealer participant.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the number of rounds recorded in the current match.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    fn ensure_in_progress(&self) -> Result<(), MatchError> {
        match self.state {
            MatchState::InProgress => Ok(()),
            MatchState::Over { .. } => Err(MatchError::MatchOver),
        }
    }

    /// Plays one round with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is already over or the round fails.
    pub fn play_round<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<RoundOutcome, MatchError> {
        self.ensure_in_progress()?;
        let deck = Deck::new(&mut self.rng);
        self.play_round_with_deck(deck, console)
    }

    /// Plays one round dealt from `deck`, scores it and reports it.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is already over or the round fails.
    pub fn play_round_with_deck<C: Console + ?Sized>(
        &mut self,
        deck: Deck,
        console: &mut C,
    ) -> Result<RoundOutcome, MatchError> {
        self.ensure_in_progress()?;

        let scores = self.scores();
        let policy = self.options.dealer_policy();
        let (outcome, cards_remaining) = {
            let mut round = Round::new(
                deck,
                self.human.hand_mut(),
                self.dealer.hand_mut(),
                policy,
            );
            let outcome = round.play(console, scores)?;
            (outcome, round.cards_remaining())
        };

        self.record_outcome(outcome)?;

        let view = TableView::new(
            RoundState::Resolved,
            self.human.hand(),
            self.dealer.hand(),
            self.scores(),
            cards_remaining,
        );
        console.round_over(outcome, &view);

        Ok(outcome)
    }

    /// Scores a round outcome and checks the win threshold.
    ///
    /// Returns the match state after scoring.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is already over.
    pub fn record_outcome(&mut self, outcome: RoundOutcome) -> Result<MatchState, MatchError> {
        self.ensure_in_progress()?;

        self.rounds_played += 1;
        match outcome.winner() {
            Some(Role::Human) => self.human.add_win(),
            Some(Role::Dealer) => self.dealer.add_win(),
            None => {}
        }

        let threshold = self.options.win_threshold;
        let winner = [&self.human, &self.dealer]
            .into_iter()
            .find(|participant| participant.score() >= threshold)
            .map(Participant::role);

        if let Some(winner) = winner {
            let scores = self.scores();
            info!(
                "match won by {winner} ({}-{}) after {} rounds",
                scores.human, scores.dealer, self.rounds_played
            );
            self.state = MatchState::Over { winner };
        }

        Ok(self.state)
    }

    /// Plays rounds until one side reaches the win threshold.
    ///
    /// Returns the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is already over or a round fails.
    pub fn play_match<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<Role, MatchError> {
        self.ensure_in_progress()?;

        loop {
            self.play_round(console)?;
            if let MatchState::Over { winner } = self.state {
                console.match_over(winner, self.scores());
                return Ok(winner);
            }
        }
    }

    /// Resets both scores to zero and starts a new match.
    ///
    /// # Errors
    ///
    /// Returns an error if the current match is still in progress.
    pub fn rematch(&mut self) -> Result<(), MatchError> {
        if self.state == MatchState::InProgress {
            return Err(MatchError::NotOver);
        }

        self.human.reset_score();
        self.dealer.reset_score();
        self.rounds_played = 0;
        self.state = MatchState::InProgress;
        info!("new match started");
        Ok(())
    }

    /// Plays matches until the decider declines another one.
    ///
    /// # Errors
    ///
    /// Returns an error if the current match is already over or a round fails.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), MatchError> {
        loop {
            self.play_match(console)?;
            if !console.play_again(self.scores()) {
                return Ok(());
            }
            self.rematch()?;
        }
    }
}
