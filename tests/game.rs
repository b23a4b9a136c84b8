//! Round and match integration tests.

extern crate alloc;

use alloc::collections::VecDeque;

use twenty_one::{
    Card, DECK_SIZE, DealerAction, DealerPolicy, Decider, Decision, Deck, Game, GameOptions, Hand, MatchError,
    MatchState, Presenter, Rank, Role, Round, RoundError, RoundOutcome, RoundState, Scoreboard,
    Suit, TableView,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Console that answers from a script and records what it was shown.
#[derive(Default)]
struct Script {
    decisions: VecDeque<Decision>,
    play_again: VecDeque<bool>,
    tables_seen: usize,
    remaining_after_deal: Vec<usize>,
    hole_hidden_when_asked: Vec<bool>,
    outcomes: Vec<RoundOutcome>,
    round_scores: Vec<Scoreboard>,
    matches: Vec<(Role, Scoreboard)>,
}

impl Script {
    fn with_decisions(decisions: &[Decision]) -> Self {
        Self {
            decisions: decisions.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Decider for Script {
    fn hit_or_stay(&mut self, view: &TableView<'_>) -> Decision {
        self.hole_hidden_when_asked.push(view.dealer_hole_hidden());
        self.decisions.pop_front().unwrap_or(Decision::Stay)
    }

    fn play_again(&mut self, _scores: Scoreboard) -> bool {
        self.play_again.pop_front().unwrap_or(false)
    }
}

impl Presenter for Script {
    fn table_changed(&mut self, view: &TableView<'_>) {
        self.tables_seen += 1;
        if view.state == RoundState::HumanTurn && view.human.len() == 2 {
            self.remaining_after_deal.push(view.cards_remaining);
        }
    }

    fn round_over(&mut self, outcome: RoundOutcome, view: &TableView<'_>) {
        assert_eq!(view.state, RoundState::Resolved);
        self.outcomes.push(outcome);
        self.round_scores.push(view.scores);
    }

    fn match_over(&mut self, winner: Role, scores: Scoreboard) {
        self.matches.push((winner, scores));
    }
}

/// Human 10 and 9 against dealer 10 and 5; the dealer's next card is a 6.
fn dealer_reaches_21() -> Deck {
    Deck::stacked(&[
        card(Rank::Ten, Suit::Hearts), // human
        card(Rank::Ten, Suit::Clubs), // dealer
        card(Rank::Nine, Suit::Spades), // human
        card(Rank::Five, Suit::Diamonds), // dealer
        card(Rank::Six, Suit::Hearts), // dealer draw
    ])
}

/// Human 10 and 9 against dealer 10 and 7: the dealer stands and loses.
fn human_wins_on_stay() -> Deck {
    Deck::stacked(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Seven, Suit::Diamonds),
    ])
}

#[test]
fn deal_alternates_human_and_dealer() {
    let mut human = Hand::new();
    let mut dealer = Hand::new();
    let mut round = Round::new(
        dealer_reaches_21(),
        &mut human,
        &mut dealer,
        DealerPolicy::default(),
    );

    assert_eq!(round.state(), RoundState::Dealing);
    round.deal().unwrap();
    assert_eq!(round.state(), RoundState::HumanTurn);
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(
        round.human().cards(),
        &[card(Rank::Ten, Suit::Hearts), card(Rank::Nine, Suit::Spades)]
    );
    assert_eq!(
        round.dealer().cards(),
        &[card(Rank::Ten, Suit::Clubs), card(Rank::Five, Suit::Diamonds)]
    );
}

#[test]
fn new_round_clears_previous_hands() {
    let mut human: Hand = [card(Rank::King, Suit::Hearts)].into_iter().collect();
    let mut dealer: Hand = [card(Rank::Queen, Suit::Clubs)].into_iter().collect();

    let round = Round::new(
        human_wins_on_stay(),
        &mut human,
        &mut dealer,
        DealerPolicy::default(),
    );
    assert!(round.human().is_empty());
    assert!(round.dealer().is_empty());
}

#[test]
fn dealer_hits_to_21_and_wins() {
    let mut human = Hand::new();
    let mut dealer = Hand::new();
    let mut round = Round::new(
        dealer_reaches_21(),
        &mut human,
        &mut dealer,
        DealerPolicy::default(),
    );

    round.deal().unwrap();
    round.stand().unwrap();
    assert_eq!(round.state(), RoundState::DealerTurn);

    let drawn = round.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Rank::Six, Suit::Hearts)]);
    assert_eq!(round.dealer().total(), 21);
    assert_eq!(round.state(), RoundState::Resolved);
    assert_eq!(round.outcome(), Some(RoundOutcome::DealerWins));
}

#[test]
fn dealer_stands_on_16() {
    let mut human = Hand::new();
    let mut dealer = Hand::new();
    let deck = Deck::stacked(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Five, Suit::Hearts),
    ]);
    let mut round = Round::new(deck, &mut human, &mut dealer, DealerPolicy::default());

    round.deal().unwrap();
    round.stand().unwrap();
    assert_eq!(round.dealer_step().unwrap(), DealerAction::Stand);
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(round.outcome(), Some(RoundOutcome::HumanWins));
}

#[test]
fn human_bust_skips_dealer_turn() {
    let mut human = Hand::new();
    let mut dealer = Hand::new();
    let deck = Deck::stacked(&[
        card(Rank::Ten, Suit::Hearts), // human
        card(Rank::Ten, Suit::Clubs), // dealer
        card(Rank::Eight, Suit::Spades), // human
        card(Rank::Four, Suit::Diamonds), // dealer (14, would hit)
        card(Rank::Five, Suit::Hearts), // human hit
        card(Rank::Two, Suit::Clubs), // never drawn
    ]);
    let mut round = Round::new(deck, &mut human, &mut dealer, DealerPolicy::default());

    round.deal().unwrap();
    let drawn = round.hit().unwrap();
    assert_eq!(drawn, card(Rank::Five, Suit::Hearts));
    assert_eq!(round.human().total(), 23);
    assert_eq!(round.state(), RoundState::Resolved);
    assert_eq!(round.outcome(), Some(RoundOutcome::DealerWins));
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(round.cards_remaining(), 1);

    assert_eq!(round.dealer_step().unwrap_err(), RoundError::InvalidState);
    assert_eq!(round.stand().unwrap_err(), RoundError::InvalidState);
}

#[test]
fn dealer_bust_stops_drawing() {
    let mut human = Hand::new();
    let mut dealer = Hand::new();
    let deck = Deck::stacked(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Spades),
        card(Rank::Five, Suit::Diamonds),
        card(Rank::King, Suit::Hearts), // dealer busts on 25
        card(Rank::Two, Suit::Clubs),
    ]);
    let mut round = Round::new(deck, &mut human, &mut dealer, DealerPolicy::default());

    round.deal().unwrap();
    round.stand().unwrap();
    assert_eq!(
        round.dealer_step().unwrap(),
        DealerAction::Hit(card(Rank::King, Suit::Hearts))
    );
    assert!(round.dealer().is_busted());
    assert_eq!(round.state(), RoundState::Resolved);
    assert_eq!(round.outcome(), Some(RoundOutcome::HumanWins));
    assert_eq!(round.cards_remaining(), 1);
}

#[test]
fn dealer_keeps_drawing_below_threshold() {
    let mut human = Hand::new();
    let mut dealer = Hand::new();
    let deck = Deck::stacked(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Eight, Suit::Spades),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Four, Suit::Hearts), // 9
        card(Rank::Ace, Suit::Spades), // 20
        card(Rank::Two, Suit::Diamonds), // never drawn
    ]);
    let mut round = Round::new(deck, &mut human, &mut dealer, DealerPolicy::default());

    round.deal().unwrap();
    round.stand().unwrap();
    let drawn = round.dealer_play().unwrap();
    assert_eq!(drawn.len(), 2);
    assert_eq!(round.dealer().total(), 20);
    assert_eq!(round.outcome(), Some(RoundOutcome::DealerWins));
}

#[test]
fn equal_totals_push() {
    let mut human = Hand::new();
    let mut dealer = Hand::new();
    let deck = Deck::stacked(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Eight, Suit::Spades),
        card(Rank::Eight, Suit::Diamonds),
    ]);
    let mut round = Round::new(deck, &mut human, &mut dealer, DealerPolicy::default());

    round.deal().unwrap();
    round.stand().unwrap();
    assert!(round.dealer_play().unwrap().is_empty());
    assert_eq!(round.outcome(), Some(RoundOutcome::Push));
}

#[test]
fn operations_rejected_out_of_order() {
    let mut human = Hand::new();
    let mut dealer = Hand::new();
    let mut round = Round::new(
        human_wins_on_stay(),
        &mut human,
        &mut dealer,
        DealerPolicy::default(),
    );

    assert_eq!(round.hit().unwrap_err(), RoundError::InvalidState);
    assert_eq!(round.stand().unwrap_err(), RoundError::InvalidState);
    assert_eq!(round.dealer_step().unwrap_err(), RoundError::InvalidState);
    assert_eq!(round.state(), RoundState::Dealing);

    round.deal().unwrap();
    assert_eq!(round.deal().unwrap_err(), RoundError::InvalidState);
    assert_eq!(round.dealer_play().unwrap_err(), RoundError::InvalidState);
    assert_eq!(round.state(), RoundState::HumanTurn);
}

#[test]
fn short_deck_fails_before_dealing() {
    let mut human = Hand::new();
    let mut dealer = Hand::new();
    let deck = Deck::stacked(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Nine, Suit::Spades),
    ]);
    let mut round = Round::new(deck, &mut human, &mut dealer, DealerPolicy::default());

    assert!(matches!(round.deal(), Err(RoundError::EmptyDeck(_))));
    assert_eq!(round.state(), RoundState::Dealing);
    assert!(round.human().is_empty());
    assert_eq!(round.cards_remaining(), 3);
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let mut human = Hand::new();
    let mut dealer = Hand::new();
    let mut round = Round::new(
        human_wins_on_stay(),
        &mut human,
        &mut dealer,
        DealerPolicy::default(),
    );

    round.deal().unwrap();
    assert!(matches!(round.hit(), Err(RoundError::EmptyDeck(_))));
    assert_eq!(round.state(), RoundState::HumanTurn);
}

#[test]
fn play_notifies_presenter_and_hides_hole_card() {
    let mut human = Hand::new();
    let mut dealer = Hand::new();
    let deck = Deck::stacked(&[
        card(Rank::Five, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Spades),
        card(Rank::Four, Suit::Diamonds), // dealer 14
        card(Rank::Seven, Suit::Hearts), // human 18
        card(Rank::Two, Suit::Clubs), // dealer 16
    ]);
    let mut round = Round::new(deck, &mut human, &mut dealer, DealerPolicy::default());
    let mut script = Script::with_decisions(&[Decision::Hit, Decision::Stay]);

    let outcome = round.play(&mut script, Scoreboard::default()).unwrap();

    assert_eq!(outcome, RoundOutcome::HumanWins);
    assert_eq!(script.hole_hidden_when_asked, vec![true, true]);
    // deal, hit, stay, dealer hit
    assert_eq!(script.tables_seen, 4);
}

#[test]
fn round_scores_dealer_win() {
    let mut game = Game::new(GameOptions::default(), 1);
    let mut script = Script::with_decisions(&[Decision::Stay]);

    let outcome = game
        .play_round_with_deck(dealer_reaches_21(), &mut script)
        .unwrap();

    assert_eq!(outcome, RoundOutcome::DealerWins);
    assert_eq!(game.scores(), Scoreboard { human: 0, dealer: 1 });
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.dealer().hand().total(), 21);
    assert_eq!(script.outcomes, vec![RoundOutcome::DealerWins]);
    assert_eq!(script.round_scores, vec![Scoreboard { human: 0, dealer: 1 }]);
}

#[test]
fn human_bust_scores_for_dealer() {
    let mut game = Game::new(GameOptions::default(), 1);
    let mut script = Script::with_decisions(&[Decision::Hit]);
    let deck = Deck::stacked(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Eight, Suit::Spades),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Five, Suit::Hearts),
    ]);

    let outcome = game.play_round_with_deck(deck, &mut script).unwrap();

    assert_eq!(outcome, RoundOutcome::DealerWins);
    assert_eq!(game.human().hand().total(), 23);
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.scores().dealer, 1);
}

#[test]
fn human_wins_accumulate_to_match_win() {
    let mut game = Game::new(GameOptions::default(), 3);

    for expected in 1..=4 {
        let state = game.record_outcome(RoundOutcome::HumanWins).unwrap();
        assert_eq!(state, MatchState::InProgress);
        assert_eq!(game.scores().human, expected);
    }

    assert_eq!(
        game.record_outcome(RoundOutcome::Push).unwrap(),
        MatchState::InProgress
    );
    assert_eq!(game.scores(), Scoreboard { human: 4, dealer: 0 });

    let state = game.record_outcome(RoundOutcome::HumanWins).unwrap();
    assert_eq!(state, MatchState::Over { winner: Role::Human });
    assert_eq!(game.scores().human, 5);
    assert_eq!(game.rounds_played(), 6);

    assert_eq!(
        game.record_outcome(RoundOutcome::DealerWins).unwrap_err(),
        MatchError::MatchOver
    );
    let mut script = Script::default();
    assert_eq!(
        game.play_round(&mut script).unwrap_err(),
        MatchError::MatchOver
    );

    game.rematch().unwrap();
    assert_eq!(game.state(), MatchState::InProgress);
    assert_eq!(game.scores(), Scoreboard::default());
    assert_eq!(game.rounds_played(), 0);
}

#[test]
fn rematch_rejected_mid_match() {
    let mut game = Game::new(GameOptions::default(), 3);
    game.record_outcome(RoundOutcome::DealerWins).unwrap();
    assert_eq!(game.rematch().unwrap_err(), MatchError::NotOver);
    assert_eq!(game.scores().dealer, 1);
}

#[test]
fn custom_threshold_ends_match_early() {
    let options = GameOptions::default().with_win_threshold(1);
    let mut game = Game::new(options, 9);
    let mut script = Script::with_decisions(&[Decision::Stay]);

    game.play_round_with_deck(human_wins_on_stay(), &mut script)
        .unwrap();
    assert_eq!(game.state(), MatchState::Over { winner: Role::Human });
}

#[test]
fn dealer_threshold_is_configurable() {
    let options = GameOptions::default().with_dealer_stands_at(17);
    let mut game = Game::new(options, 9);
    let mut script = Script::with_decisions(&[Decision::Stay]);
    let deck = Deck::stacked(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Six, Suit::Diamonds), // 16 hits under this rule
        card(Rank::Three, Suit::Hearts), // 19
    ]);

    let outcome = game.play_round_with_deck(deck, &mut script).unwrap();
    assert_eq!(game.dealer().hand().len(), 3);
    assert_eq!(outcome, RoundOutcome::Push);
    assert_eq!(game.scores(), Scoreboard::default());
}

#[test]
fn match_plays_until_threshold() {
    let mut game = Game::new(GameOptions::default(), 42);
    let mut script = Script::default();

    let winner = game.play_match(&mut script).unwrap();
    let scores = game.scores();

    assert_eq!(game.state(), MatchState::Over { winner });
    assert_eq!(scores.get(winner), 5);
    assert!(scores.get(winner.opponent()) < 5);
    assert_eq!(script.matches, vec![(winner, scores)]);
    assert_eq!(script.outcomes.len() as u32, game.rounds_played());

    let human_wins = script
        .outcomes
        .iter()
        .filter(|outcome| **outcome == RoundOutcome::HumanWins)
        .count();
    assert_eq!(human_wins, usize::from(scores.human));
}

#[test]
fn every_round_deals_from_a_full_deck() {
    let mut game = Game::new(GameOptions::default(), 42);
    let mut script = Script::default();

    game.play_match(&mut script).unwrap();

    assert_eq!(script.remaining_after_deal.len() as u32, game.rounds_played());
    assert!(
        script
            .remaining_after_deal
            .iter()
            .all(|&remaining| remaining == DECK_SIZE - 4)
    );
}

#[test]
fn same_seed_replays_same_match() {
    let mut first = Script::default();
    let mut second = Script::default();

    Game::new(GameOptions::default(), 7)
        .play_match(&mut first)
        .unwrap();
    Game::new(GameOptions::default(), 7)
        .play_match(&mut second)
        .unwrap();

    assert_eq!(first.outcomes, second.outcomes);
    assert_eq!(first.matches, second.matches);
}

#[test]
fn run_starts_new_match_until_declined() {
    let mut game = Game::new(GameOptions::default(), 11);
    let mut script = Script {
        play_again: VecDeque::from([true, false]),
        ..Script::default()
    };

    game.run(&mut script).unwrap();

    assert_eq!(script.matches.len(), 2);
    for (winner, scores) in &script.matches {
        assert_eq!(scores.get(*winner), 5);
    }
    assert!(matches!(game.state(), MatchState::Over { .. }));
    assert!(script.play_again.is_empty());

    // Scores restart from zero in the second match.
    let first_match_rounds = script
        .round_scores
        .iter()
        .position(|scores| scores.human == 5 || scores.dealer == 5)
        .unwrap();
    let second_start = script.round_scores[first_match_rounds + 1];
    assert!(second_start.human + second_start.dealer <= 1);
}
