//! Terminal front end: play Twenty-One against the dealer.

use core::time::Duration;
use std::io::{self, BufRead, Write};
use std::process;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Error, bail};
use log::info;
use pico_args::Arguments;
use twenty_one::{
    Card, DEFAULT_DEALER_STANDS_AT, DEFAULT_WIN_THRESHOLD, Decider, Decision, Game, GameOptions,
    Presenter, Role, RoundOutcome, Scoreboard, TableView,
};

const HELP: &str = "\
Play Twenty-One against the dealer

USAGE:
  twenty-one [OPTIONS]

OPTIONS:
  --seed            N   Shuffle seed  [default: derived from the clock]
  --wins            N   Round wins needed to take a match  [default: 5]
  --dealer-stands   N   Total at which the dealer stops drawing  [default: 16]

FLAGS:
  -h, --help            Print help information

ENVIRONMENT:
  RUST_LOG              Log filter, written to stderr (e.g. twenty_one=debug)
";

const CARD_HEIGHT: usize = 9;
const CARD_EDGE: &str = "+-----------+";
const CARD_BLANK: &str = "|           |";

struct Args {
    seed: Option<u64>,
    wins: u8,
    dealer_stands: u16,
}

fn parse_args() -> Result<Args, Error> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        process::exit(0);
    }

    let args = Args {
        seed: pargs.opt_value_from_str("--seed")?,
        wins: pargs
            .opt_value_from_str("--wins")?
            .unwrap_or(DEFAULT_WIN_THRESHOLD),
        dealer_stands: pargs
            .opt_value_from_str("--dealer-stands")?
            .unwrap_or(DEFAULT_DEALER_STANDS_AT),
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("unexpected arguments: {remaining:?}");
    }
    if args.wins == 0 {
        bail!("--wins must be at least 1");
    }

    Ok(args)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

fn card_face(card: &Card) -> [String; CARD_HEIGHT] {
    let rank = card.rank.symbol();
    [
        CARD_EDGE.to_string(),
        format!("|{rank:<11}|"),
        CARD_BLANK.to_string(),
        CARD_BLANK.to_string(),
        format!("|     {}     |", card.suit.symbol()),
        CARD_BLANK.to_string(),
        CARD_BLANK.to_string(),
        format!("|{rank:>11}|"),
        CARD_EDGE.to_string(),
    ]
}

fn card_back() -> [String; CARD_HEIGHT] {
    core::array::from_fn(|line| {
        if line == 0 || line == CARD_HEIGHT - 1 {
            CARD_EDGE.to_string()
        } else {
            CARD_BLANK.to_string()
        }
    })
}

fn render_row(faces: &[[String; CARD_HEIGHT]]) -> String {
    let mut out = String::new();
    for line in 0..CARD_HEIGHT {
        let row: Vec<&str> = faces.iter().map(|face| face[line].as_str()).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
}

fn outcome_message(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::HumanWins => "Player Wins!",
        RoundOutcome::DealerWins => "Dealer Wins!",
        RoundOutcome::Push => "It's a push!",
    }
}

struct Terminal<R> {
    input: R,
}

impl<R: BufRead> Terminal<R> {
    const fn new(input: R) -> Self {
        Self { input }
    }

    fn welcome(&self) {
        clear_screen();
        println!("Welcome to Twenty-one!");
        thread::sleep(Duration::from_secs(1));
    }

    fn goodbye(&self) {
        println!("Goodbye. Thanks for Playing!");
    }

    /// Reads one trimmed, lowercased line. End of input ends the program.
    fn read_line(&mut self) -> String {
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                println!();
                self.goodbye();
                process::exit(0);
            }
            Ok(_) => line.trim().to_lowercase(),
            Err(err) => {
                eprintln!("failed to read input: {err}");
                process::exit(1);
            }
        }
    }

    /// Asks until the answer is `yes` or `no`; returns whether it was `yes`.
    fn ask(&mut self, question: &str, yes: &str, no: &str) -> bool {
        loop {
            println!("{question}");
            let answer = self.read_line();
            if answer == yes {
                return true;
            }
            if answer == no {
                return false;
            }
            println!("Sorry, you must enter a valid response.");
        }
    }

    fn print_table(&self, view: &TableView<'_>) {
        clear_screen();
        println!(
            "Player Wins: {} -- Dealer Wins: {}",
            view.scores.human, view.scores.dealer
        );

        println!("\nDealer");
        let dealer_cards = view.dealer.cards();
        if view.dealer_hole_hidden() {
            let mut faces = Vec::with_capacity(dealer_cards.len());
            faces.extend(dealer_cards.first().map(card_face));
            faces.extend(dealer_cards.iter().skip(1).map(|_| card_back()));
            print!("{}", render_row(&faces));
        } else {
            let faces: Vec<_> = dealer_cards.iter().map(card_face).collect();
            print!("{}", render_row(&faces));
            println!("The current total for the hand is: {}", view.dealer_total());
        }

        println!("\nYou");
        let faces: Vec<_> = view.human.cards().iter().map(card_face).collect();
        print!("{}", render_row(&faces));
        println!("The current total for the hand is: {}", view.human_total());

        if view.human.is_busted() {
            println!("You busted!");
        }
        if view.dealer.is_busted() {
            println!("Dealer Busted!");
        }
    }
}

impl<R: BufRead> Decider for Terminal<R> {
    fn hit_or_stay(&mut self, _view: &TableView<'_>) -> Decision {
        if self.ask("Would you like to Hit or Stay? (h or s): ", "h", "s") {
            Decision::Hit
        } else {
            Decision::Stay
        }
    }

    fn play_again(&mut self, _scores: Scoreboard) -> bool {
        self.ask("Would you like to play again? (y or n): ", "y", "n")
    }
}

impl<R: BufRead> Presenter for Terminal<R> {
    fn table_changed(&mut self, view: &TableView<'_>) {
        self.print_table(view);
    }

    fn round_over(&mut self, outcome: RoundOutcome, view: &TableView<'_>) {
        self.print_table(view);
        println!("{}", outcome_message(outcome));
        println!("Press Enter to continue.");
        let _ = self.read_line();
    }

    fn match_over(&mut self, winner: Role, scores: Scoreboard) {
        let verb = match winner {
            Role::Human => "You win",
            Role::Dealer => "The dealer wins",
        };
        println!(
            "{verb} the match {}-{}!",
            scores.get(winner),
            scores.get(winner.opponent())
        );
    }
}

fn main() -> Result<(), Error> {
    let args = parse_args()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_target(false)
        .init();

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("starting with seed {seed}");

    let options = GameOptions::default()
        .with_win_threshold(args.wins)
        .with_dealer_stands_at(args.dealer_stands);
    let mut game = Game::new(options, seed);

    let mut terminal = Terminal::new(io::stdin().lock());
    terminal.welcome();
    game.run(&mut terminal)?;
    terminal.goodbye();

    Ok(())
}
