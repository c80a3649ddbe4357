use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use holdem_odds::core::{Card, Hand, OddsError, Rank, Rankable};
use holdem_odds::holdem::{
    DEFAULT_TRIALS, GameState, HandOdds, OddsCalculator, OddsConfig, OutcomeCounts,
    run_parallel,
};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "holdem-odds",
    about = "Estimate Texas Hold'em win and tie probabilities",
    long_about = "Run a monte carlo simulation of the rest of a hold'em hand.\n\
                  Unknown opponent hands and the rest of the board are dealt at random."
)]
struct Args {
    /// Hero's hole cards (e.g. "AhKh")
    hole: String,

    /// Community cards dealt so far (e.g. "Qh Jh Th")
    #[arg(short, long, default_value = "")]
    board: String,

    /// Players at the table, hero included
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Number of hands to simulate
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Spread the trials over every core
    #[arg(long)]
    parallel: bool,

    /// Give up if the simulation takes longer than this
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print the result as json
    #[arg(long)]
    json: bool,
}

#[derive(Debug, serde::Serialize)]
struct Report {
    hole: Hand,
    board: Hand,
    players: usize,
    trials: u64,
    made_hand: Option<String>,
    odds: HandOdds,
    loss_probability: f64,
    win_standard_error: f64,
}

fn parse_cards(s: &str) -> Result<Vec<Card>, OddsError> {
    Ok(Hand::new_from_str(s)?.into())
}

fn made_hand(state: &GameState) -> Result<Option<Rank>, OddsError> {
    let mut cards = state.hole_cards.clone();
    cards.extend_from_slice(&state.community_cards);
    if cards.len() < 5 {
        return Ok(None);
    }
    cards.rank().map(Some)
}

fn simulate(args: &Args, state: &GameState) -> Result<OutcomeCounts, OddsError> {
    let config = OddsConfig {
        hole_cards: state.hole_cards.clone(),
        community_cards: state.community_cards.clone(),
        opponents: Some(state.opponents()),
        trials: args.trials,
        deadline: args
            .timeout_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms)),
        ..OddsConfig::default()
    };

    if args.parallel {
        let seed = args.seed.unwrap_or_else(rand::random);
        return run_parallel(&config, seed);
    }

    match args.seed {
        Some(seed) => OddsCalculator::new(config, StdRng::seed_from_u64(seed))?.run(args.trials),
        None => OddsCalculator::new(config, rand::rng())?.run(args.trials),
    }
}

fn run(args: &Args) -> Result<Report, OddsError> {
    let state = GameState::new(
        parse_cards(&args.hole)?,
        parse_cards(&args.board)?,
        args.players,
    );
    state.validate()?;

    let counts = simulate(args, &state)?;
    let odds = counts.odds();
    Ok(Report {
        hole: Hand::new_with_cards(state.hole_cards.clone()),
        board: Hand::new_with_cards(state.community_cards.clone()),
        players: state.number_of_players,
        trials: counts.trials(),
        made_hand: made_hand(&state)?.map(|r| r.to_string()),
        loss_probability: odds.loss_probability(),
        win_standard_error: counts.win_standard_error(),
        odds,
    })
}

fn print_report(report: &Report) {
    println!("Hole:    {}", report.hole);
    println!("Board:   {}", report.board);
    println!("Players: {}", report.players);
    if let Some(made) = &report.made_hand {
        println!("Made:    {made}");
    }
    println!("Trials:  {}", report.trials);
    println!();
    println!(
        "Win:  {:6.2}% (+/- {:.2}%)",
        report.odds.win_probability * 100.0,
        report.win_standard_error * 100.0
    );
    println!("Tie:  {:6.2}%", report.odds.tie_probability * 100.0);
    println!("Loss: {:6.2}%", report.loss_probability * 100.0);
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(report) if args.json => match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error writing json: {e}");
                ExitCode::FAILURE
            }
        },
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_invalid_input() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
