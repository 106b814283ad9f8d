//! Seqduel: play the number-removal game against a search engine.
//!
//! ## Usage
//!
//! - `seqduel` - Play a computer-vs-computer demo game
//! - `seqduel session` - Start the text protocol on stdin/stdout
//! - `seqduel demo --algorithm minimax --length 20 --seed 7` - Demo with options
//!
//! Set `RUST_LOG=seqduel=debug` to see search statistics.

use std::io;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use seqduel::config::GameConfig;
use seqduel::constants::{DEFAULT_LENGTH, START_SCORE};
use seqduel::rules::{Outcome, apply_move_by_value, is_terminal, winner};
use seqduel::search::{Algorithm, search};
use seqduel::session::Session;

/// Seqduel: number-removal game with minimax / alpha-beta opponents
#[derive(Parser)]
#[command(name = "seqduel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol for use by a front end
    Session(MatchArgs),
    /// Play one game computer against computer
    Demo(MatchArgs),
}

#[derive(Args, Clone)]
struct MatchArgs {
    /// Number of items in the sequence
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    length: usize,
    /// Starting score for both players
    #[arg(long, default_value_t = START_SCORE)]
    start_score: i32,
    /// Search algorithm (minimax or alpha-beta)
    #[arg(long, default_value = "alpha-beta")]
    algorithm: Algorithm,
    /// Fixed search depth (chosen from the remaining length if omitted)
    #[arg(long)]
    depth: Option<u32>,
    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,
    /// Let the computer take the first seat
    #[arg(long)]
    computer_first: bool,
}

impl Default for MatchArgs {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            start_score: START_SCORE,
            algorithm: Algorithm::default(),
            depth: None,
            seed: None,
            computer_first: false,
        }
    }
}

impl From<MatchArgs> for GameConfig {
    fn from(args: MatchArgs) -> Self {
        GameConfig {
            length: args.length,
            start_score: args.start_score,
            algorithm: args.algorithm,
            depth: args.depth,
            seed: args.seed,
            computer_first: args.computer_first,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Session(args)) => run_session(args.into()),
        Some(Commands::Demo(args)) => run_demo(args.into()),
        None => run_demo(MatchArgs::default().into()),
    }
}

fn run_session(config: GameConfig) -> Result<()> {
    config.validate().context("invalid session settings")?;
    let mut session = Session::new(config);
    let stdin = io::stdin();
    session
        .run(stdin.lock(), io::stdout())
        .context("session I/O failed")
}

fn run_demo(config: GameConfig) -> Result<()> {
    let mut rng = config.rng();
    let mut state = config.new_game(&mut rng).context("cannot start demo game")?;

    println!("Seqduel demo: {} against itself\n", config.algorithm);
    println!("Start: {state}");
    info!("demo game with {} items", state.len());

    while !is_terminal(&state) {
        let mover = state.to_move();
        let result = search(&state, config.algorithm, config.depth);
        let value = result
            .best_move
            .context("search found no move in a running game")?;
        let (next, position) =
            apply_move_by_value(&state, value, &mut rng).context("search chose an illegal move")?;
        println!(
            "{mover} takes {value} at {position:>2} (depth {}, {} nodes) -> {next}",
            result.depth, result.stats.nodes
        );
        state = next;
    }

    let verdict = match winner(&state) {
        Outcome::Win(player) => format!("player {player} wins"),
        Outcome::Draw => "draw".to_string(),
    };
    println!("\nFinal: A={} B={} - {verdict}", state.score_a(), state.score_b());
    Ok(())
}
