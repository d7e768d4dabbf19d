//! Gomoku engine command line.
//!
//! ## Usage
//!
//! - `gomoku` - Show a demo game
//! - `gomoku gtp` - Start the text protocol server for GUI integration
//! - `gomoku selfplay` - Pit two difficulties against each other

use anyhow::Result;
use clap::{Parser, Subcommand};
use fastrand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::ai::Difficulty;
use gomoku::board::Side;
use gomoku::game::{Game, Status};
use gomoku::gtp::GtpEngine;

/// Gomoku: five in a row against a computer opponent
#[derive(Parser)]
#[command(name = "gomoku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol server for use with GUI applications
    Gtp {
        /// Engine strength
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,
        /// Seed for reproducible play
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Let the engine play one game against itself
    Demo {
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Play a series of engine-vs-engine games and report the tally
    Selfplay {
        /// Strength of the side moving first
        #[arg(long, default_value = "hard")]
        black: Difficulty,
        /// Strength of the side moving second
        #[arg(long, default_value = "medium")]
        white: Difficulty,
        /// Number of games
        #[arg(short = 'n', long, default_value_t = 10)]
        games: usize,
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Gtp { difficulty, seed }) => {
            let mut engine = GtpEngine::with_config(difficulty, rng_from(seed));
            engine.run()?;
        }
        Some(Commands::Selfplay {
            black,
            white,
            games,
            seed,
        }) => {
            run_selfplay(black, white, games, &mut rng_from(seed));
        }
        Some(Commands::Demo { seed }) => run_demo(&mut rng_from(seed)),
        None => run_demo(&mut Rng::new()),
    }

    Ok(())
}

/// Logs go to stderr; stdout carries the protocol.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn rng_from(seed: Option<u64>) -> Rng {
    seed.map_or_else(Rng::new, Rng::with_seed)
}

/// Play one game between two difficulties, each side using its own.
fn play_out(black: Difficulty, white: Difficulty, rng: &mut Rng) -> Game {
    let mut game = Game::new(black);

    while !game.status().is_over() {
        let difficulty = match game.to_move() {
            Side::Black => black,
            Side::White => white,
        };
        if game.genmove_with(difficulty, rng).is_err() {
            break;
        }
    }

    game
}

fn run_demo(rng: &mut Rng) {
    println!("Gomoku: hard (X) vs medium (O)\n");

    let game = play_out(Difficulty::Hard, Difficulty::Medium, rng);
    println!("{}", game.board());

    match game.status() {
        Status::Won(win) => {
            let line: Vec<String> = win.line.iter().map(|m| m.to_string()).collect();
            println!(
                "{} wins after {} moves: {}",
                win.winner,
                game.moves().len(),
                line.join(" ")
            );
        }
        Status::Draw => println!("Draw after {} moves", game.moves().len()),
        Status::Playing => println!("Game abandoned"),
    }
}

fn run_selfplay(black: Difficulty, white: Difficulty, games: usize, rng: &mut Rng) {
    let (mut black_wins, mut white_wins, mut draws) = (0, 0, 0);

    for i in 0..games {
        let game = play_out(black, white, rng);
        match game.status() {
            Status::Won(win) if win.winner == Side::Black => black_wins += 1,
            Status::Won(_) => white_wins += 1,
            _ => draws += 1,
        }
        info!(game = i, moves = game.moves().len(), "finished");
    }

    println!("black ({black}): {black_wins}");
    println!("white ({white}): {white_wins}");
    println!("draws: {draws}");
}
