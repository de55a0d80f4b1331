//! CLI frontend for the Honk goose casino.

mod commands;

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "honk",
    about = "Honk: a casino where geese rob the gamblers",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log verbosity written to stderr (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round-based game until a verdict or the round limit
    Simulate {
        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Rounds to play before stopping undecided
        #[arg(short, long, default_value = "100")]
        rounds: u64,

        /// Number of generated players
        #[arg(short, long, default_value = "3")]
        players: usize,

        /// Number of generated geese
        #[arg(short, long, default_value = "3")]
        geese: usize,

        /// JSON roster to seat instead of generating one
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Balance a player needs to win
        #[arg(short, long, default_value = "5000")]
        threshold: i64,

        /// Print the full event log
        #[arg(short, long)]
        verbose: bool,
    },

    /// Spin the roulette wheel once for a fresh player
    Bet {
        /// Amount to stake
        #[arg(long)]
        stake: i64,

        /// A pocket number (0-36) or red, black, even, odd
        #[arg(short, long)]
        wager: String,

        /// Starting balance of the player
        #[arg(short, long, default_value = "100")]
        balance: i64,

        /// RNG seed for the spin
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// List the standard chip set
    Chips,
}

fn main() {
    let cli = Cli::parse();

    let result = init_tracing(&cli.log_level).and_then(|()| match cli.command {
        Commands::Simulate {
            seed,
            rounds,
            players,
            geese,
            roster,
            threshold,
            verbose,
        } => commands::simulate::run(&commands::simulate::Options {
            seed,
            rounds,
            players,
            geese,
            roster,
            threshold,
            verbose,
        }),
        Commands::Bet {
            stake,
            wager,
            balance,
            seed,
        } => commands::bet::run(stake, &wager, balance, seed),
        Commands::Chips => commands::chips::run(),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing(level: &str) -> Result<(), String> {
    let level = Level::from_str(level).map_err(|_| format!("invalid log level '{level}'"))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
