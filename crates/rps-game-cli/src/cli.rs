//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use rps_game_core::DEFAULT_KEY_BITS;

#[derive(Debug, Parser)]
#[command(name = "rps-game", version, about = "Provably fair n-way rock-paper-scissors")]
pub struct Cli {
    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play against the computer
    Play(PlayArgs),
    /// Print the rules table for a move set
    Rules(MovesArgs),
    /// Check a revealed key and move against a digest shown earlier
    Verify(VerifyArgs),
}

#[derive(Debug, Args)]
pub struct MovesArgs {
    /// An odd number (>= 3) of unique move names, in circular order
    #[arg(required = true, num_args = 1..)]
    pub moves: Vec<String>,
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub moves: MovesArgs,

    /// Secret key length in bits
    #[arg(
        long,
        env = "RPS_KEY_BITS",
        default_value_t = DEFAULT_KEY_BITS,
        value_parser = clap::value_parser!(u32).range(128..=4096)
    )]
    pub key_bits: u32,

    /// Also print each round's reveal as a JSON line
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Revealed key, hex
    #[arg(long)]
    pub key: String,

    /// Computer move exactly as revealed
    #[arg(long = "move")]
    pub action: String,

    /// Digest shown before the round, hex
    #[arg(long)]
    pub digest: String,
}
