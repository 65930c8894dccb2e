//! RPS Game CLI
//!
//! Console driver that plays provably fair rock-paper-scissors over any odd
//! number of moves, and checks revealed rounds.

mod cli;
mod menu;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, MovesArgs, PlayArgs, VerifyArgs};
use rps_game_core::{Commitment, MoveSet, RuleEngine, SecretKey};
use session::Session;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing on stderr so it never mixes with the game on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    let succeeded = match command {
        Command::Play(args) => play(args, io::stdin().lock(), &mut out, &mut err)?,
        Command::Rules(args) => rules(args, &mut out, &mut err)?,
        Command::Verify(args) => verify(args, &mut out)?,
    };
    out.flush()?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Validate the move list, printing usage to `err` when it is unusable
fn load_moves<E: Write>(args: MovesArgs, err: &mut E) -> Result<Option<MoveSet>> {
    match MoveSet::new(args.moves) {
        Ok(moves) => Ok(Some(moves)),
        Err(e) => {
            writeln!(err, "{}", e)?;
            writeln!(
                err,
                "Please provide an odd number of unique choices (>= 3) as command-line arguments."
            )?;
            writeln!(err, "Example: rps-game play rock paper scissors lizard Spock")?;
            Ok(None)
        }
    }
}

fn play<R, W, E>(args: PlayArgs, input: R, out: &mut W, err: &mut E) -> Result<bool>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let Some(moves) = load_moves(args.moves, err)? else {
        return Ok(false);
    };
    info!(moves = moves.len(), key_bits = args.key_bits, "starting session");

    let session = Session::new(moves, args.key_bits, args.json);
    session.run(input, out).context("game session failed")?;
    Ok(true)
}

fn rules<W: Write, E: Write>(args: MovesArgs, out: &mut W, err: &mut E) -> Result<bool> {
    let Some(moves) = load_moves(args, err)? else {
        return Ok(false);
    };
    let table = RuleEngine::build_relation_table(&moves);
    menu::write_rules(out, &moves, &table)?;
    Ok(true)
}

/// Recheck a revealed round; true when the digest matches
fn verify<W: Write>(args: VerifyArgs, out: &mut W) -> Result<bool> {
    let key = SecretKey::from_hex(&args.key).context("could not read --key")?;
    let digest = Commitment::from_hex(&args.digest).context("could not read --digest")?;

    let matches = digest.verify(&key, &args.action);
    info!(digest = %digest, matches, "verified commitment");
    if matches {
        writeln!(out, "OK: digest matches move \"{}\"", args.action)?;
    } else {
        writeln!(out, "MISMATCH: digest does not match move \"{}\"", args.action)?;
    }
    Ok(matches)
}
