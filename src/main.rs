use std::path::PathBuf;

use anyhow::Context;
use battleship_bot::{init_logging, Feedback, StateStore, SunkReport, TargetingEngine, DEFAULT_STATE_FILE};
use clap::Parser;
use log::warn;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Choose the next shot against the opponent board.
///
/// Reports the result of the previous shot, updates the stored game state
/// and prints the next cell to fire upon as `x y`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Result of the previous shot: HIT, MISS or NONE.
    feedback: String,
    /// Length of the ship the previous shot sank, or NONE.
    sunk: String,
    /// File holding the game state between runs (`.bin` selects bincode).
    #[arg(long, default_value = DEFAULT_STATE_FILE)]
    state: PathBuf,
    #[arg(long, help = "Fix RNG seed for reproducible tie-breaks (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Print the placement density of the stored state to stderr first.
    #[arg(long)]
    show_density: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if !Feedback::is_known_token(&cli.feedback) {
        warn!("unrecognized feedback {:?}, treating it as NONE", cli.feedback);
    }
    let feedback = Feedback::from_token(&cli.feedback);
    let SunkReport(sunk) = cli
        .sunk
        .parse::<SunkReport>()
        .context("invalid arguments")?;

    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut engine = TargetingEngine::new(StateStore::new(cli.state), rng);

    if cli.show_density {
        let grid = engine.density();
        eprintln!("Placement density ({} total):", grid.total());
        eprintln!("{}", grid);
    }

    let shot = engine.play(feedback, sunk)?;
    println!("{}", shot);
    Ok(())
}
