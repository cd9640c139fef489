use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use tictactoe_console::{console::GameLoop, game::decide_first_player};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "tictactoe", version, about)]
struct Args {
    /// Seed for the first-player coin toss (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Keep previous turns on screen instead of clearing between moves
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_os_rng(),
    };
    let first_player = decide_first_player(&mut rng);
    log::info!("First player: {first_player}");

    let outcome = GameLoop::stdio(first_player)
        .clear_between_turns(!args.no_clear)
        .run()?;
    log::info!("Outcome: {outcome:?}");

    Ok(())
}
