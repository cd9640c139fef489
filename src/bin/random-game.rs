//! Plays a full game with both sides picking uniformly among empty cells

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, seq::IteratorRandom};
use rand_xoshiro::Xoshiro256PlusPlus;

use tictactoe_console::game::{GameStatus, Session, decide_first_player};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "random-game", version, about)]
struct Args {
    /// Seed for the random players (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_os_rng(),
    };

    let mut session = Session::new(decide_first_player(&mut rng));

    while let GameStatus::InProgress(player) = session.status() {
        let pos = session
            .board()
            .empty_positions()
            .choose(&mut rng)
            .context("no empty cell left on an unfinished board")?;
        log::debug!("{player} plays {pos}");
        session.play_turn(pos)?;
        println!("{board}", board = session.board());
    }

    println!("{session}");

    Ok(())
}
