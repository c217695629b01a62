#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[cfg(feature = "std")]
use seabattle::{
    init_logging, random_fleet, CellSet, Game, PlayerId, ShotOutcome, BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play random matches to completion and report the results.
    Simulate {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: u32,
    },
    /// Generate a random fleet arrangement and print it.
    Arrange {
        #[arg(long, help = "Fix RNG seed for a reproducible arrangement")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
const HOST: PlayerId = 1;
#[cfg(feature = "std")]
const GUEST: PlayerId = 2;

#[cfg(feature = "std")]
fn play_one(game_no: u32, rng: &mut SmallRng) -> anyhow::Result<(PlayerId, u32)> {
    let mut game = Game::new(game_no);
    game.add_player(HOST).map_err(|e| anyhow::anyhow!(e))?;
    game.add_player(GUEST).map_err(|e| anyhow::anyhow!(e))?;
    game.place_fleet_for(HOST, random_fleet(rng))
        .map_err(|e| anyhow::anyhow!(e))?;
    game.place_fleet_for(GUEST, random_fleet(rng))
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut shots = 0u32;
    loop {
        let attacker = game
            .current_player()
            .ok_or_else(|| anyhow::anyhow!("no turn holder in game {}", game_no))?;
        let report = game
            .random_attack(attacker, rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        shots += 1;
        match &report.outcome {
            ShotOutcome::Miss { cell, .. } => {
                log::debug!("game {}: player {} missed at {}", game_no, attacker, cell)
            }
            ShotOutcome::Hit { cell } => {
                log::debug!("game {}: player {} hit at {}", game_no, attacker, cell)
            }
            ShotOutcome::Sunk { cell, ship, .. } => log::info!(
                "game {}: player {} sank a {}-cell ship at {}",
                game_no,
                attacker,
                ship.len(),
                cell
            ),
        }
        if let Some(winner) = report.winner {
            log::info!(
                "game {}: player {} wins after {} shots",
                game_no,
                winner,
                shots
            );
            return Ok((winner, shots));
        }
    }
}

#[cfg(feature = "std")]
fn print_arrangement(rng: &mut SmallRng) {
    let fleet = random_fleet(rng);
    let occupied: CellSet = fleet.iter().flat_map(|ship| ship.cells()).collect();
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let mark = if occupied.contains(seabattle::Cell::new(x, y)) {
                '■'
            } else {
                '·'
            };
            print!("{} ", mark);
        }
        println!();
    }
    for ship in &fleet {
        println!(
            "{:?} ship of length {} at {} ({:?})",
            ship.class(),
            ship.length,
            ship.origin,
            ship.orientation
        );
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { seed, games } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (games will be reproducible)", s);
            }
            let mut wins: HashMap<PlayerId, u32> = HashMap::new();
            let mut total_shots = 0u64;
            for game_no in 0..games {
                let mut rng = make_rng(seed, game_no as u64);
                let (winner, shots) = play_one(game_no, &mut rng)?;
                *wins.entry(winner).or_insert(0) += 1;
                total_shots += shots as u64;
            }
            println!(
                "{} game(s): player {} won {}, player {} won {}, {:.1} shots on average",
                games,
                HOST,
                wins.get(&HOST).copied().unwrap_or(0),
                GUEST,
                wins.get(&GUEST).copied().unwrap_or(0),
                total_shots as f64 / games.max(1) as f64
            );
        }
        Commands::Arrange { seed } => {
            let mut rng = make_rng(seed, 0);
            print_arrangement(&mut rng);
        }
    }
    Ok(())
}
