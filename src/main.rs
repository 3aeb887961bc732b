#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use fleetfire::{
    cli::render_fleet_status, init_logging, setup_side, AiPlayer, CliPlayer, GameEngine,
    GameRunner, PlacementMode,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Placement {
    Manual,
    Random,
}

/// Battleship in the terminal: sink the computer's fleet before it sinks yours.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, help = "Skip the setup question and place ships this way")]
    placement: Option<Placement>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    println!("=== FLEETFIRE ===");
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut human = CliPlayer::stdio();
    let manual = match cli.placement {
        Some(Placement::Manual) => true,
        Some(Placement::Random) => false,
        None => human.ask_manual_placement()?,
    };
    human.set_placement(if manual {
        PlacementMode::Manual
    } else {
        PlacementMode::Random
    });

    let player_side = setup_side(&mut human, &mut rng)?;
    let mut computer = AiPlayer::new();
    let computer_side = setup_side(&mut computer, &mut rng)?;

    println!("Your fleet:");
    print!("{}", render_fleet_status(player_side.fleet(), player_side.board()));
    println!("Ships placed. The battle begins!\n");

    let engine = GameEngine::new(player_side, computer_side);
    let mut runner = GameRunner::new(engine, Box::new(human), Box::new(computer));
    runner.run(&mut rng)?;

    println!("Game over. Thanks for playing!");
    Ok(())
}
