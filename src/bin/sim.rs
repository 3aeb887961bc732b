use fleetfire::{init_logging, setup_side, AiPlayer, GameEngine, GameRunner, Side};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

// Automated game: a random-targeting player in the human's seat against the
// computer. Prints a one-line JSON summary.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <player-seed> <computer-seed>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut setup_rng1 = SmallRng::seed_from_u64(seed1);
    let mut setup_rng2 = SmallRng::seed_from_u64(seed2);

    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let s1 = setup_side(&mut p1, &mut setup_rng1)?;
    let s2 = setup_side(&mut p2, &mut setup_rng2)?;

    let mut rng = SmallRng::seed_from_u64(seed1 ^ seed2.rotate_left(32));
    let mut runner = GameRunner::new(GameEngine::new(s1, s2), Box::new(p1), Box::new(p2));
    let outcome = runner.run(&mut rng)?;

    let winner = match outcome.status.winner() {
        Some(Side::Player) => Some("player"),
        Some(Side::Computer) => Some("computer"),
        None => None,
    };

    let result = json!({
        "status": outcome.status,
        "player": {"shots": outcome.player_shots},
        "computer": {"shots": outcome.computer_shots},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
