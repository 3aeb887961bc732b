use fleetfire::{
    choose_shot, setup_side, AiPlayer, GameEngine, GameOutcome, GameRunner, Mark, TrackingGrid,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn play(seed: u64) -> (GameOutcome, GameRunner) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let s1 = setup_side(&mut p1, &mut rng).unwrap();
    let s2 = setup_side(&mut p2, &mut rng).unwrap();
    let mut runner = GameRunner::new(GameEngine::new(s1, s2), Box::new(p1), Box::new(p2));
    let outcome = runner.run(&mut rng).unwrap();
    (outcome, runner)
}

#[test]
fn test_ai_vs_ai_game() {
    let (outcome, runner) = play(123);
    let winner = outcome.status.winner().expect("someone must win");
    assert!(outcome.player_shots >= TOTAL_SHIP_CELLS || outcome.computer_shots >= TOTAL_SHIP_CELLS);
    assert!(outcome.player_shots <= 100 && outcome.computer_shots <= 100);

    let engine = runner.engine();
    let loser = match winner {
        fleetfire::Side::Player => engine.computer(),
        fleetfire::Side::Computer => engine.player(),
    };
    assert!(loser.is_destroyed());
    assert_eq!(
        engine.player().tracking().count(Mark::Hit) + engine.player().tracking().count(Mark::Miss),
        outcome.player_shots
    );
}

#[test]
fn test_ai_games_are_reproducible() {
    for seed in [1, 7, 99] {
        assert_eq!(play(seed).0, play(seed).0);
    }
}

#[test]
fn test_choose_shot_picks_the_only_unknown_cell() {
    let mut tracking = TrackingGrid::with_size(3);
    for r in 0..3 {
        for c in 0..3 {
            if (r, c) != (2, 1) {
                tracking.mark((r, c), Mark::Miss);
            }
        }
    }
    let mut rng = SmallRng::seed_from_u64(5);
    for _ in 0..10 {
        assert_eq!(choose_shot(&tracking, &mut rng), Some((2, 1)));
    }
    tracking.mark((2, 1), Mark::Hit);
    assert_eq!(choose_shot(&tracking, &mut rng), None);
}

#[test]
fn test_choose_shot_never_repeats() {
    let mut tracking = TrackingGrid::new();
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..100 {
        let target = choose_shot(&tracking, &mut rng).unwrap();
        assert!(tracking.is_unknown(target));
        tracking.mark(target, Mark::Miss);
    }
    assert_eq!(choose_shot(&tracking, &mut rng), None);
}
