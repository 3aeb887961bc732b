use fleetfire::{
    Board, Fleet, GameEngine, GameError, GameStatus, Mark, Orientation, ShipDef, ShotResult,
    Side, SideState,
};

const DESTROYER: ShipDef = ShipDef::new("Destroyer", 2);

/// A side with a lone Destroyer running right from `origin`, after the
/// opponent has already fired at `pre_fired`.
fn side(origin: (usize, usize), pre_fired: &[(usize, usize)]) -> SideState {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    let cells = board.place_ship(origin, 2, Orientation::Horizontal).unwrap();
    fleet.insert(DESTROYER, cells);
    for &cell in pre_fired {
        board.fire(&fleet, cell).unwrap();
    }
    SideState::new(board, fleet)
}

/// Player's Destroyer on A1-A2, computer's on F6-F7.
fn engine() -> GameEngine {
    GameEngine::new(side((0, 0), &[]), side((5, 5), &[]))
}

#[test]
fn test_player_moves_first() {
    let engine = engine();
    assert_eq!(engine.status(), GameStatus::PlayerTurn);
    assert!(engine.outcome().is_none());
    assert_eq!(engine.player().tracking().count(Mark::Unknown), 100);
}

#[test]
fn test_hit_keeps_the_turn_and_sinking_wins() {
    let mut engine = engine();

    let report = engine.player_shot((5, 5)).unwrap();
    assert_eq!(report.side, Side::Player);
    assert_eq!(report.result, ShotResult::Hit);
    assert_eq!(report.status, GameStatus::PlayerTurn);
    assert_eq!(engine.player().tracking().get((5, 5)), Some(Mark::Hit));

    let report = engine.player_shot((5, 6)).unwrap();
    assert_eq!(report.result, ShotResult::Sunk("Destroyer"));
    assert_eq!(engine.status(), GameStatus::PlayerWon);
    assert!(engine.computer().is_destroyed());

    let outcome = engine.outcome().unwrap();
    assert_eq!(outcome.status, GameStatus::PlayerWon);
    assert_eq!(outcome.player_shots, 2);
    assert_eq!(outcome.computer_shots, 0);

    assert_eq!(engine.player_shot((0, 0)).unwrap_err(), GameError::GameOver);
    assert_eq!(engine.computer_shot((0, 0)).unwrap_err(), GameError::GameOver);
}

#[test]
fn test_miss_passes_the_turn() {
    let mut engine = engine();
    let report = engine.player_shot((9, 9)).unwrap();
    assert_eq!(report.result, ShotResult::Miss);
    assert_eq!(engine.status(), GameStatus::ComputerTurn);
    assert_eq!(engine.player().tracking().get((9, 9)), Some(Mark::Miss));

    assert_eq!(
        engine.player_shot((0, 0)).unwrap_err(),
        GameError::OutOfTurn(Side::Player)
    );
}

#[test]
fn test_computer_never_gets_an_extra_turn() {
    let mut engine = engine();
    engine.player_shot((9, 9)).unwrap();

    let report = engine.computer_shot((0, 0)).unwrap();
    assert_eq!(report.side, Side::Computer);
    assert_eq!(report.result, ShotResult::Hit);
    assert_eq!(engine.status(), GameStatus::PlayerTurn);
    assert_eq!(engine.computer().tracking().get((0, 0)), Some(Mark::Hit));

    assert_eq!(
        engine.computer_shot((0, 1)).unwrap_err(),
        GameError::OutOfTurn(Side::Computer)
    );
}

#[test]
fn test_computer_wins_by_sinking_the_last_ship() {
    let mut engine = engine();
    engine.player_shot((9, 9)).unwrap();
    engine.computer_shot((0, 0)).unwrap();
    engine.player_shot((9, 8)).unwrap();
    let report = engine.computer_shot((0, 1)).unwrap();

    assert_eq!(report.result, ShotResult::Sunk("Destroyer"));
    assert_eq!(engine.status(), GameStatus::ComputerWon);
    let outcome = engine.outcome().unwrap();
    assert_eq!(outcome.status.winner(), Some(Side::Computer));
    assert_eq!(outcome.player_shots, 2);
    assert_eq!(outcome.computer_shots, 2);
}

#[test]
fn test_repeat_and_off_board_targets_are_refused() {
    let mut engine = engine();
    engine.player_shot((5, 5)).unwrap();

    assert_eq!(
        engine.player_shot((5, 5)).unwrap_err(),
        GameError::RepeatShot((5, 5))
    );
    assert_eq!(
        engine.player_shot((10, 3)).unwrap_err(),
        GameError::OutOfBounds((10, 3))
    );
    assert_eq!(engine.status(), GameStatus::PlayerTurn);
    assert_eq!(engine.player().shots_fired(), 1);
}

#[test]
fn test_computer_repeat_is_a_lost_turn() {
    let mut engine = GameEngine::new(side((0, 0), &[(9, 9)]), side((5, 5), &[]));
    engine.player_shot((3, 3)).unwrap();

    let report = engine.computer_shot((9, 9)).unwrap();
    assert_eq!(report.result, ShotResult::AlreadyFired);
    assert_eq!(engine.status(), GameStatus::PlayerTurn);
    assert_eq!(engine.computer().shots_fired(), 0);
    assert_eq!(engine.computer().tracking().get((9, 9)), Some(Mark::Miss));
}

#[test]
fn test_player_shot_on_stale_cell_keeps_the_turn() {
    let mut engine = GameEngine::new(side((0, 0), &[]), side((5, 5), &[(3, 3)]));
    let report = engine.player_shot((3, 3)).unwrap();
    assert_eq!(report.result, ShotResult::AlreadyFired);
    assert_eq!(engine.status(), GameStatus::PlayerTurn);
    assert_eq!(engine.player().shots_fired(), 0);
    assert!(engine.player().tracking().is_unknown((3, 3)));
}

#[test]
fn test_declare_draw() {
    let mut engine = engine();
    engine.declare_draw().unwrap();
    assert_eq!(engine.status(), GameStatus::Draw);
    assert_eq!(engine.outcome().unwrap().status.winner(), None);
    assert_eq!(engine.declare_draw().unwrap_err(), GameError::GameOver);
}
