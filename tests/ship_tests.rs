use fleetfire::{Board, Cell, Fleet, Orientation, ShipDef, ShotResult, SHIPS, TOTAL_SHIP_CELLS};

fn fleet_on(board: &mut Board, ships: &[(ShipDef, (usize, usize), Orientation)]) -> Fleet {
    let mut fleet = Fleet::new();
    for &(def, origin, orient) in ships {
        let cells = board.place_ship(origin, def.length(), orient).unwrap();
        fleet.insert(def, cells);
    }
    fleet
}

#[test]
fn test_orientation_steps() {
    let cells: Vec<_> = Orientation::Vertical.cells((0, 0), 4).collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    let cells: Vec<_> = Orientation::Horizontal.cells((3, 7), 3).collect();
    assert_eq!(cells, vec![(3, 7), (3, 8), (3, 9)]);
}

#[test]
fn test_standard_ship_table() {
    let names: Vec<_> = SHIPS.iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        vec!["Carrier", "Battleship", "Cruiser", "Submarine", "Destroyer"]
    );
    let total: usize = SHIPS.iter().map(|s| s.length()).sum();
    assert_eq!(total, TOTAL_SHIP_CELLS);
}

#[test]
fn test_ship_at_and_lookup() {
    let mut board = Board::new();
    let fleet = fleet_on(
        &mut board,
        &[
            (SHIPS[2], (4, 4), Orientation::Horizontal),
            (SHIPS[4], (0, 0), Orientation::Vertical),
        ],
    );
    assert_eq!(fleet.len(), 2);
    assert_eq!(fleet.ship_at((4, 6)).map(|s| s.name()), Some("Cruiser"));
    assert_eq!(fleet.ship_at((1, 0)).map(|s| s.name()), Some("Destroyer"));
    assert!(fleet.ship_at((5, 5)).is_none());
    assert_eq!(fleet.get("Destroyer").unwrap().cells(), &[(0, 0), (1, 0)]);
    assert!(fleet.get("Carrier").is_none());
}

#[test]
fn test_sunk_only_on_last_cell() {
    let mut board = Board::new();
    let fleet = fleet_on(&mut board, &[(SHIPS[2], (4, 4), Orientation::Horizontal)]);
    assert_eq!(board.fire(&fleet, (4, 5)).unwrap(), ShotResult::Hit);
    assert_eq!(board.fire(&fleet, (4, 4)).unwrap(), ShotResult::Hit);
    assert!(!fleet.get("Cruiser").unwrap().is_sunk(&board));
    assert_eq!(board.fire(&fleet, (4, 6)).unwrap(), ShotResult::Sunk("Cruiser"));
    assert!(fleet.get("Cruiser").unwrap().is_sunk(&board));
}

#[test]
fn test_fleet_destroyed_iff_every_cell_hit() {
    let ships = [
        (SHIPS[0], (0, 0), Orientation::Horizontal),
        (SHIPS[4], (5, 5), Orientation::Vertical),
    ];
    let mut board = Board::new();
    let fleet = fleet_on(&mut board, &ships);

    let all_cells: Vec<_> = fleet
        .ships()
        .iter()
        .flat_map(|s| s.cells().iter().copied())
        .collect();
    let (last, rest) = all_cells.split_last().unwrap();

    for &cell in rest {
        board.fire(&fleet, cell).unwrap();
    }
    // Identical position except one ship cell still intact.
    assert!(!fleet.is_destroyed(&board));
    assert_eq!(board.get(*last), Some(Cell::ShipPresent));
    assert_eq!(fleet.afloat(&board).map(|s| s.name()).collect::<Vec<_>>(), vec!["Destroyer"]);

    assert_eq!(board.fire(&fleet, *last).unwrap(), ShotResult::Sunk("Destroyer"));
    assert!(fleet.is_destroyed(&board));
    assert_eq!(fleet.afloat(&board).count(), 0);
}
