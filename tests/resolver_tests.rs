use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    add_random_ships, place_ship, resolve, AttackOutcome, Board, BoardError, CellState, Coord,
    Orientation,
};

fn state(board: &Board, x: usize, y: usize) -> CellState {
    board.grid().state_at(Coord::new(x, y)).unwrap()
}

#[test]
fn test_miss_marks_only_target() {
    let mut board = Board::new();
    place_ship(&mut board, Coord::new(5, 5), 1, Orientation::Horizontal).unwrap();
    assert_eq!(resolve(&mut board, Coord::new(0, 0)).unwrap(), AttackOutcome::Miss);
    assert_eq!(state(&board, 0, 0), CellState::Miss);
    assert_eq!(board.grid().count(CellState::Miss), 1);
    assert_eq!(board.grid().count(CellState::Deflected), 0);
}

#[test]
fn test_hit_deflects_diagonals_only() {
    let mut board = Board::new();
    place_ship(&mut board, Coord::new(3, 3), 3, Orientation::Horizontal).unwrap();
    assert_eq!(resolve(&mut board, Coord::new(4, 3)).unwrap(), AttackOutcome::Hit);

    assert_eq!(state(&board, 4, 3), CellState::ShipHit);
    for (x, y) in [(3, 2), (5, 2), (3, 4), (5, 4)] {
        assert_eq!(state(&board, x, y), CellState::Deflected, "({}, {})", x, y);
    }
    // orthogonal neighbours untouched
    assert_eq!(state(&board, 4, 2), CellState::Empty);
    assert_eq!(state(&board, 4, 4), CellState::Empty);
    assert_eq!(state(&board, 3, 3), CellState::ShipIntact);
    assert_eq!(state(&board, 5, 3), CellState::ShipIntact);
    assert_eq!(board.grid().count(CellState::Deflected), 4);
}

#[test]
fn test_destruction_halo() {
    let mut board = Board::new();
    place_ship(&mut board, Coord::new(0, 0), 2, Orientation::Vertical).unwrap();
    place_ship(&mut board, Coord::new(9, 9), 1, Orientation::Horizontal).unwrap();

    assert_eq!(resolve(&mut board, Coord::new(0, 0)).unwrap(), AttackOutcome::Hit);
    assert_eq!(state(&board, 1, 1), CellState::Deflected);
    assert_eq!(
        resolve(&mut board, Coord::new(0, 1)).unwrap(),
        AttackOutcome::HitAndDestroyed
    );

    assert_eq!(state(&board, 0, 0), CellState::ShipDestroyed);
    assert_eq!(state(&board, 0, 1), CellState::ShipDestroyed);
    for (x, y) in [(1, 0), (1, 1), (0, 2), (1, 2)] {
        assert_eq!(state(&board, x, y), CellState::Deflected, "({}, {})", x, y);
    }
    assert_eq!(board.grid().count(CellState::Deflected), 4);
    assert_eq!(board.grid().count(CellState::Empty), 100 - 2 - 1 - 4);
    assert_eq!(state(&board, 9, 9), CellState::ShipIntact);
}

#[test]
fn test_single_cell_ship_destroyed_in_one_shot() {
    let mut board = Board::new();
    place_ship(&mut board, Coord::new(4, 4), 1, Orientation::Horizontal).unwrap();
    place_ship(&mut board, Coord::new(0, 0), 1, Orientation::Horizontal).unwrap();
    assert_eq!(
        resolve(&mut board, Coord::new(4, 4)).unwrap(),
        AttackOutcome::HitAndDestroyed
    );
    assert_eq!(board.grid().count(CellState::Deflected), 8);
}

#[test]
fn test_last_ship_wins() {
    let mut board = Board::new();
    place_ship(&mut board, Coord::new(4, 4), 1, Orientation::Horizontal).unwrap();
    assert_eq!(
        resolve(&mut board, Coord::new(4, 4)).unwrap(),
        AttackOutcome::HitAndWon
    );
    assert!(board.all_destroyed());
}

#[test]
fn test_sinking_full_fleet() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut board = Board::new();
    add_random_ships(&mut board, &mut rng).unwrap();
    let ships: Vec<_> = board.fleet().ships().to_vec();

    let mut outcomes = Vec::new();
    for ship in &ships {
        for coord in ship.cells() {
            outcomes.push(resolve(&mut board, coord).unwrap());
        }
    }
    assert_eq!(outcomes.len(), 20);
    assert_eq!(outcomes.last(), Some(&AttackOutcome::HitAndWon));
    let destroyed = outcomes
        .iter()
        .filter(|&&o| o == AttackOutcome::HitAndDestroyed)
        .count();
    assert_eq!(destroyed, 9);
    assert_eq!(board.grid().count(CellState::ShipDestroyed), 20);
    assert_eq!(board.fleet().surviving(board.grid()), 0);
}

#[test]
fn test_resolved_cells_are_rejected() {
    let mut board = Board::new();
    place_ship(&mut board, Coord::new(3, 3), 2, Orientation::Horizontal).unwrap();
    place_ship(&mut board, Coord::new(8, 8), 1, Orientation::Horizontal).unwrap();
    resolve(&mut board, Coord::new(0, 0)).unwrap();
    resolve(&mut board, Coord::new(3, 3)).unwrap();
    let before = board.clone();

    // miss, hit and deflected cells
    for (x, y) in [(0, 0), (3, 3), (2, 2)] {
        assert_eq!(
            resolve(&mut board, Coord::new(x, y)).unwrap_err(),
            BoardError::IllegalAttack { x, y }
        );
    }
    assert_eq!(board, before);

    resolve(&mut board, Coord::new(4, 3)).unwrap();
    assert_eq!(
        resolve(&mut board, Coord::new(4, 3)).unwrap_err(),
        BoardError::IllegalAttack { x: 4, y: 3 }
    );
}

#[test]
fn test_out_of_bounds_attack() {
    let mut board = Board::new();
    assert_eq!(
        resolve(&mut board, Coord::new(10, 3)).unwrap_err(),
        BoardError::OutOfBounds { x: 10, y: 3 }
    );
}
