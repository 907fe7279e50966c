use seabattle::{
    place_ship, resolve, Board, BoardError, CellState, Coord, Grid, Mask, Orientation,
    Perspective,
};

#[test]
fn test_cell_at_bounds() {
    let grid = Grid::new();
    let cell = grid.cell_at(Coord::new(9, 9)).unwrap();
    assert_eq!(cell.coord, Coord::new(9, 9));
    assert_eq!(cell.state, CellState::Empty);
    assert_eq!(cell.ship, None);

    assert_eq!(
        grid.cell_at(Coord::new(10, 0)).unwrap_err(),
        BoardError::OutOfBounds { x: 10, y: 0 }
    );
    assert_eq!(
        grid.cell_at(Coord::new(0, 10)).unwrap_err(),
        BoardError::OutOfBounds { x: 0, y: 10 }
    );
}

#[test]
fn test_neighbour_counts() {
    let grid = Grid::new();
    assert_eq!(grid.neighbors8(Coord::new(0, 0)).len(), 3);
    assert_eq!(grid.neighbors8(Coord::new(0, 5)).len(), 5);
    assert_eq!(grid.neighbors8(Coord::new(5, 5)).len(), 8);

    assert_eq!(grid.neighbors_orth4(Coord::new(0, 0)).len(), 2);
    assert_eq!(grid.neighbors_orth4(Coord::new(5, 5)).len(), 4);

    let diag: Vec<_> = grid
        .neighbors_diag4(Coord::new(9, 9))
        .iter()
        .map(|c| c.coord)
        .collect();
    assert_eq!(diag, vec![Coord::new(8, 8)]);
}

#[test]
fn test_neighbours_exclude_centre() {
    let grid = Grid::new();
    let centre = Coord::new(4, 4);
    let ring = grid.neighbors8(centre);
    assert!(ring.iter().all(|c| c.coord != centre));
    let orth: Vec<_> = grid.neighbors_orth4(centre).iter().map(|c| c.coord).collect();
    for c in [
        Coord::new(3, 4),
        Coord::new(4, 3),
        Coord::new(5, 4),
        Coord::new(4, 5),
    ] {
        assert!(orth.contains(&c));
    }
}

#[test]
fn test_targetable_by_perspective() {
    let mut board = Board::new();
    place_ship(&mut board, Coord::new(2, 2), 1, Orientation::Horizontal).unwrap();

    let water = *board.grid().cell_at(Coord::new(0, 0)).unwrap();
    let ship = *board.grid().cell_at(Coord::new(2, 2)).unwrap();
    assert!(!water.is_targetable(Perspective::Owner));
    assert!(water.is_targetable(Perspective::Opponent));
    assert!(ship.is_targetable(Perspective::Owner));
    assert!(ship.is_targetable(Perspective::Opponent));

    resolve(&mut board, Coord::new(0, 0)).unwrap();
    let miss = *board.grid().cell_at(Coord::new(0, 0)).unwrap();
    assert!(!miss.is_targetable(Perspective::Opponent));
}

#[test]
fn test_display_signs() {
    let mut board = Board::new();
    place_ship(&mut board, Coord::new(0, 0), 2, Orientation::Horizontal).unwrap();
    resolve(&mut board, Coord::new(0, 0)).unwrap();
    resolve(&mut board, Coord::new(5, 5)).unwrap();

    let text = board.grid().to_string();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0], "X S _ _ _ _ _ _ _ _");
    assert_eq!(rows[1], "_ , _ _ _ _ _ _ _ _");
    assert_eq!(rows[5], "_ _ _ _ _ . _ _ _ _");
}

#[test]
fn test_blocked_mask_covers_buffer() {
    let mut board = Board::new();
    place_ship(&mut board, Coord::new(4, 4), 2, Orientation::Vertical).unwrap();
    let blocked = board.grid().blocked_mask();
    let expected =
        Mask::from_coords((3..=6).flat_map(|y| (3..=5).map(move |x| Coord::new(x, y)))).unwrap();
    assert_eq!(blocked, expected);
    assert_eq!(blocked.count_ones(), 12);
}
