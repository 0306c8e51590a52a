use battleship_lab::{validate, BoardError, Cell, GameConfig, Orientation, PlacementError, Ship};

fn standard_fleet() -> Vec<Ship> {
    vec![
        Ship::new(vec![(8, 1), (8, 2), (8, 3), (8, 4), (8, 5)]),
        Ship::new(vec![(7, 6), (7, 7), (7, 8), (7, 9)]),
        Ship::new(vec![(2, 6), (3, 6), (4, 6)]),
        Ship::new(vec![(6, 4), (6, 5), (6, 6)]),
        Ship::new(vec![(3, 5), (4, 5)]),
    ]
}

#[test]
fn accepts_a_standard_fleet() {
    let fleet = validate(&standard_fleet(), &GameConfig::default()).unwrap();
    assert_eq!(fleet.sorted_sizes(), vec![2, 3, 3, 4, 5]);
    assert_eq!(fleet.cell_count(), 17);
    assert_eq!(fleet.ship_at((7, 8)), Some(1));
    assert_eq!(fleet.ship_at((0, 0)), None);

    let board = fleet.board(10, 10).unwrap();
    assert_eq!(board.count(Cell::Empty), 83);
    assert_eq!(board.get(8, 1), Ok(Cell::Ship(0)));
    assert_eq!(board.get(3, 5), Ok(Cell::Ship(4)));
}

#[test]
fn rejects_cells_out_of_order() {
    let config = GameConfig::default();
    let mut ships = standard_fleet();
    ships[4] = Ship::new(vec![(4, 5), (3, 5)]);
    assert_eq!(
        validate(&ships, &config),
        Err(PlacementError::NotContiguous { ship: 4 })
    );

    let mut ships = standard_fleet();
    ships[0] = Ship::new(vec![(8, 3), (8, 1), (8, 5), (8, 2), (8, 4)]);
    assert_eq!(
        validate(&ships, &config),
        Err(PlacementError::NotContiguous { ship: 0 })
    );
}

#[test]
fn rejects_wrong_ship_count() {
    let mut ships = standard_fleet();
    ships.pop();
    assert_eq!(
        validate(&ships, &GameConfig::default()),
        Err(PlacementError::WrongShipCount {
            expected: 5,
            found: 4
        })
    );
}

#[test]
fn rejects_wrong_sizes() {
    let mut ships = standard_fleet();
    ships[4] = Ship::straight((0, 0), Orientation::Horizontal, 3);
    assert_eq!(
        validate(&ships, &GameConfig::default()),
        Err(PlacementError::WrongSizeMultiset {
            expected: vec![2, 3, 3, 4, 5],
            found: vec![3, 3, 3, 4, 5],
        })
    );
}

#[test]
fn rejects_gaps_diagonals_and_repeats() {
    let config = GameConfig::default();
    for cells in [
        vec![(3, 5), (5, 5)],
        vec![(0, 0), (1, 1)],
        vec![(3, 5), (3, 5)],
        vec![(0, usize::MAX), (0, usize::MAX)],
        vec![(usize::MAX, 0), (usize::MAX, 0)],
        vec![(0, usize::MAX), (0, 0)],
    ] {
        let mut ships = standard_fleet();
        ships[4] = Ship::new(cells);
        assert_eq!(
            validate(&ships, &config),
            Err(PlacementError::NotContiguous { ship: 4 })
        );
    }
}

#[test]
fn rejects_cells_off_the_board() {
    let mut ships = standard_fleet();
    ships[4] = Ship::new(vec![(9, 0), (10, 0)]);
    assert_eq!(
        validate(&ships, &GameConfig::default()),
        Err(PlacementError::OutOfBounds {
            ship: 4,
            cell: (10, 0)
        })
    );
}

#[test]
fn rejects_overlapping_ships() {
    let config = GameConfig::default().with_ships(vec![3, 2]);
    let ships = vec![
        Ship::new(vec![(0, 0), (0, 1), (0, 2)]),
        Ship::new(vec![(0, 1), (1, 1)]),
    ];
    assert_eq!(
        validate(&ships, &config),
        Err(PlacementError::Overlap {
            ship: 1,
            other: 0,
            cell: (0, 1)
        })
    );
}

#[test]
fn reports_the_first_failing_check() {
    let config = GameConfig::default();

    // wrong count wins over overlap
    let mut ships = standard_fleet();
    ships[3] = ships[2].clone();
    ships.pop();
    assert!(matches!(
        validate(&ships, &config),
        Err(PlacementError::WrongShipCount { .. })
    ));

    // contiguity is checked before bounds
    let mut ships = standard_fleet();
    ships[3] = Ship::new(vec![(11, 0), (11, 1), (11, 3)]);
    assert_eq!(
        validate(&ships, &config),
        Err(PlacementError::NotContiguous { ship: 3 })
    );

    // bounds are checked before overlap
    let mut ships = standard_fleet();
    ships[2] = Ship::new(vec![(8, 1), (9, 1), (10, 1)]);
    assert_eq!(
        validate(&ships, &config),
        Err(PlacementError::OutOfBounds {
            ship: 2,
            cell: (10, 1)
        })
    );
}

#[test]
fn repeated_cell_at_the_edge_of_usize_is_rejected() {
    let config = GameConfig::default().with_ships(vec![2]);
    let ships = [Ship::new(vec![(0, usize::MAX), (0, usize::MAX)])];
    assert_eq!(
        validate(&ships, &config),
        Err(PlacementError::NotContiguous { ship: 0 })
    );
}

#[test]
fn fleet_board_rejects_smaller_dimensions() {
    let fleet = validate(&standard_fleet(), &GameConfig::default()).unwrap();
    assert_eq!(
        fleet.board(8, 8),
        Err(BoardError::OutOfBounds {
            row: 8,
            col: 1,
            width: 8,
            height: 8
        })
    );
    assert!(fleet.board(10, 10).is_ok());
}

#[test]
fn small_board_single_ship() {
    let config = GameConfig::with_dimensions(4, 4).with_ships(vec![2]);
    let fleet = validate(&[Ship::new(vec![(0, 0), (0, 1)])], &config).unwrap();
    assert_eq!(fleet.cell_count(), 2);
    assert!(validate(&[Ship::new(vec![(3, 3), (3, 4)])], &config).is_err());
}

#[test]
fn straight_ships_report_orientation() {
    let ship = Ship::straight((2, 3), Orientation::Vertical, 3);
    assert_eq!(ship.cells(), &[(2, 3), (3, 3), (4, 3)]);
    assert_eq!(ship.orientation(), Some(Orientation::Vertical));
    assert!(ship.is_contiguous());
    assert_eq!(Ship::new(vec![(0, 0)]).orientation(), None);
}
