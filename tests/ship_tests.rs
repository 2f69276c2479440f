use battleship_engine::{Coordinate, Orientation, Ship, ShipClass, ShipError};

#[test]
fn test_new_horizontal_extends_along_columns() -> Result<(), ShipError> {
    let ship = Ship::new(Coordinate::new(2, 1), 3, Orientation::Horizontal)?;
    assert_eq!(
        ship.cells(),
        &[Coordinate::new(2, 1), Coordinate::new(2, 2), Coordinate::new(2, 3)]
    );
    assert_eq!(ship.origin(), Coordinate::new(2, 1));
    assert_eq!(ship.length(), 3);
    Ok(())
}

#[test]
fn test_new_vertical_extends_along_rows() -> Result<(), ShipError> {
    let ship = Ship::new(Coordinate::new(0, 0), 4, Orientation::Vertical)?;
    let cells: Vec<_> = ship.cells().iter().map(|c| (c.row, c.col)).collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert!(ship.occupies(Coordinate::new(3, 0)));
    assert!(!ship.occupies(Coordinate::new(4, 0)));
    Ok(())
}

#[test]
fn test_construction_ignores_board_bounds() -> Result<(), ShipError> {
    let ship = Ship::new(Coordinate::new(9, 9), 5, Orientation::Horizontal)?;
    assert_eq!(ship.cells().last(), Some(&Coordinate::new(9, 13)));
    Ok(())
}

#[test]
fn test_zero_length_rejected() {
    assert_eq!(
        Ship::new(Coordinate::new(0, 0), 0, Orientation::Vertical).unwrap_err(),
        ShipError::ZeroLength
    );
}

#[test]
fn test_orientation_codes() {
    assert_eq!("H".parse::<Orientation>().unwrap(), Orientation::Horizontal);
    assert_eq!("v".parse::<Orientation>().unwrap(), Orientation::Vertical);
    assert_eq!(" vertical ".parse::<Orientation>().unwrap(), Orientation::Vertical);
    assert_eq!(Orientation::try_from('h').unwrap(), Orientation::Horizontal);
    assert_eq!(Orientation::Vertical.code(), 'V');
}

#[test]
fn test_invalid_orientation_fails_fast() {
    let err = Ship::from_code(Coordinate::new(0, 0), 3, "D").unwrap_err();
    assert_eq!(err, ShipError::InvalidOrientation("D".to_string()));
    assert!(Orientation::try_from('x').is_err());
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), ShipError> {
    let mut ship = Ship::from_code(Coordinate::new(1, 1), 2, "H")?;
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(Coordinate::new(1, 1)));
    assert!(!ship.is_sunk());
    // miss leaves the ship alone
    assert!(!ship.register_hit(Coordinate::new(0, 0)));
    assert_eq!(ship.hits().len(), 1);
    assert!(ship.register_hit(Coordinate::new(1, 2)));
    assert!(ship.is_sunk());
    // hitting the same cell again keeps it sunk
    assert!(ship.register_hit(Coordinate::new(1, 2)));
    assert!(ship.is_sunk());
    assert_eq!(ship.hits().len(), 2);
    Ok(())
}

#[test]
fn test_touches_includes_diagonals() -> Result<(), ShipError> {
    let ship = Ship::new(Coordinate::new(3, 3), 2, Orientation::Horizontal)?;
    assert!(ship.touches(Coordinate::new(2, 2)));
    assert!(ship.touches(Coordinate::new(4, 5)));
    assert!(ship.touches(Coordinate::new(3, 4)));
    assert!(!ship.touches(Coordinate::new(3, 6)));
    assert!(!ship.touches(Coordinate::new(1, 3)));
    Ok(())
}

#[test]
fn test_ship_classes() -> Result<(), ShipError> {
    assert_eq!(ShipClass::for_length(5).map(|c| c.name()), Some("Aircraft carrier"));
    assert_eq!(ShipClass::for_length(1).map(|c| c.name()), Some("Destroyer"));
    assert_eq!(ShipClass::for_length(7), None);
    let ship = Ship::new(Coordinate::new(0, 0), 4, Orientation::Vertical)?;
    assert_eq!(ship.class().map(|c| c.name()), Some("Battleship"));
    Ok(())
}

#[test]
fn test_cells_past_usize_max_rejected() {
    assert_eq!(
        Ship::new(Coordinate::new(0, usize::MAX), 2, Orientation::Horizontal).unwrap_err(),
        ShipError::OutOfRange
    );
    assert_eq!(
        Ship::new(Coordinate::new(usize::MAX - 1, 3), 3, Orientation::Vertical).unwrap_err(),
        ShipError::OutOfRange
    );
    let edge = Ship::new(Coordinate::new(0, usize::MAX), 1, Orientation::Horizontal).unwrap();
    assert_eq!(edge.cells(), &[Coordinate::new(0, usize::MAX)]);
}

#[test]
fn test_far_away_ship_rejected_by_board() {
    let ship = Ship::new(Coordinate::new(usize::MAX - 1, 0), 2, Orientation::Vertical).unwrap();
    let mut board = battleship_engine::Board::default();
    let err = board.add_all(vec![ship]).unwrap_err();
    assert_eq!(err.violation, battleship_engine::Violation::OutOfBounds);
}
