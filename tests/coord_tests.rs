use battleship_engine::{from_letter_number, parse_coordinate, Coordinate, CoordinateError};

#[test]
fn test_letter_number_maps_to_row_and_column() {
    assert_eq!(from_letter_number('A', 1, 10), Ok(Coordinate::new(0, 0)));
    assert_eq!(from_letter_number('b', 7, 10), Ok(Coordinate::new(1, 6)));
    assert_eq!(from_letter_number('J', 10, 10), Ok(Coordinate::new(9, 9)));
}

#[test]
fn test_letter_outside_board_rejected() {
    assert_eq!(
        from_letter_number('K', 1, 10),
        Err(CoordinateError::InvalidLetter { letter: 'K', size: 10 })
    );
    assert!(matches!(
        from_letter_number('?', 1, 10),
        Err(CoordinateError::InvalidLetter { .. })
    ));
    let err = from_letter_number('E', 2, 4).unwrap_err();
    assert_eq!(err.to_string(), "row letter 'E' is outside A..D for a board of size 4");
}

#[test]
fn test_number_outside_board_rejected() {
    assert_eq!(
        from_letter_number('A', 0, 10),
        Err(CoordinateError::InvalidNumber { number: 0, size: 10 })
    );
    assert_eq!(
        from_letter_number('A', 11, 10),
        Err(CoordinateError::InvalidNumber { number: 11, size: 10 })
    );
}

#[test]
fn test_parse_notation() {
    assert_eq!(parse_coordinate("c10", 10), Ok(Coordinate::new(2, 9)));
    assert_eq!(parse_coordinate(" J 3 ", 10), Ok(Coordinate::new(9, 2)));
    assert_eq!("B2".parse::<Coordinate>(), Ok(Coordinate::new(1, 1)));
    for bad in ["", "A", "7", "AB", "A-1"] {
        assert!(
            matches!(parse_coordinate(bad, 10), Err(CoordinateError::Malformed(_))),
            "{:?} should be malformed",
            bad
        );
    }
}

#[test]
fn test_display_round_trips_through_parse() {
    let coord = Coordinate::new(4, 7);
    assert_eq!(coord.to_string(), "E8");
    assert_eq!(coord.to_string().parse::<Coordinate>(), Ok(coord));
    assert_eq!(Coordinate::new(30, 1).to_string(), "(30, 1)");
}

#[test]
fn test_cursor_index_conversion() {
    assert_eq!(Coordinate::from_index(0, 10), Coordinate::new(0, 0));
    assert_eq!(Coordinate::from_index(37, 10), Coordinate::new(3, 7));
    assert_eq!(Coordinate::new(3, 7).to_index(10), 37);
    assert_eq!(Coordinate::from_index(5, 4), Coordinate::new(1, 1));
    assert!(Coordinate::new(9, 9).in_bounds(10));
    assert!(!Coordinate::new(9, 10).in_bounds(10));
}

#[test]
fn test_neighbors_clip_at_origin() {
    let mut corner: Vec<_> = Coordinate::new(0, 0).neighbors().collect();
    corner.sort();
    assert_eq!(
        corner,
        vec![Coordinate::new(0, 1), Coordinate::new(1, 0), Coordinate::new(1, 1)]
    );
    let inner: Vec<_> = Coordinate::from((5, 5)).neighbors().collect();
    assert_eq!(inner.len(), 8);
    assert!(!inner.contains(&Coordinate::new(5, 5)));
}
