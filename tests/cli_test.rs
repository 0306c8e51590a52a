use battleship_lab::cli::{coord_to_string, parse_coord};
use battleship_lab::{fleet_lines, guess_lines, Board, Cell};

#[test]
fn parses_letter_then_row() {
    assert_eq!(parse_coord("A5", 10, 10), Ok((4, 0)));
    assert_eq!(parse_coord("j10", 10, 10), Ok((9, 9)));
    assert_eq!(parse_coord("  c3\n", 10, 10), Ok((2, 2)));
    assert_eq!(parse_coord("Z26", 26, 26), Ok((25, 25)));
}

#[test]
fn rejects_bad_input() {
    for input in ["", "A", "5A", "K1", "A0", "A11", "Ax", "A-1"] {
        assert!(parse_coord(input, 10, 10).is_err(), "accepted {:?}", input);
    }
    assert!(parse_coord("E1", 4, 8).is_err());
    assert!(parse_coord("A9", 4, 8).is_err());
}

#[test]
fn error_messages_name_the_valid_range() {
    let err = parse_coord("K1", 10, 10).unwrap_err();
    assert!(err.contains("A-J"), "{}", err);
    let err = parse_coord("A11", 10, 10).unwrap_err();
    assert!(err.contains("1-10"), "{}", err);
}

#[test]
fn formats_column_letter_then_row() {
    assert_eq!(coord_to_string((6, 1)), "B7");
    assert_eq!(coord_to_string((0, 0)), "A1");
    assert_eq!(coord_to_string((9, 9)), "J10");
}

#[test]
fn formatted_coordinates_parse_back() {
    let board = Board::new(12, 9);
    for coord in board.coords() {
        assert_eq!(parse_coord(&coord_to_string(coord), 12, 9), Ok(coord));
    }
}

#[test]
fn fleet_lines_overlay_opponent_shots() {
    let mut fleet = Board::new(3, 2);
    fleet.set(0, 0, Cell::Ship(0)).unwrap();
    fleet.set(0, 1, Cell::Ship(0)).unwrap();
    fleet.set(1, 2, Cell::Ship(1)).unwrap();
    let mut shots = Board::new(3, 2);
    shots.set(0, 1, Cell::Hit).unwrap();
    shots.set(1, 0, Cell::Miss).unwrap();

    assert_eq!(
        fleet_lines(&fleet, &shots),
        vec!["    A B C", " 1  A X .", " 2  o . B"]
    );
}

#[test]
fn guess_lines_hide_everything_but_results() {
    let mut guesses = Board::new(2, 2);
    guesses.set(1, 1, Cell::Hit).unwrap();
    guesses.set(0, 1, Cell::Miss).unwrap();
    assert_eq!(guess_lines(&guesses), vec!["    A B", " 1  . o", " 2  . X"]);
}
