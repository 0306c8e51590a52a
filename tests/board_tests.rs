use battleship_lab::{Board, BoardError, Cell};

#[test]
fn new_board_is_empty() {
    let board = Board::new(4, 3);
    assert_eq!(board.width(), 4);
    assert_eq!(board.height(), 3);
    assert_eq!(board.count(Cell::Empty), 12);
    assert_eq!(board.rows().count(), 3);
    assert!(board.rows().all(|row| row.len() == 4));
}

#[test]
fn set_then_get() {
    let mut board = Board::new(10, 10);
    board.set(2, 7, Cell::Ship(3)).unwrap();
    board.set(9, 9, Cell::Miss).unwrap();
    assert_eq!(board.get(2, 7), Ok(Cell::Ship(3)));
    assert_eq!(board.get(9, 9), Ok(Cell::Miss));
    assert_eq!(board.get(7, 2), Ok(Cell::Empty));

    board.set(2, 7, Cell::Hit).unwrap();
    assert_eq!(board.get(2, 7), Ok(Cell::Hit));
    assert_eq!(board.count(Cell::Empty), 98);
}

#[test]
fn out_of_bounds_access_fails_and_leaves_board_untouched() {
    let mut board = Board::new(10, 10);
    assert_eq!(
        board.get(10, 0),
        Err(BoardError::OutOfBounds {
            row: 10,
            col: 0,
            width: 10,
            height: 10
        })
    );
    let before = board.clone();
    assert!(board.set(0, 10, Cell::Hit).is_err());
    assert!(board.set(usize::MAX, 0, Cell::Hit).is_err());
    assert_eq!(board, before);
}

#[test]
fn rows_are_bounded_by_height_and_columns_by_width() {
    let board = Board::new(5, 2);
    assert!(board.get(1, 4).is_ok());
    assert!(board.get(2, 0).is_err());
    assert!(board.get(0, 5).is_err());
    assert!(board.in_bounds((1, 4)));
    assert!(!board.in_bounds((4, 1)));
}

#[test]
fn coords_are_row_major() {
    let board = Board::new(2, 2);
    assert_eq!(
        board.coords().collect::<Vec<_>>(),
        vec![(0, 0), (0, 1), (1, 0), (1, 1)]
    );
}

#[test]
fn debug_output_draws_the_grid() {
    let mut board = Board::new(3, 2);
    board.set(0, 0, Cell::Ship(0)).unwrap();
    board.set(0, 1, Cell::Ship(1)).unwrap();
    board.set(1, 1, Cell::Hit).unwrap();
    board.set(1, 2, Cell::Miss).unwrap();
    let text = format!("{:?}", board);
    assert!(text.starts_with("Board 3x2 {"));
    assert!(text.contains("  AB.\n"));
    assert!(text.contains("  .Xo\n"));
}
