//! Board tests - collision, locking and line clearing

use blockfall::core::{Board, LockError};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(row, col), Some(None), "({}, {}) should be empty", row, col);
            assert!(!board.is_blocked(row, col));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_HEIGHT as i8, 0), None);
    assert_eq!(board.get(0, BOARD_WIDTH as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(10, 5, Some(PieceKind::T)));
    assert_eq!(board.get(10, 5), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(10, 5));

    assert!(board.set(10, 5, None));
    assert_eq!(board.get(10, 5), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_WIDTH as i8, Some(PieceKind::T)));
}

#[test]
fn test_rows_above_board_never_block() {
    let mut board = Board::new();
    board.fill_row(0, PieceKind::I);

    for col in 0..BOARD_WIDTH as i8 {
        assert!(!board.is_blocked(-1, col));
        assert!(!board.is_blocked(-4, col));
        assert!(board.is_blocked(0, col));
    }
}

#[test]
fn test_floor_always_blocks() {
    let board = Board::new();
    for col in 0..BOARD_WIDTH as i8 {
        assert!(board.is_blocked(BOARD_HEIGHT as i8, col));
        assert!(board.is_blocked(BOARD_HEIGHT as i8 + 3, col));
    }
}

#[test]
fn test_walls() {
    let board = Board::new();
    assert!(board.is_inside_horizontally(0));
    assert!(board.is_inside_horizontally(BOARD_WIDTH as i8 - 1));
    assert!(!board.is_inside_horizontally(-1));
    assert!(!board.is_inside_horizontally(BOARD_WIDTH as i8));
}

#[test]
fn test_lock_writes_kind() {
    let mut board = Board::new();
    let cells = [(18, 0), (18, 1), (19, 0), (19, 1)];

    assert_eq!(board.lock(&cells, PieceKind::O), Ok(()));
    for (row, col) in cells {
        assert_eq!(board.get(row, col), Some(Some(PieceKind::O)));
    }
    assert_eq!(board.get(17, 0), Some(None));
}

#[test]
fn test_lock_failures_leave_board_untouched() {
    let mut board = Board::new();
    board.set(19, 3, Some(PieceKind::Z));
    let before = board.clone();

    assert_eq!(
        board.lock(&[(0, 4), (-1, 4)], PieceKind::I),
        Err(LockError::AboveTop { row: -1, col: 4 })
    );
    assert_eq!(
        board.lock(&[(19, 0), (20, 0)], PieceKind::I),
        Err(LockError::BelowBottom { row: 20, col: 0 })
    );
    assert_eq!(
        board.lock(&[(5, 9), (5, 10)], PieceKind::I),
        Err(LockError::OutsideWalls { row: 5, col: 10 })
    );
    assert_eq!(
        board.lock(&[(19, 2), (19, 3)], PieceKind::I),
        Err(LockError::Occupied { row: 19, col: 3 })
    );

    assert_eq!(board, before);
}

#[test]
fn test_clear_no_full_rows() {
    let mut board = Board::new();
    board.set(19, 0, Some(PieceKind::J));
    let before = board.clone();

    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_clear_two_separated_rows() {
    let mut board = Board::new();
    board.fill_row(5, PieceKind::I);
    board.fill_row(10, PieceKind::L);
    // Markers above, between and below the full rows.
    board.set(4, 0, Some(PieceKind::T));
    board.set(7, 1, Some(PieceKind::S));
    board.set(12, 2, Some(PieceKind::Z));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[10, 5]);

    // Below both cleared rows: unchanged.
    assert_eq!(board.get(12, 2), Some(Some(PieceKind::Z)));
    // Between them: shifted down by one.
    assert_eq!(board.get(8, 1), Some(Some(PieceKind::S)));
    assert_eq!(board.get(7, 1), Some(None));
    // Above both: shifted down by two.
    assert_eq!(board.get(6, 0), Some(Some(PieceKind::T)));
    assert_eq!(board.get(4, 0), Some(None));

    // The two new top rows are empty and nothing is full any more.
    for row in 0..2 {
        for col in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(row, col), Some(None));
        }
    }
    assert!((0..BOARD_HEIGHT as usize).all(|row| !board.is_row_full(row)));
}

#[test]
fn test_clear_whole_stack() {
    let mut board = Board::new();
    for row in 16..BOARD_HEIGHT as i8 {
        board.fill_row(row, PieceKind::O);
    }

    assert_eq!(board.clear_full_rows().len(), 4);
    assert_eq!(board, Board::new());
}

#[test]
fn test_row_count_is_fixed() {
    let mut board = Board::new();
    board.fill_row(19, PieceKind::I);
    board.clear_full_rows();
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
    assert_eq!(board.cells().len(), (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize));
}
