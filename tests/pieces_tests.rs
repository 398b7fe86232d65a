//! Pieces tests - base shapes, derived rotations and spawn placement

use blockfall::core::{base_shape, shape_of, spawn_col, Board, Tetromino};
use blockfall::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_ROW};

fn offsets(kind: PieceKind, rotation: Rotation) -> Vec<(i8, i8)> {
    shape_of(kind, rotation).offsets().collect()
}

// ============== Shape Tests ==============

#[test]
fn test_base_shape_sizes() {
    assert_eq!(base_shape(PieceKind::I).size(), 4);
    assert_eq!(base_shape(PieceKind::O).size(), 2);
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        assert_eq!(base_shape(kind).size(), 3, "{:?}", kind);
    }
}

#[test]
fn test_i_piece_shapes() {
    assert_eq!(offsets(PieceKind::I, Rotation::North), [(1, 0), (1, 1), (1, 2), (1, 3)]);
    assert_eq!(offsets(PieceKind::I, Rotation::East), [(0, 2), (1, 2), (2, 2), (3, 2)]);
    assert_eq!(offsets(PieceKind::I, Rotation::South), [(2, 0), (2, 1), (2, 2), (2, 3)]);
    assert_eq!(offsets(PieceKind::I, Rotation::West), [(0, 1), (1, 1), (2, 1), (3, 1)]);
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let north = offsets(PieceKind::O, Rotation::North);
    assert_eq!(north, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    for rotation in [Rotation::East, Rotation::South, Rotation::West] {
        assert_eq!(offsets(PieceKind::O, rotation), north);
    }
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(offsets(PieceKind::T, Rotation::North), [(0, 1), (1, 0), (1, 1), (1, 2)]);
    assert_eq!(offsets(PieceKind::T, Rotation::East), [(0, 1), (1, 1), (1, 2), (2, 1)]);
    assert_eq!(offsets(PieceKind::T, Rotation::South), [(1, 0), (1, 1), (1, 2), (2, 1)]);
    assert_eq!(offsets(PieceKind::T, Rotation::West), [(0, 1), (1, 0), (1, 1), (2, 1)]);
}

#[test]
fn test_four_rotations_return_to_base() {
    for kind in PieceKind::ALL {
        let base = *base_shape(kind);
        let mut shape = base;
        for _ in 0..4 {
            shape = shape.rotate_cw();
        }
        assert_eq!(shape, base, "{:?}", kind);
    }
}

#[test]
fn test_table_matches_rotation_steps() {
    for kind in PieceKind::ALL {
        let mut rotation = Rotation::North;
        for _ in 0..4 {
            let next = rotation.rotate_cw();
            assert_eq!(*shape_of(kind, next), shape_of(kind, rotation).rotate_cw());
            rotation = next;
        }
    }
}

#[test]
fn test_every_orientation_has_four_cells_inside_box() {
    for kind in PieceKind::ALL {
        for turns in 0..4 {
            let shape = shape_of(kind, Rotation::from_turns(turns));
            let cells: Vec<_> = shape.offsets().collect();
            assert_eq!(cells.len(), 4, "{:?} turns={}", kind, turns);
            let n = shape.size() as i8;
            assert!(cells.iter().all(|&(r, c)| (0..n).contains(&r) && (0..n).contains(&c)));
        }
    }
}

// ============== Spawn Tests ==============

#[test]
fn test_spawn_columns() {
    assert_eq!(spawn_col(PieceKind::I), 3);
    assert_eq!(spawn_col(PieceKind::O), 4);
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        assert_eq!(spawn_col(kind), 3, "{:?}", kind);
    }
}

#[test]
fn test_spawn_position_is_above_board_and_inside_walls() {
    for kind in PieceKind::ALL {
        let piece = Tetromino::spawn(kind);
        assert_eq!(piece.row, SPAWN_ROW);
        assert_eq!(piece.rotation, Rotation::North);
        for (_, col) in piece.cells() {
            assert!(col >= 0 && col < BOARD_WIDTH as i8);
        }
    }
}

// ============== Validity Tests ==============

fn full_board() -> Board {
    let mut board = Board::new();
    for row in 0..BOARD_HEIGHT as i8 {
        board.fill_row(row, PieceKind::Z);
    }
    board
}

#[test]
fn test_cells_above_board_are_valid_on_full_board() {
    let board = full_board();
    for kind in PieceKind::ALL {
        for turns in 0..4 {
            // A 4-tall box anchored at row -4 stays entirely above row 0.
            for col in 0..=(BOARD_WIDTH as i8 - shape_of(kind, Rotation::from_turns(turns)).size() as i8) {
                let piece = Tetromino {
                    kind,
                    rotation: Rotation::from_turns(turns),
                    row: -4,
                    col,
                };
                assert!(piece.is_valid(&board), "{:?} turns={} col={}", kind, turns, col);
                assert!(!piece.shifted(4, 0).is_valid(&board));
            }
        }
    }
}

#[test]
fn test_cells_past_walls_are_invalid() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        for turns in 0..4 {
            let rotation = Rotation::from_turns(turns);
            let shape = shape_of(kind, rotation);
            let min_dc = shape.offsets().map(|(_, dc)| dc).min().unwrap();
            let max_dc = shape.offsets().map(|(_, dc)| dc).max().unwrap();

            for row in [-4, 5] {
                let hugging_left = Tetromino { kind, rotation, row, col: -min_dc };
                let hugging_right = Tetromino { kind, rotation, row, col: BOARD_WIDTH as i8 - 1 - max_dc };
                assert!(hugging_left.is_valid(&board));
                assert!(hugging_right.is_valid(&board));

                // One more step puts a cell on col -1 or col BOARD_WIDTH.
                assert!(!hugging_left.shifted(0, -1).is_valid(&board));
                assert!(!hugging_right.shifted(0, 1).is_valid(&board));
            }
        }
    }
}

#[test]
fn test_shifted_saturates_instead_of_overflowing() {
    let piece = Tetromino {
        kind: PieceKind::T,
        rotation: Rotation::North,
        row: i8::MAX - 1,
        col: i8::MIN + 1,
    }
    .shifted(10, -10);
    assert_eq!(piece.row, i8::MAX);
    assert_eq!(piece.col, i8::MIN);
    assert_eq!(piece.cells().len(), 4);
    assert!(!piece.is_valid(&Board::new()));
}
