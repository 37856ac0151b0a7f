//! Board tests

use blockfall::core::{Board, Shape};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.cells().len(), 200);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn test_walls_and_floor_block_but_sky_is_open() {
    let board = Board::new();
    assert!(board.blocks(-1, 5));
    assert!(board.blocks(BOARD_WIDTH as i8, 5));
    assert!(board.blocks(3, BOARD_HEIGHT as i8));
    assert!(!board.blocks(3, -1));
    assert!(!board.blocks(3, -3));
}

#[test]
fn test_collides_above_top_is_allowed() {
    let board = Board::new();
    let vertical_i = Shape::base(PieceKind::I).rotate_cw();
    // Rows -2 and -1 are off the board, rows 0 and 1 are empty.
    assert!(!board.collides(&vertical_i, 4, -2));
    assert!(board.collides(&vertical_i, -1, 0));
    assert!(board.collides(&vertical_i, 4, 17));
    assert!(!board.collides(&vertical_i, 4, 16));
}

#[test]
fn test_collides_with_settled_cells() {
    let mut board = Board::new();
    board.set(5, 1, Some(PieceKind::S));

    let t = Shape::base(PieceKind::T);
    assert!(board.collides(&t, 4, 0));
    assert!(!board.collides(&t, 6, 0));
}

#[test]
fn test_place_skips_cells_above_top() {
    let mut board = Board::new();
    let vertical_i = Shape::base(PieceKind::I).rotate_cw();
    board.place(&vertical_i, 0, -2, PieceKind::I);

    assert_eq!(board.filled_count(), 2);
    assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
    assert_eq!(board.get(0, 1), Some(Some(PieceKind::I)));
}

#[test]
fn test_clear_multiple_rows_shifts_down() {
    let mut board = Board::from_rows(&[
        "..T.......",
        "XXXXXXXXXX",
        "J.........",
        "XXXXXXXXXX",
        "XXXXXXXXXX",
    ])
    .unwrap();

    assert_eq!(board.clear_full_rows(), 3);
    assert_eq!(board.filled_count(), 2);
    assert_eq!(board.get(2, 18), Some(Some(PieceKind::T)));
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::J)));
}

#[test]
fn test_clear_no_full_rows() {
    let mut board = Board::from_rows(&["XXXXXXXXX."]).unwrap();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board.filled_count(), 9);
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert!(Board::from_rows(&["XXX"]).is_none());
    let too_many = vec![".........."; BOARD_HEIGHT as usize + 1];
    assert!(Board::from_rows(&too_many).is_none());
}

#[test]
fn test_write_grid_matches_cells() {
    let mut board = Board::new();
    board.set(9, 19, Some(PieceKind::L));
    board.set(0, 0, Some(PieceKind::O));

    let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_grid(&mut grid);
    assert_eq!(grid[19][9], Some(PieceKind::L));
    assert_eq!(grid[0][0], Some(PieceKind::O));
    assert_eq!(grid.iter().flatten().filter(|c| c.is_some()).count(), 2);

    board.clear();
    assert_eq!(board.filled_count(), 0);
}
