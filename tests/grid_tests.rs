//! Grid tests - storage, indexing and text form

use tile_islands::core::{ConfigError, Grid};
use tile_islands::types::CellPos;

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(6, 4).unwrap();
    assert_eq!(grid.width(), 6);
    assert_eq!(grid.height(), 4);
    assert_eq!(grid.len(), 24);

    // All cells should be empty
    for y in 0..4 {
        for x in 0..6 {
            assert!(!grid.is_occupied(x, y), "Cell ({}, {}) should be empty", x, y);
            assert_eq!(grid.get(x, y), Some(None));
        }
    }
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(6, 4).unwrap();
    assert_eq!(grid.get(6, 0), None);
    assert_eq!(grid.get(0, 4), None);
    assert_eq!(grid.get(u16::MAX, u16::MAX), None);
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(6, 4).unwrap();

    assert!(grid.set(5, 3, Some(2)));
    assert_eq!(grid.get(5, 3), Some(Some(2)));
    assert_eq!(grid.at(5 + 3 * 6), Some(2));

    // Clear a cell
    assert!(grid.set(5, 3, None));
    assert_eq!(grid.get(5, 3), Some(None));

    // Out of bounds writes are refused
    assert!(!grid.set(6, 0, Some(1)));
    assert!(!grid.set(0, 4, Some(1)));
}

#[test]
fn test_grid_row_major_bottom_first() {
    let grid = Grid::from_text(
        "
        30
        12
        ",
    )
    .unwrap();
    assert_eq!(grid.cells(), &[Some(1), Some(2), Some(3), Some(0)]);
    assert_eq!(grid.pos(2), CellPos::new(0, 1));
    assert_eq!(grid.index(1, 1), Some(3));
}

#[test]
fn test_grid_dimension_errors() {
    assert_eq!(Grid::new(0, 1).unwrap_err(), ConfigError::ZeroWidth);
    assert_eq!(Grid::new(1, 0).unwrap_err(), ConfigError::ZeroHeight);
    assert!(matches!(
        Grid::new(u16::MAX, u16::MAX).unwrap_err(),
        ConfigError::TooManyCells { .. }
    ));
}

#[test]
fn test_grid_text_roundtrip_preserves_layout() {
    let text = "a.9\n..0\n123\n";
    let grid = Grid::from_text(text).unwrap();
    assert_eq!(grid.to_text(), text);
    assert_eq!(grid.occupied_count(), 6);
}
