//! Tests for bounds, points and cell rectangles

extern crate std;

use crate::coordinate::{Bounds, Cell, CellBounds, Point};

#[test]
fn test_inverted_corners_normalize_in_accessors() {
    let bounds = Bounds::from_coords(5.0, 9.0, 1.0, 2.0);
    std::assert_eq!(bounds.min_x(), 1.0);
    std::assert_eq!(bounds.max_x(), 5.0);
    std::assert_eq!(bounds.min_y(), 2.0);
    std::assert_eq!(bounds.max_y(), 9.0);
    std::assert_eq!(bounds.width(), 4.0);
    std::assert_eq!(bounds.height(), 7.0);
    std::assert!(bounds.contains(&Point::new(3.0, 2.0)));
    std::assert!(!bounds.contains(&Point::new(0.5, 3.0)));
}

#[test]
fn test_enclosing_and_clamp() {
    let points = [Point::new(3.0, -1.0), Point::new(-2.0, 4.0), Point::new(1.0, 1.0)];
    let bounds = Bounds::enclosing(&points).unwrap();
    std::assert_eq!(bounds, Bounds::from_coords(-2.0, -1.0, 3.0, 4.0));
    std::assert!(Bounds::enclosing(&[]).is_none());

    std::assert_eq!(bounds.clamp(&Point::new(10.0, -10.0)), Point::new(3.0, -1.0));
}

#[test]
fn test_parse_strings() {
    std::assert_eq!(Bounds::from_string("0, 1, 2.5, 3").unwrap(), Bounds::from_coords(0.0, 1.0, 2.5, 3.0));
    std::assert!(Bounds::from_string("0,1,2").is_err());
    std::assert!(Bounds::from_string("0,1,2,x").is_err());

    std::assert_eq!(Point::from_string("4.5,-2").unwrap(), Point::new(4.5, -2.0));
    std::assert!(Point::from_string("4.5").is_err());
}

#[test]
fn test_cell_bounds_iterates_row_major() {
    let bounds = CellBounds::new(2, 1, 1, 0);
    let cells: Vec<Cell> = bounds.cells().collect();
    std::assert_eq!(cells, vec![
        Cell::new(1, 0), Cell::new(2, 0),
        Cell::new(1, 1), Cell::new(2, 1),
    ]);
    std::assert_eq!(bounds.area(), 4);
}

#[test]
fn test_cell_bounds_intersection() {
    let a = CellBounds::new(0, 0, 4, 4);
    let b = CellBounds::new(3, 2, 9, 9);
    std::assert_eq!(a.intersection(&b), Some(CellBounds::new(3, 2, 4, 4)));

    let c = CellBounds::new(6, 6, 7, 7);
    std::assert_eq!(a.intersection(&c), None);
}

#[test]
fn test_cell_from_negative_is_rejected() {
    std::assert_eq!(Cell::from_floored(-1.0, 0.0), None);
    std::assert_eq!(Cell::from_floored(2.0, 3.0), Some(Cell::new(2, 3)));
    std::assert_eq!(Cell::from_floored(f64::NAN, 3.0), None);
}
