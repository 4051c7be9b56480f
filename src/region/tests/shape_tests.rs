//! Tests for box, ellipse, ring, line, point and table block coverage

extern crate std;

use std::collections::HashSet;

use crate::coordinate::{Bounds, Cell, CoordTransform, Point};
use crate::region::{
    AnnularRegion, BoxRegion, EllipseRegion, LineRegion, PointRegion, Region, TableBlockRegion,
};

fn cell_set(cells: &[Cell]) -> HashSet<Cell> {
    cells.iter().copied().collect()
}

#[test]
fn test_box_covers_every_cell() {
    let transform = CoordTransform::identity(10, 10);
    let region = Region::from(BoxRegion::new(Point::new(0.0, 0.0), Point::new(3.0, 3.0)));

    let cells = region.selected_cells(&transform);
    std::assert_eq!(cells.len(), 16);
    for row in 0..=3 {
        for col in 0..=3 {
            std::assert!(cells.contains(&Cell::new(col, row)));
        }
    }
    // Row-major order
    std::assert_eq!(cells[0], Cell::new(0, 0));
    std::assert_eq!(cells[1], Cell::new(1, 0));
    std::assert_eq!(cells[4], Cell::new(0, 1));
}

#[test]
fn test_box_clipped_at_grid_edge() {
    let transform = CoordTransform::identity(5, 5);
    let region = Region::from(BoxRegion::new(Point::new(3.0, -2.0), Point::new(9.0, 1.0)));

    let cells = region.selected_cells(&transform);
    std::assert_eq!(cell_set(&cells), cell_set(&[
        Cell::new(3, 0), Cell::new(4, 0),
        Cell::new(3, 1), Cell::new(4, 1),
    ]));
}

#[test]
fn test_box_outside_grid_is_empty() {
    let transform = CoordTransform::identity(5, 5);
    let region = Region::from(BoxRegion::new(Point::new(-6.0, -6.0), Point::new(-2.0, -2.0)));
    std::assert!(region.selected_cells(&transform).is_empty());
    std::assert!(region.discrete_bounds(&transform).is_none());
}

#[test]
fn test_zero_width_box_is_a_column() {
    let transform = CoordTransform::identity(10, 10);
    let region = Region::from(BoxRegion::new(Point::new(2.0, 1.0), Point::new(2.0, 4.0)));

    let cells = region.selected_cells(&transform);
    std::assert_eq!(cells, vec![Cell::new(2, 1), Cell::new(2, 2), Cell::new(2, 3), Cell::new(2, 4)]);
}

#[test]
fn test_ellipse_circle_is_symmetric_enough() {
    let transform = CoordTransform::identity(20, 20);
    let ellipse = EllipseRegion::from_corners(Point::new(5.0, 5.0), Point::new(15.0, 15.0));
    let region = Region::from(ellipse);

    let cells = region.selected_cells(&transform);
    std::assert!(cells.contains(&Cell::new(10, 10)));
    std::assert!(cells.contains(&Cell::new(10, 6)));
    std::assert!(cells.contains(&Cell::new(6, 10)));
    std::assert!(!cells.contains(&Cell::new(5, 5)));
    std::assert!(!cells.contains(&Cell::new(15, 15)));
    std::assert!(!cells.contains(&Cell::new(16, 10)));
}

#[test]
fn test_ellipse_quarter_offset_formula() {
    // a = b = 2 around (5,5): offsets of 1/8 shift the test towards low indices
    let transform = CoordTransform::identity(12, 12);
    let region = Region::from(EllipseRegion::new(
        Point::new(3.0, 3.0),
        Point::new(7.0, 7.0),
        Point::new(5.0, 5.0),
    ));

    let cells = region.selected_cells(&transform);
    // ((-2) - 0.125)^2 / 4 > 1 : excluded
    std::assert!(!cells.contains(&Cell::new(3, 5)));
    // (2 - 0.125)^2 / 4 + (0 - 0.125)^2 / 4 < 1 : included
    std::assert!(cells.contains(&Cell::new(7, 5)));
    std::assert!(cells.contains(&Cell::new(5, 7)));
    std::assert!(!cells.contains(&Cell::new(5, 3)));
}

#[test]
fn test_degenerate_ellipse_is_a_row() {
    let transform = CoordTransform::identity(10, 10);
    let region = Region::from(EllipseRegion::new(
        Point::new(2.0, 4.0),
        Point::new(6.0, 4.0),
        Point::new(4.0, 4.0),
    ));

    let cells = region.selected_cells(&transform);
    std::assert_eq!(cells, (2..=6).map(|c| Cell::new(c, 4)).collect::<Vec<_>>());
}

#[test]
fn test_degenerate_ellipse_is_a_column() {
    let transform = CoordTransform::identity(10, 10);
    let region = Region::from(EllipseRegion::new(
        Point::new(3.0, 1.0),
        Point::new(3.0, 5.0),
        Point::new(3.0, 3.0),
    ));

    let cells = region.selected_cells(&transform);
    std::assert_eq!(cells, (1..=5).map(|r| Cell::new(3, r)).collect::<Vec<_>>());
}

#[test]
fn test_ring_excludes_center_keeps_outer_edge() {
    let transform = CoordTransform::identity(12, 12);
    let region = Region::from(AnnularRegion::circular(Point::new(5.0, 5.0), 1.0, 3.0));

    let cells = region.selected_cells(&transform);
    std::assert!(!cells.contains(&Cell::new(5, 5)));
    std::assert!(cells.contains(&Cell::new(5, 8)));
    std::assert!(cells.contains(&Cell::new(8, 5)));
    std::assert!(cells.contains(&Cell::new(5, 6)));
    std::assert!(!cells.contains(&Cell::new(5, 9)));
}

#[test]
fn test_ring_with_collapsed_inner_is_full_ellipse() {
    let transform = CoordTransform::identity(12, 12);
    let region = Region::from(AnnularRegion::circular(Point::new(5.0, 5.0), 0.0, 2.0));

    let cells = region.selected_cells(&transform);
    std::assert!(cells.contains(&Cell::new(5, 5)));
    std::assert!(cells.contains(&Cell::new(5, 7)));
    std::assert!(!cells.contains(&Cell::new(7, 7)));
}

#[test]
fn test_interior_cells_satisfy_predicate() {
    let transform = CoordTransform::onto_grid(Bounds::from_coords(-50.0, 50.0, 50.0, -50.0), 40, 40);
    let regions = [
        Region::from(EllipseRegion::from_corners(Point::new(-30.0, 20.0), Point::new(25.0, -35.0))),
        Region::from(AnnularRegion::circular(Point::new(3.0, -4.0), 10.0, 30.0)),
    ];

    for region in &regions {
        let cells = region.selected_cells(&transform);
        std::assert!(!cells.is_empty());
        for cell in cells {
            let center = Point::new(cell.col as f64 + 0.5, cell.row as f64 + 0.5);
            let world = transform.map_to_world(&center);
            std::assert!(region.is_inside(&transform, &world), "{:?} fails {:?}", cell, region.kind());
        }
    }
}

#[test]
fn test_line_includes_both_endpoints() {
    let transform = CoordTransform::identity(10, 10);
    let region = Region::from(LineRegion::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0)));

    std::assert_eq!(region.selected_cells(&transform), vec![
        Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0), Cell::new(4, 0),
    ]);
}

#[test]
fn test_diagonal_line_and_clipping() {
    let transform = CoordTransform::identity(3, 3);
    let region = Region::from(LineRegion::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0)));

    std::assert_eq!(region.selected_cells(&transform), vec![
        Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2),
    ]);
}

#[test]
fn test_line_far_off_grid_is_clipped() {
    let transform = CoordTransform::identity(10, 10);
    let region = Region::from(LineRegion::new(Point::new(0.0, 0.0), Point::new(1e13, 0.0)));

    let cells = region.selected_cells(&transform);
    std::assert_eq!(cells.len(), 10);
    std::assert_eq!(cells.first(), Some(&Cell::new(0, 0)));
    std::assert_eq!(cells.last(), Some(&Cell::new(9, 0)));

    let unbounded = LineRegion::new(Point::new(0.0, 0.0), Point::new(f64::INFINITY, 0.0));
    std::assert!(unbounded.selected_cells(&transform).is_empty());

    let missing = LineRegion::new(Point::new(-5.0, 20.0), Point::new(30.0, 40.0));
    std::assert!(missing.selected_cells(&transform).is_empty());
}

#[test]
fn test_points_floor_and_dedup() {
    let transform = CoordTransform::identity(4, 4);
    let region = Region::from(PointRegion::new(vec![
        Point::new(1.2, 2.7),
        Point::new(1.9, 2.1),
        Point::new(3.5, 0.5),
        Point::new(7.0, 1.0),
        Point::new(-1.0, 1.0),
    ]));

    std::assert_eq!(region.selected_cells(&transform), vec![Cell::new(1, 2), Cell::new(3, 0)]);
}

#[test]
fn test_point_merge_skips_duplicates() {
    let a = PointRegion::new(vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
    let b = PointRegion::new(vec![Point::new(2.0, 2.0), Point::new(3.0, 3.0)]);

    let merged = a.merged(&b);
    std::assert_eq!(merged.control_points(), vec![
        Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0),
    ]);
}

#[test]
fn test_single_point_region() {
    let transform = CoordTransform::identity(4, 4);
    let single = PointRegion::single(Point::new(1.5, 2.5));

    std::assert_eq!(single, PointRegion::new(vec![Point::new(1.5, 2.5)]));
    std::assert_eq!(single.len(), 1);
    std::assert_eq!(single.selected_cells(&transform), vec![Cell::new(1, 2)]);
}

#[test]
fn test_table_block_ignores_transform() {
    // The transform would halve everything; table blocks are already in cells
    let transform = CoordTransform::onto_grid(Bounds::from_coords(0.0, 0.0, 20.0, 20.0), 10, 10);
    let region = Region::from(TableBlockRegion::from_cells(3, 2, 1, 1));

    std::assert_eq!(region.selected_cells(&transform), vec![
        Cell::new(1, 1), Cell::new(2, 1), Cell::new(3, 1),
        Cell::new(1, 2), Cell::new(2, 2), Cell::new(3, 2),
    ]);
}

#[test]
fn test_table_block_selected_flag_is_orthogonal() {
    let mut region = Region::from(TableBlockRegion::from_cells(0, 0, 1, 1));
    let copy = region.clone();

    let block = region.as_table_block_mut().unwrap();
    std::assert!(block.is_selected());
    block.toggle();
    std::assert!(!block.is_selected());

    // Flag does not take part in equality or coverage
    std::assert_eq!(region, copy);
    let transform = CoordTransform::identity(4, 4);
    std::assert_eq!(region.selected_cells(&transform).len(), 4);
}
