//! Tests for the selection mask and colour metadata

extern crate std;

use crate::coordinate::Cell;
use crate::selection::{Color, ColoredRegionOpList, RegionOpList, SelectionMask};

#[test]
fn test_mask_set_get_and_bounds() {
    let mut mask = SelectionMask::new(3, 2);
    mask.set(&Cell::new(2, 1), true);
    mask.set(&Cell::new(5, 5), true);

    std::assert!(mask.get(&Cell::new(2, 1)));
    std::assert!(!mask.get(&Cell::new(5, 5)));
    std::assert_eq!(mask.count(), 1);
}

#[test]
fn test_mask_algebra() {
    let a = SelectionMask::from_cells(3, 3, &[Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)]);
    let b = SelectionMask::from_cells(3, 3, &[Cell::new(1, 1), Cell::new(2, 0)]);

    let mut and = a.clone();
    and.intersect(&b);
    std::assert_eq!(and.selected_cells(), vec![Cell::new(1, 1)]);

    let mut minus = a.clone();
    minus.subtract(&b);
    std::assert_eq!(minus.selected_cells(), vec![Cell::new(0, 0), Cell::new(2, 2)]);

    let mut inverted = a.clone();
    inverted.invert();
    std::assert_eq!(inverted.count(), 6);
    inverted.invert();
    std::assert_eq!(inverted, a);
}

#[test]
fn test_mask_scan_is_row_major() {
    let mask = SelectionMask::from_cells(4, 4, &[Cell::new(1, 2), Cell::new(2, 1), Cell::new(3, 0)]);
    std::assert_eq!(mask.selected_cells(), vec![Cell::new(3, 0), Cell::new(2, 1), Cell::new(1, 2)]);
}

#[test]
fn test_empty_mask() {
    let mask = SelectionMask::new(0, 0);
    std::assert!(mask.selected_cells().is_empty());
    std::assert!(!mask.get(&Cell::new(0, 0)));
}

#[test]
fn test_color_parse_and_display() {
    let color: Color = "#1a2B3c".parse().unwrap();
    std::assert_eq!(color, Color::new(0x1a, 0x2b, 0x3c));
    std::assert_eq!(color.to_string(), "#1a2b3c");
    std::assert_eq!("00ff00".parse::<Color>().unwrap(), Color::new(0, 255, 0));
    std::assert!("#12345".parse::<Color>().is_err());
    std::assert!("#gg0000".parse::<Color>().is_err());
}

#[test]
fn test_colored_list_clamps_opacity() {
    let mut list = ColoredRegionOpList::new(RegionOpList::new(), Color::new(0, 0, 255), 1.7);
    std::assert_eq!(list.opacity(), 1.0);

    list.set_opacity(-0.2);
    std::assert_eq!(list.opacity(), 0.0);

    list.set_color(Color::new(1, 2, 3));
    std::assert_eq!(list.color(), Color::new(1, 2, 3));
    std::assert!(list.ops().is_empty());
}
