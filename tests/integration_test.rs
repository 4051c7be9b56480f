//! Integration tests for the region selection engine

extern crate std;

use clap::{Arg, ArgAction, Command as ClapCommand};

use regionkit::commands::InspectCommand;
use regionkit::config::RegionKitConfig;
use regionkit::region::{AnnularRegion, BoxRegion, TableBlockRegion, WedgeRegion};
use regionkit::utils::output_utils::{self, OutputFormat, SelectionOutput};
use regionkit::{Bounds, Cell, Color, CoordTransform, Operation, Point, Region, RegionError, RegionKit};

fn square(x1: f64, y1: f64, x2: f64, y2: f64) -> Region {
    Region::Box(BoxRegion::new(Point::new(x1, y1), Point::new(x2, y2)))
}

fn temp_path(name: &str) -> String {
    std::env::temp_dir().join(name).to_string_lossy().into_owned()
}

#[test]
fn test_facade_edit_and_evaluate() {
    let mut kit = RegionKit::new(CoordTransform::identity(10, 10));

    kit.add(Operation::Union, Some(square(0.0, 0.0, 3.0, 3.0))).unwrap();
    std::assert_eq!(kit.select().len(), 16);

    kit.add(Operation::IntersectComplement, Some(square(1.0, 1.0, 2.0, 2.0))).unwrap();
    let cells = kit.select();
    std::assert_eq!(cells.len(), 12);
    std::assert!(!cells.contains(&Cell::new(1, 1)));
    std::assert!(cells.contains(&Cell::new(3, 3)));

    let undone = kit.undo().unwrap();
    std::assert_eq!(undone.operation(), Operation::IntersectComplement);
    std::assert_eq!(kit.select().len(), 16);

    kit.clear();
    std::assert!(kit.select().is_empty());
    std::assert_eq!((kit.mask().cols(), kit.mask().rows()), (0, 0));
}

#[test]
fn test_facade_transform_swap() {
    let mut kit = RegionKit::new(CoordTransform::identity(4, 4));
    kit.add(Operation::Union, Some(square(0.0, 0.0, 3.0, 3.0))).unwrap();
    std::assert_eq!(kit.select().len(), 16);

    // Same grid, but each cell now spans two world units
    let coarse = CoordTransform::onto_grid(Bounds::from_coords(0.0, 0.0, 8.0, 8.0), 4, 4);
    kit.set_transform(coarse);
    std::assert_eq!(kit.transform(), &coarse);

    let cells = kit.select();
    std::assert_eq!(cells.len(), 9);
    std::assert_eq!(cells.last(), Some(&Cell::new(2, 2)));
}

#[test]
fn test_facade_rejects_missing_region() {
    let mut kit = RegionKit::new(CoordTransform::identity(4, 4));
    let result = kit.add(Operation::Intersect, None);

    std::assert!(std::matches!(result, Err(RegionError::MissingRegion(Operation::Intersect))));
    std::assert!(kit.selection().ops().is_empty());
}

#[test]
fn test_world_transform_selection() {
    let world = Bounds::from_coords(0.0, 0.0, 200.0, 100.0);
    let mut kit = RegionKit::new(CoordTransform::onto_grid(world, 20, 10));

    kit.add_parsed("union:box:0,0;50,50").unwrap();
    let cells = kit.select();

    std::assert_eq!(cells.len(), 36);
    std::assert_eq!(cells.first(), Some(&Cell::new(0, 0)));
    std::assert_eq!(cells.last(), Some(&Cell::new(5, 5)));
}

#[test]
fn test_ring_minus_wedge() {
    let mut kit = RegionKit::new(CoordTransform::identity(11, 11));
    let center = Point::new(5.0, 5.0);

    kit.add(Operation::Union, Some(AnnularRegion::circular(center, 1.0, 4.0).into())).unwrap();
    let ring = kit.select();
    std::assert!(!ring.contains(&Cell::new(5, 5)));
    std::assert!(ring.contains(&Cell::new(5, 8)));

    let quadrant = WedgeRegion::from_angles(center, Point::new(0.0, 0.0), Point::new(10.0, 10.0), 0.0, 90.0);
    kit.add(Operation::IntersectComplement, Some(quadrant.into())).unwrap();
    let remaining = kit.select();

    std::assert!(remaining.len() < ring.len());
    std::assert!(!remaining.contains(&Cell::new(7, 7)));
    std::assert!(remaining.contains(&Cell::new(3, 3)));
}

#[test]
fn test_mask_grows_for_table_blocks() {
    let mut kit = RegionKit::new(CoordTransform::identity(4, 4));
    kit.add(Operation::Union, Some(TableBlockRegion::from_cells(5, 6, 6, 6).into())).unwrap();
    kit.add(Operation::Complement, None).unwrap();

    let mask = kit.mask();
    std::assert_eq!((mask.cols(), mask.rows()), (7, 7));
    std::assert_eq!(mask.count(), 49 - 2);
}

#[test]
fn test_config_drives_selection() {
    let config = r##"
        [transform]
        grid = [4, 3]

        [output]
        format = "csv"

        [display]
        color = "#00ff00"
        opacity = 0.25
    "##.parse::<RegionKitConfig>().unwrap();

    std::assert_eq!(config.format, OutputFormat::Csv);
    std::assert_eq!(config.color, Color::new(0, 255, 0));

    let mut kit = RegionKit::new(config.transform());
    kit.set_display(config.color, config.opacity);
    kit.add_parsed("union:box:0,0;1,1").unwrap();
    kit.add_parsed("complement").unwrap();

    let cells = kit.select();
    std::assert_eq!(cells.len(), 8);
    std::assert_eq!(cells[0], Cell::new(2, 0));

    let mask = kit.mask();
    let output = SelectionOutput {
        mask: &mask,
        cells: &cells,
        color: kit.selection().color(),
        opacity: kit.selection().opacity(),
    };
    let mut buffer = Vec::new();
    output_utils::write_text(&output, config.format, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    std::assert!(text.starts_with("col,row\n2,0\n3,0\n2,1\n"));
}

#[test]
fn test_config_errors() {
    std::assert!(std::matches!(
        "[display]\nopacity = 2.0".parse::<RegionKitConfig>(),
        Err(RegionError::ConfigError(_))
    ));
    std::assert!(std::matches!(
        "[output]\nformat = \"npy\"".parse::<RegionKitConfig>(),
        Err(RegionError::UnsupportedFormat(_))
    ));
    std::assert!(std::matches!(
        "[transform]\ngrid = [0, 5]".parse::<RegionKitConfig>(),
        Err(RegionError::ConfigError(_))
    ));
    std::assert!("not = [valid".parse::<RegionKitConfig>().is_err());
}

#[test]
fn test_config_from_file() {
    let path = temp_path("regionkit_config_test.toml");
    std::fs::write(&path, "[transform]\nworld = [0, 0, 50.0, 50.0]\ngrid = [5, 5]\n[logging]\nlevel = \"debug\"\n").unwrap();

    let config = RegionKitConfig::from_file(&path).unwrap();
    std::assert_eq!(config.world, Some(Bounds::from_coords(0.0, 0.0, 50.0, 50.0)));
    std::assert_eq!(config.log_level, log::LevelFilter::Debug);
    std::assert_eq!(config.transform().map_to_array(&Point::new(25.0, 10.0)), Point::new(2.5, 1.0));

    std::fs::remove_file(&path).ok();
    std::assert!(std::matches!(RegionKitConfig::from_file(&path), Err(RegionError::IoError(_))));
}

#[test]
fn test_png_mask_output() {
    let mut kit = RegionKit::new(CoordTransform::identity(6, 4));
    kit.add_parsed("union:line:0,0;5,0").unwrap();

    let mask = kit.mask();
    let cells = mask.selected_cells();
    let output = SelectionOutput {
        mask: &mask,
        cells: &cells,
        color: Color::default(),
        opacity: 0.5,
    };

    let path = temp_path("regionkit_mask_test.png");
    output_utils::write_selection(&output, OutputFormat::Png, Some(&path)).unwrap();

    let image = image::open(&path).unwrap().to_luma8();
    std::assert_eq!(image.dimensions(), (6, 4));
    std::assert_eq!(image.get_pixel(3, 0)[0], 255);
    std::assert_eq!(image.get_pixel(3, 1)[0], 0);

    std::fs::remove_file(&path).ok();
    std::assert!(output_utils::write_selection(&output, OutputFormat::Png, None).is_err());
}

#[test]
fn test_inspect_report() {
    let cli = ClapCommand::new("regionkit-test")
        .arg(Arg::new("region").long("region").action(ArgAction::Append))
        .arg(Arg::new("world").long("world"))
        .arg(Arg::new("grid").long("grid"));
    let matches = cli.try_get_matches_from([
        "regionkit-test",
        "--region", "union:box:0,0;3,3",
        "--region", "complement",
        "--grid", "8x8",
    ]).unwrap();

    let config = RegionKitConfig::default();
    let command = InspectCommand::new(&matches, &config).unwrap();
    let mut buffer = Vec::new();
    command.write_report(&mut buffer).unwrap();
    let report = String::from_utf8(buffer).unwrap();

    std::assert!(report.starts_with("Grid: 8x8 cells\n"));
    std::assert!(report.contains("#0 union box\n"));
    std::assert!(report.contains("  Cells: 16\n"));
    std::assert!(report.contains("#1 complement\n"));
}
