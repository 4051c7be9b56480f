use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

use regionkit::config::RegionKitConfig;
use regionkit::utils::logger::Logger;
use regionkit::commands::{CommandFactory, RegionKitCommandFactory};

fn main() {
    let matches = ClapCommand::new("RegionKit")
        .version("0.1")
        .author("Maurice Schilpp")
        .about("Combine geometric regions into cell selections on a grid")
        .arg(
            Arg::new("region")
                .short('r')
                .long("region")
                .help("Region operation 'OP:SHAPE:x,y;x,y;...' or 'complement'; applied in order")
                .value_name("SPEC")
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .required(true),
        )
        .arg(
            Arg::new("world")
                .long("world")
                .help("World rectangle mapped onto the grid (x1,y1,x2,y2)")
                .value_name("BOUNDS")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("grid")
                .short('g')
                .long("grid")
                .help("Grid size as COLSxROWS")
                .value_name("SIZE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file; stdout when omitted")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format (list, csv, json, png)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("inspect")
                .short('i')
                .long("inspect")
                .help("Describe each region instead of evaluating the selection")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => match RegionKitConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path, e);
                process::exit(1);
            }
        },
        None => RegionKitConfig::default(),
    };

    if matches.get_flag("verbose") {
        config.log_level = LevelFilter::Debug;
    }

    match &config.log_file {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, config.log_level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => Logger::init_console_logger(config.log_level),
    }

    let factory = RegionKitCommandFactory::new();

    let command_result = factory.create_command(&matches, &config);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
