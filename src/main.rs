//! Lineup Layout CLI
//!
//! Usage:
//!   lineup-layout [OPTIONS] [FILE]
//!
//! Options:
//!   -f, --formation <F>   Formation to arrange with (overrides the input's)
//!   -c, --config <FILE>   Configuration file (TOML format)
//!   --interpolate         Widen overfull lines instead of wrapping
//!   -t, --table           Print a text table instead of JSON
//!   --formations          List the known formations
//!   -v, --verbose         Log how each player was placed
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::info;

use lineup_layout::formation::KNOWN_FORMATIONS;
use lineup_layout::{arrange_input, format_table, roster, ArrangeConfig, SpreadStrategy};

#[derive(Parser)]
#[command(name = "lineup-layout")]
#[command(about = "Pitch coordinates for football lineups")]
struct Cli {
    /// Roster JSON file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Formation to arrange with, e.g. "4-3-3"
    #[arg(short, long)]
    formation: Option<String>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Widen lines holding more players than the formation gives them
    #[arg(long)]
    interpolate: bool,

    /// Print a text table instead of JSON
    #[arg(short, long)]
    table: bool,

    /// List the known formations
    #[arg(long)]
    formations: bool,

    /// Log the placement strategy chosen for each player
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if cli.formations {
        for formation in KNOWN_FORMATIONS {
            println!("{}", formation);
        }
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => match ArrangeConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ArrangeConfig::default(),
    };
    if cli.interpolate {
        config = config.with_spread(SpreadStrategy::Interpolated);
    }

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let (arranged, formation) = match arrange_input(&source, cli.formation.as_deref(), &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    info!("arranged {} players in {}", arranged.len(), formation);

    if cli.table {
        print!("{}", format_table(&arranged));
        return;
    }

    match roster::to_json(&arranged) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Lineup Layout - Pitch coordinates for football lineups

USAGE:
    lineup-layout [OPTIONS] [FILE]
    cat lineup.json | lineup-layout

OPTIONS:
    -f, --formation    Formation to arrange with (e.g. 4-3-3)
    -c, --config       Configuration file (TOML)
    --interpolate      Widen overfull lines instead of wrapping
    -t, --table        Print a text table instead of JSON
    --formations       List the known formations
    -v, --verbose      Log how each player was placed
    -h, --help         Print help

INPUT:
    Either a list of {{"player": {{...}}}} entries or a lineup document
    {{"formation": "4-3-3", "startXI": [...]}}. Each player may carry
    "pos" (G, D, M, F, LB, CM, ST...) and "grid" ("row:col").

QUICK START:
    echo '[{{"player": {{"id": 1, "name": "Keeper", "pos": "G"}}}}]' | lineup-layout -t"#
    );
}
