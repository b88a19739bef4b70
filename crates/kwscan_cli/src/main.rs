//! kwscan CLI
//!
//! Scans `|`-separated quoted keyword lists.

mod commands;
mod config;
mod error;
mod tracing_setup;

use commands::{run_check, run_scan, EXIT_USAGE};
use config::{parse_args, Command};
use tracing_setup::init_tracing;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            print_usage();
            std::process::exit(EXIT_USAGE);
        }
    };

    let code = match command {
        Command::Help => {
            print_usage();
            0
        }
        Command::Check { verbose } => {
            init_tracing(verbose);
            run_check()
        }
        Command::Scan(config) => {
            init_tracing(config.verbose);
            run_scan(&config)
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    eprintln!("kwscan - scan quoted keyword lists");
    eprintln!();
    eprintln!("Usage: kwscan <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  scan <text>          Scan text given on the command line");
    eprintln!("  scan --file=<path>   Scan the contents of a file");
    eprintln!("  scan -               Scan stdin");
    eprintln!("  check                Scan the built-in reference input");
    eprintln!("  help                 Show this message");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --format=<fmt>       lines (default), debug, or source");
    eprintln!("  -v, --verbose        Log each token as it is found");
    eprintln!();
    eprintln!("Example:");
    eprintln!(r#"  kwscan scan '"hello" | `world`'"#);
    eprintln!();
    eprintln!("Set RUST_LOG=kwscan=trace for scanner internals, KWSCAN_LOG_TREE=1 for tree output.");
}
