//! srcsplit CLI
//!
//! Splits C-style source files into code lines and comment lines.

use srcsplit::commands::{print_usage, print_version, run_split};
use srcsplit::{exit_code, parse_args, Command};

fn main() {
    srcsplit::init_tracing();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("Err: {err}");
            eprintln!("Run 'srcsplit --help' for usage");
            std::process::exit(exit_code::ERROR);
        }
    };

    match command {
        Command::Help => print_usage(),
        Command::Version => print_version(),
        Command::Split(config) => {
            if let Err(err) = run_split(&config) {
                eprintln!("Err: {err}");
                std::process::exit(exit_code::ERROR);
            }
        }
    }
}
