//! # voxctl
//!
//! Main entry point for the vocabulary command-line tool.

use clap::Parser;
use std::io;
use std::process;
use voxctl::{logging, run, Cli, Outcome};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: {:#}", e);
    }

    let stdout = io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(Outcome::Done) => {}
        Ok(Outcome::NoMatch) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
