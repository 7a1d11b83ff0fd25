//! Binary crate for the `meteo` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logger setup
//! - Human-friendly output formatting

use clap::Parser;

mod cli;

fn main() {
    // Info level by default so the per-day fetch trace is visible without
    // RUST_LOG being set.
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cmd = cli::Cli::parse();
    if let Err(e) = cmd.run() {
        println!("Error while gathering meteo data: {e:#}");
        std::process::exit(1);
    }
}
