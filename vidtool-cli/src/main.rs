// vidtool-cli/src/main.rs
//
// Entry point for the vidtool command-line interface. Parses arguments,
// initializes logging, and dispatches to the subcommand handlers.
//
// Logging uses env_logger via the RUST_LOG environment variable:
// - RUST_LOG=info (default): normal operation logs
// - RUST_LOG=debug: external command lines and fetch details

use clap::Parser;
use std::process;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::ExtractAudio(args) => commands::extract_audio::run(args),
        Commands::Info(args) => commands::info::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
