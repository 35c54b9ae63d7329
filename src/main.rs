//! Stix CLI - run scripted and simulated capture sessions from the terminal.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Stix - a deterministic territory-capture engine
#[derive(Parser, Debug)]
#[command(name = "stix")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the canonical scripted capture and print the result
    Demo {
        /// Field width in cells
        #[arg(long, default_value = "10")]
        width: u16,

        /// Field height in cells
        #[arg(long, default_value = "10")]
        height: u16,

        /// Hazard X position (default: field center)
        #[arg(long)]
        hazard_x: Option<u16>,

        /// Hazard Y position (default: field center)
        #[arg(long)]
        hazard_y: Option<u16>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Save the JSON report to a file
        #[arg(long)]
        save: Option<std::path::PathBuf>,
    },

    /// Run a seeded, deterministic session against a wandering hazard
    Simulate {
        /// Field width in cells
        #[arg(long, default_value = "60")]
        width: u16,

        /// Field height in cells
        #[arg(long, default_value = "60")]
        height: u16,

        /// Maximum ticks to simulate
        #[arg(short, long, default_value = "20000")]
        ticks: u64,

        /// Random seed (default: 42)
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Suppress per-capture output
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Demo {
            width,
            height,
            hazard_x,
            hazard_y,
            format,
            save,
        } => cli::demo::execute(width, height, hazard_x, hazard_y, format, save),
        Commands::Simulate {
            width,
            height,
            ticks,
            seed,
            quiet,
        } => cli::simulate::execute(width, height, ticks, seed, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
