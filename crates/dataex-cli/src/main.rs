//! dataex CLI
//!
//! Command-line interface for key-path extraction over JSON documents

use clap::{Parser, Subcommand};
use dataex_core::logging_facility::{init, Profile};
use dataex_core::ExError;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "dataex")]
#[command(about = "dataex - extract a subset of a JSON document by key paths", long_about = None)]
struct Cli {
    /// Human-readable logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON logs on stderr
    #[arg(long, global = true, conflicts_with = "verbose")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract the fields named by a key specification
    Extract(commands::extract::ExtractArgs),
    /// Parse a key specification and list its selections
    Parse(commands::parse::ParseArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init(Profile::Development);
    } else if cli.log_json {
        init(Profile::Production);
    }

    let (op, result) = match cli.command {
        Commands::Extract(args) => ("extract", commands::extract::execute(args)),
        Commands::Parse(args) => ("parse", commands::parse::execute(args)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", ExError::from(e).with_op(op));
        std::process::exit(1);
    }
}
