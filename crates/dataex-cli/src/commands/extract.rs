//! Extract command
//!
//! Usage: dataex extract <SPEC> [--input <FILE>] [--output <FILE>] [--pretty]

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Args;
use dataex_core::{Extractor, Result};
use serde_json::Value;

use super::OptionArgs;
use crate::config::CliConfig;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Key specification, e.g. "id,owner.name,items[sku,price]"
    pub spec: String,

    /// Input JSON file (default: stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the result
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Execute extract command
pub fn execute(args: ExtractArgs) -> Result<()> {
    let config = CliConfig::load(args.options.config.as_deref())?;
    let extractor = Extractor::new(args.options.resolve(&config));

    let data: Value = match &args.input {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => serde_json::from_reader(io::stdin().lock())?,
    };

    let extracted = extractor.extract(&data, &args.spec)?;

    let rendered = if args.pretty || config.output.pretty {
        serde_json::to_string_pretty(&extracted)?
    } else {
        serde_json::to_string(&extracted)?
    };

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, format!("{}\n", rendered))?;
        tracing::info!(path = %output_path.display(), "wrote extracted document");
    } else {
        println!("{}", rendered);
    }

    Ok(())
}
