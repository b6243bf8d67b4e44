pub mod extract;
pub mod parse;

use std::path::PathBuf;

use clap::Args;
use dataex_core::{ExtractOptions, SpecMode};

use crate::config::CliConfig;

/// Options shared by every command that parses a specification
#[derive(Debug, Args)]
pub struct OptionArgs {
    /// TOML config file (default: $DATAEX_CONFIG)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Reject malformed specifications instead of best-effort parsing
    #[arg(long)]
    pub strict: bool,

    /// Maximum path depth (values above 128 are capped)
    #[arg(long)]
    pub max_depth: Option<usize>,
}

impl OptionArgs {
    /// Flags override values from the config file
    pub fn resolve(&self, config: &CliConfig) -> ExtractOptions {
        let mut options = config.extract.clone();
        if self.strict {
            options = options.with_mode(SpecMode::Strict);
        }
        if let Some(max_depth) = self.max_depth {
            options = options.with_max_depth(max_depth);
        }
        options
    }
}
