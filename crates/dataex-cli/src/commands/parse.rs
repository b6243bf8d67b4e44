//! Parse command
//!
//! Usage: dataex parse <SPEC> [--strict]
//!
//! Prints one selection per line in dotted form.

use std::time::Instant;

use clap::Args;
use dataex_core::{log_op_end, log_op_error, log_op_start, Extractor, Result};
use dataex_core_types::schema::OP_PARSE;

use super::OptionArgs;
use crate::config::CliConfig;

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Key specification to parse
    pub spec: String,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Execute parse command
pub fn execute(args: ParseArgs) -> Result<()> {
    let config = CliConfig::load(args.options.config.as_deref())?;
    let extractor = Extractor::new(args.options.resolve(&config));

    let started = Instant::now();
    log_op_start!(OP_PARSE, spec_len = args.spec.len());

    let key_spec = match extractor.compile(&args.spec) {
        Ok(key_spec) => key_spec,
        Err(err) => {
            log_op_error!(
                OP_PARSE,
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            return Err(err);
        }
    };

    log_op_end!(
        OP_PARSE,
        duration_ms = started.elapsed().as_millis() as u64,
        selections = key_spec.len()
    );

    for selection in key_spec.selections() {
        println!("{}", selection);
    }

    Ok(())
}
