//! Public extraction entry point
//!
//! [`extract`] parses the specification with default (lenient) options and
//! projects `data` into a new value. [`Extractor`] does the same with caller
//! supplied options. Each call builds its own output and touches no shared
//! state, so an `Extractor` can be shared freely between threads.

use std::time::Instant;

use serde_json::Value;

use crate::errors::Result;
use crate::options::ExtractOptions;
use crate::schema::OP_EXTRACT;
use crate::spec::KeySpec;
use crate::{log_op_end, log_op_error, log_op_start};

/// Extract the fields named by `spec` from `data` using default options
///
/// # Errors
///
/// Only `DepthExceeded` in lenient mode; see [`Extractor::extract`].
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let data = json!({"x": {"y": {"z": 5}, "w": 6}, "other": true});
/// let out = dataex_core::extract(&data, "x.y.z, x.w").unwrap();
/// assert_eq!(out, json!({"x": {"y": {"z": 5}, "w": 6}}));
/// ```
pub fn extract(data: &Value, spec: &str) -> Result<Value> {
    Extractor::default().extract(data, spec)
}

/// Extraction with explicit options
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Parse `spec` under this extractor's options without projecting
    ///
    /// # Errors
    ///
    /// See [`KeySpec::parse`].
    pub fn compile(&self, spec: &str) -> Result<KeySpec> {
        KeySpec::parse(spec, &self.options)
    }

    /// Extract the fields named by `spec` from `data`
    ///
    /// The whole specification is parsed before anything is projected, so a
    /// failing call never yields partial output.
    ///
    /// # Errors
    ///
    /// - `DepthExceeded` - a path exceeds `max_depth`
    /// - malformed specification errors, in strict mode only
    pub fn extract(&self, data: &Value, spec: &str) -> Result<Value> {
        let started = Instant::now();
        log_op_start!(
            OP_EXTRACT,
            spec_len = spec.len(),
            mode = self.options.mode.as_str()
        );

        match self.compile(spec) {
            Ok(key_spec) => {
                let output = key_spec.apply(data);
                log_op_end!(
                    OP_EXTRACT,
                    duration_ms = started.elapsed().as_millis() as u64,
                    selections = key_spec.len()
                );
                Ok(output)
            }
            Err(err) => {
                log_op_error!(
                    OP_EXTRACT,
                    err.clone(),
                    duration_ms = started.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }
}
