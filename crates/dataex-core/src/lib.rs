//! dataex core - key-path extraction engine
//!
//! This crate projects a subset of an arbitrary JSON value into a freshly
//! built value, driven by a compact key specification such as
//! `a,b.c,d[e,f.g]`:
//! - `spec` parses the specification into ordered selections
//! - `node` classifies source values for the projector
//! - `projector` writes selections into the output, fanning out over arrays
//! - `extractor` is the public entry point, with options and logging
//!
//! ```
//! use serde_json::json;
//!
//! let data = json!({ "items": [{ "a": 1, "b": 2 }, { "a": 3, "b": 4 }] });
//! let out = dataex_core::extract(&data, "items[a]").unwrap();
//! assert_eq!(out, json!({ "items": [{ "a": 1 }, { "a": 3 }] }));
//! ```

pub mod errors;
pub mod extractor;
pub mod logging_facility;
pub mod node;
pub mod options;
pub mod projector;
pub mod spec;

#[doc(hidden)]
pub use dataex_core_types::schema;

// Re-export commonly used types
pub use errors::{DataExError, ExError, ExErrorKind, Result};
pub use extractor::{extract, Extractor};
pub use options::{ExtractOptions, SpecMode, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
pub use spec::{KeySpec, Selection};
