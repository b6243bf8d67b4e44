//! Structured logging facility for dataex
//!
//! - Single initialization point via `init(profile)`
//! - Operation boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use dataex_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Log output goes to stderr so that extracted JSON on stdout stays clean.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
