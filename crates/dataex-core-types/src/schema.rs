//! Canonical schema constants for structured logging and events
//!
//! These constants keep field keys identical between the logging macros,
//! the error facility and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Extraction inputs and results
pub const FIELD_SPEC_LEN: &str = "spec_len";
pub const FIELD_SELECTIONS: &str = "selections";
pub const FIELD_MODE: &str = "mode";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_EXTRACT: &str = "extract";
pub const OP_PARSE: &str = "parse";
