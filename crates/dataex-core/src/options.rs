//! Extraction options
//!
//! Options are plain serde structs so callers can load them from a config
//! file. Missing fields fall back to [`ExtractOptions::default`].

use serde::{Deserialize, Serialize};

/// Default limit on path depth (trajectory length including group nesting)
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Hard ceiling on the enforced depth; larger `max_depth` values are clamped
/// to it. Matches serde_json's own recursion limit.
pub const MAX_DEPTH_CEILING: usize = 128;

/// How the parser treats malformed specifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecMode {
    /// Best-effort: unclosed groups close at end of input, a stray top-level
    /// `]` ends the walk, empty segments are kept as empty keys
    #[default]
    Lenient,
    /// Reject malformed specifications with a positioned error
    Strict,
}

impl SpecMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecMode::Lenient => "lenient",
            SpecMode::Strict => "strict",
        }
    }
}

/// Options controlling parsing and extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractOptions {
    pub mode: SpecMode,
    pub max_depth: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            mode: SpecMode::Lenient,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ExtractOptions {
    /// Strict parsing with the default depth limit
    pub fn strict() -> Self {
        Self {
            mode: SpecMode::Strict,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: SpecMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Depth limit actually enforced: `max_depth` clamped to
    /// [`MAX_DEPTH_CEILING`]
    pub fn depth_limit(&self) -> usize {
        self.max_depth.min(MAX_DEPTH_CEILING)
    }

    pub fn is_strict(&self) -> bool {
        self.mode == SpecMode::Strict
    }
}
