//! Key specification parsing.
//!
//! A specification lists the fields to extract:
//!
//! ```text
//! spec  := group
//! group := term (',' term)*
//! term  := key ('.' key)* ('[' group ']')?
//! ```
//!
//! Whitespace is removed before parsing. Parsing produces an ordered list of
//! [`Selection`]s, one per terminal key, which the projector applies in order.
//!
//! ## Responsibilities
//!
//! - Strip whitespace and walk the grammar
//! - Enforce the depth limit
//! - Validate structure in strict mode
//!
//! ## Non-Responsibilities
//!
//! - Reading source data (handled by `projector`)

mod walker;

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::errors::{DataExError, Result};
use crate::node::Node;
use crate::options::ExtractOptions;
use crate::projector;
use walker::Walker;

/// One terminal key and the ancestor keys leading to it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    trajectory: Vec<String>,
    key: String,
}

impl Selection {
    pub fn new(trajectory: Vec<String>, key: impl Into<String>) -> Self {
        Self {
            trajectory,
            key: key.into(),
        }
    }

    /// Ancestor keys, outermost first
    pub fn trajectory(&self) -> &[String] {
        &self.trajectory
    }

    /// Terminal key whose value is copied
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Dotted form, e.g. `d.f.g`
    pub fn path(&self) -> String {
        let mut path = self.trajectory.join(".");
        if !self.trajectory.is_empty() {
            path.push('.');
        }
        path.push_str(&self.key);
        path
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A parsed specification, reusable across many source values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeySpec {
    selections: Vec<Selection>,
}

impl KeySpec {
    /// Parse `spec` with the given options
    ///
    /// # Errors
    ///
    /// - `DepthExceeded` - a path is deeper than `options.max_depth`
    /// - `UnclosedGroup`, `UnexpectedClosingBracket`, `EmptyKey`,
    ///   `UnexpectedCharacter` - strict mode only
    pub fn parse(spec: &str, options: &ExtractOptions) -> Result<Self> {
        let chars: Vec<char> = spec.chars().filter(|c| !c.is_whitespace()).collect();
        let walk = Walker::new(&chars, options).walk(0, &[], None)?;
        Ok(Self {
            selections: walk.selections,
        })
    }

    /// Selections in the order they are projected
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Project `data` into a new mapping holding only the selected fields
    pub fn apply(&self, data: &Value) -> Value {
        let source = Node::of(data);
        let mut output = Map::new();
        for selection in &self.selections {
            projector::project(&mut output, source, selection.trajectory(), selection.key());
        }
        Value::Object(output)
    }
}

impl FromStr for KeySpec {
    type Err = DataExError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, &ExtractOptions::default())
    }
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selection) in self.selections.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", selection)?;
        }
        Ok(())
    }
}
