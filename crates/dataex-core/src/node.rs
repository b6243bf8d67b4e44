//! Source value classification
//!
//! The projector never inspects `serde_json::Value` directly. It works on a
//! [`Node`], which makes the fan-out versus descend decision an exhaustive
//! match and gives "missing" its own variant instead of an `Option` that
//! could be confused with JSON `null`.

use serde_json::{Map, Value};

/// A borrowed view of one position in the source data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    /// The key path does not exist in the source
    Missing,
    /// Null, bool, number or string
    Scalar(&'a Value),
    Mapping(&'a Map<String, Value>),
    Sequence(&'a [Value]),
}

impl<'a> Node<'a> {
    /// Classify a present value
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Node::Mapping(map),
            Value::Array(items) => Node::Sequence(items),
            scalar => Node::Scalar(scalar),
        }
    }

    /// Classify an optional value, `None` being missing
    pub fn from_option(value: Option<&'a Value>) -> Self {
        value.map_or(Node::Missing, Node::of)
    }

    /// Look up `key` below this node
    ///
    /// Mappings resolve by field name. Sequences resolve a decimal index
    /// (`"0"`, `"1"`, ...). Everything else is missing.
    pub fn child(&self, key: &str) -> Node<'a> {
        match self {
            Node::Mapping(map) => Node::from_option(map.get(key)),
            Node::Sequence(items) => parse_index(key)
                .and_then(|index| items.get(index))
                .map_or(Node::Missing, Node::of),
            Node::Scalar(_) | Node::Missing => Node::Missing,
        }
    }

    /// The underlying value, if present
    pub fn value(&self) -> Option<Value> {
        match self {
            Node::Missing => None,
            Node::Scalar(value) => Some((*value).clone()),
            Node::Mapping(map) => Some(Value::Object((*map).clone())),
            Node::Sequence(items) => Some(Value::Array(items.to_vec())),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Node::Missing)
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }
}

// Only canonical decimal indices: "01" and "+1" are field names, not indices.
fn parse_index(key: &str) -> Option<usize> {
    let canonical = key == "0" || (!key.starts_with('0') && !key.is_empty());
    if canonical && key.bytes().all(|b| b.is_ascii_digit()) {
        key.parse().ok()
    } else {
        None
    }
}
