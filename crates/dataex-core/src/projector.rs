//! Projection of one selection into the output
//!
//! Source and output are walked in lockstep along the selection's
//! trajectory. Intermediate containers are created in the output before the
//! source is checked, so a missing intermediate still leaves an empty
//! container behind. Arrays met along the way are fanned out: the rest of the
//! trajectory is applied to every element independently.

use serde_json::{Map, Value};

use crate::node::Node;

/// Write `key` (found under `trajectory` in `data`) into `output`
///
/// Containers already present in `output` are reused, so selections sharing
/// a prefix share their ancestors. Values already present are never replaced
/// by a container; that branch is skipped instead.
pub fn project(
    output: &mut Map<String, Value>,
    data: Node<'_>,
    trajectory: &[String],
    key: &str,
) {
    let Some((step, rest)) = trajectory.split_first() else {
        if let Some(value) = data.child(key).value() {
            output.insert(key.to_string(), value);
        }
        return;
    };

    let source = data.child(step);
    let slot = output.entry(step.clone()).or_insert_with(|| match source {
        Node::Sequence(_) => Value::Array(Vec::new()),
        Node::Missing | Node::Scalar(_) | Node::Mapping(_) => Value::Object(Map::new()),
    });

    match source {
        Node::Sequence(items) => {
            let Value::Array(branches) = slot else {
                tracing::debug!(
                    step = %step,
                    key = %key,
                    "output slot is not an array, skipping fan-out"
                );
                return;
            };
            for (j, item) in items.iter().enumerate() {
                if j >= branches.len() {
                    branches.push(Value::Object(Map::new()));
                }
                match &mut branches[j] {
                    Value::Object(branch) => project(branch, Node::of(item), rest, key),
                    _ => tracing::debug!(
                        step = %step,
                        index = j,
                        key = %key,
                        "output element is not a mapping, skipping"
                    ),
                }
            }
        }
        Node::Missing | Node::Scalar(_) | Node::Mapping(_) => {
            let Value::Object(branch) = slot else {
                tracing::debug!(
                    step = %step,
                    key = %key,
                    "output slot is not a mapping, skipping descent"
                );
                return;
            };
            project(branch, source, rest, key);
        }
    }
}
