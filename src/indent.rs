//! Indent and outdent: shifting the indentation of every leaf in a range.

use crate::internals::{Internal, Node};

/// Applies `delta` to the indentation of every leaf whose raw span
/// overlaps `[start, end)`, clamping at zero so outdenting a top-level
/// paragraph is a no-op rather than an underflow.
pub(crate) fn shift_range(node: &mut Node, start: u32, end: u32, delta: i32) {
    match node {
        Node::Leaf(leaf) => {
            leaf.indentation = (leaf.indentation as i64 + delta as i64).max(0) as u32;
        }
        Node::Internal(b) => {
            let Internal { left, right, weight, .. } = b.as_mut();
            let weight = *weight;
            if start < weight {
                shift_range(left, start, end.min(weight), delta);
            }
            if end > weight {
                shift_range(right, start.saturating_sub(weight), end - weight, delta);
            }
        }
    }
}

/// Shifts every (visible) leaf inside `node` by `delta`, without
/// descending into any `collapsed` subtree — used when a folded block is
/// re-based onto its new parent's indentation during collapse/expand.
pub(crate) fn shift_all(node: &mut Node, delta: i32) {
    match node {
        Node::Leaf(leaf) => {
            leaf.indentation = (leaf.indentation as i64 + delta as i64).max(0) as u32;
        }
        Node::Internal(b) => {
            shift_all(&mut b.left, delta);
            shift_all(&mut b.right, delta);
        }
    }
}
