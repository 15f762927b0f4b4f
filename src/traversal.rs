//! The in-order traversal engine, and the leaf/indentation queries built on
//! top of it.
//!
//! Every derived helper here walks the tree with an explicit stack rather
//! than recursion, descending only as far as it needs to reach `start` (or
//! `end`, going backward) before switching to ordinary push-right/push-left
//! stepping — so a query near the front of a huge document doesn't pay for
//! the leaves behind it, and one near the back doesn't pay for the ones
//! ahead of it. Nothing here ever follows a leaf's `collapsed` pointer: a
//! folded subtree is invisible to this traversal by construction, exactly
//! as it is invisible to `visible_string`.

use crate::internals::{Leaf, Node};

/// Visits leaves in order, starting at the leaf containing `start` and
/// stopping once a leaf at or past `end` would be visited. `visitor`
/// returns `false` to stop early.
pub(crate) fn visit_forward<'a, F>(root: &'a Node, start: u32, end: u32, mut visitor: F)
where
    F: FnMut(&'a Leaf, u32) -> bool,
{
    let mut stack: Vec<(&'a Node, u32)> = Vec::new();
    let mut node = root;
    let mut offset = 0u32;
    loop {
        match node {
            Node::Leaf(_) => {
                stack.push((node, offset));
                break;
            }
            Node::Internal(b) => {
                if start < offset + b.weight {
                    stack.push((&b.right, offset + b.weight));
                    node = &b.left;
                } else {
                    offset += b.weight;
                    node = &b.right;
                }
            }
        }
    }

    while let Some((node, offset)) = stack.pop() {
        if offset >= end {
            return;
        }
        match node {
            Node::Leaf(leaf) => {
                if !visitor(leaf, offset) {
                    return;
                }
            }
            Node::Internal(b) => {
                stack.push((&b.right, offset + b.weight));
                stack.push((&b.left, offset));
            }
        }
    }
}

/// Visits leaves in reverse order, starting at the leaf containing the
/// last unit before `end` and stopping once a leaf entirely before `start`
/// would be visited.
pub(crate) fn visit_backward<'a, F>(root: &'a Node, start: u32, end: u32, mut visitor: F)
where
    F: FnMut(&'a Leaf, u32) -> bool,
{
    let mut stack: Vec<(&'a Node, u32)> = Vec::new();
    let mut node = root;
    let mut offset = 0u32;
    loop {
        match node {
            Node::Leaf(_) => {
                stack.push((node, offset));
                break;
            }
            Node::Internal(b) => {
                if end > offset + b.weight {
                    stack.push((&b.left, offset));
                    node = &b.right;
                    offset += b.weight;
                } else {
                    node = &b.left;
                }
            }
        }
    }

    while let Some((node, offset)) = stack.pop() {
        if offset + node.len() <= start {
            return;
        }
        match node {
            Node::Leaf(leaf) => {
                if !visitor(leaf, offset) {
                    return;
                }
            }
            Node::Internal(b) => {
                stack.push((&b.left, offset));
                stack.push((&b.right, offset + b.weight));
            }
        }
    }
}

/// The leaf whose raw span contains `offset`, and that leaf's raw start.
pub(crate) fn leaf_at(root: &Node, offset: u32) -> (&Leaf, u32) {
    let mut found = None;
    visit_forward(root, offset, offset + 1, |leaf, start| {
        found = Some((leaf, start));
        false
    });
    found.expect("leaf_at: offset out of bounds")
}

/// Every leaf whose raw span overlaps `[start, end)`, in order. A
/// zero-length range still yields the single leaf containing `start`.
pub(crate) fn leaves_in(root: &Node, start: u32, end: u32) -> Vec<(&Leaf, u32)> {
    let mut out = Vec::new();
    if start == end {
        let (leaf, offset) = leaf_at(root, start);
        out.push((leaf, offset));
        return out;
    }
    visit_forward(root, start, end, |leaf, offset| {
        out.push((leaf, offset));
        true
    });
    out
}

/// The nearest leaf strictly before `before_offset` whose indentation is
/// less than `indentation` — the enclosing parent of the item at that
/// depth, per the outline's nesting rule.
pub(crate) fn parent_of_leaf(root: &Node, before_offset: u32, indentation: u32) -> Option<(&Leaf, u32)> {
    let mut found = None;
    visit_backward(root, 0, before_offset, |leaf, offset| {
        if leaf.indentation < indentation {
            found = Some((leaf, offset));
            false
        } else {
            true
        }
    });
    found
}

/// The contiguous run of leaves immediately after `after_offset` whose
/// indentation is greater than `indentation` — the children of the item
/// ending at `after_offset`.
pub(crate) fn children_of_leaf<'a>(
    root: &'a Node,
    after_offset: u32,
    total_len: u32,
    indentation: u32,
) -> Vec<(&'a Leaf, u32)> {
    let mut out = Vec::new();
    visit_forward(root, after_offset, total_len, |leaf, offset| {
        if leaf.indentation > indentation {
            out.push((leaf, offset));
            true
        } else {
            false
        }
    });
    out
}
