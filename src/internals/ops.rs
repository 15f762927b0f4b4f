//! Structural surgery on the tree: joining two subtrees into a balanced
//! one, and splitting a subtree at a leaf boundary. Every other mutating
//! operation in this crate (insertion, deletion, indent, collapse, expand)
//! is built out of these two primitives plus direct leaf edits.

use std::cmp::max;

use super::node::{Internal, Node};

/// Builds a branch over `left` and `right` and rebalances it.
///
/// This is the only place a `Node::Internal` gets constructed, so it's
/// also the only place `weight`/`len`/`height` get computed — always
/// freshly, from the children, never patched in place.
pub(crate) fn join(left: Node, right: Node) -> Node {
    rebalance(make_internal(left, right))
}

/// Joins `left` with `right` when `left` may be absent.
pub(crate) fn join_left(left: Option<Node>, right: Node) -> Node {
    match left {
        Some(left) => join(left, right),
        None => right,
    }
}

/// Joins `left` with `right` when `right` may be absent.
pub(crate) fn join_right(left: Node, right: Option<Node>) -> Node {
    match right {
        Some(right) => join(left, right),
        None => left,
    }
}

fn make_internal(left: Node, right: Node) -> Node {
    let weight = left.len();
    let len = weight + right.len();
    let height = 1 + max(left.height(), right.height());
    Node::Internal(Box::new(Internal { left, right, weight, len, height }))
}

/// Splits `node` at raw offset `at`, which must land on a leaf boundary —
/// i.e. `at` must equal the cumulative length of some prefix of leaves.
/// Splitting in the interior of a leaf's content is a programmer error:
/// mid-paragraph insertion and deletion go through the leaf-editing
/// helpers in `mutate`, never through `split`.
pub(crate) fn split(node: Node, at: u32) -> (Option<Node>, Option<Node>) {
    match node {
        Node::Leaf(leaf) => {
            if at == 0 {
                (None, Some(Node::Leaf(leaf)))
            } else if at == leaf.len {
                (Some(Node::Leaf(leaf)), None)
            } else {
                panic!("split: offset {} does not fall on a leaf boundary (leaf length {})", at, leaf.len);
            }
        }
        Node::Internal(b) => {
            let Internal { left, right, weight, .. } = *b;
            if at < weight {
                let (ll, lr) = split(left, at);
                (ll, Some(join_left(lr, right)))
            } else {
                let (rl, rr) = split(right, at - weight);
                (Some(join_right(left, rl)), rr)
            }
        }
    }
}

/// Removes and returns the leftmost leaf of `node`, along with whatever
/// remains of the subtree (`None` if `node` was that one leaf).
pub(crate) fn cut_leftmost(node: Node) -> (super::node::Leaf, Option<Node>) {
    match node {
        Node::Leaf(leaf) => (leaf, None),
        Node::Internal(b) => {
            let Internal { left, right, .. } = *b;
            let (leaf, rest) = cut_leftmost(left);
            let combined = match rest {
                Some(rest) => join(rest, right),
                None => right,
            };
            (leaf, Some(combined))
        }
    }
}

fn rebalance(node: Node) -> Node {
    match node {
        Node::Leaf(_) => node,
        Node::Internal(b) => {
            let Internal { mut left, mut right, .. } = *b;
            let balance = left.height() as i64 - right.height() as i64;
            if balance > 1 {
                if left_heavy_needs_double_rotation(&left) {
                    left = rotate_left(left);
                }
                rotate_right(make_internal(left, right))
            } else if balance < -1 {
                if right_heavy_needs_double_rotation(&right) {
                    right = rotate_right(right);
                }
                rotate_left(make_internal(left, right))
            } else {
                make_internal(left, right)
            }
        }
    }
}

fn left_heavy_needs_double_rotation(left: &Node) -> bool {
    match left {
        Node::Internal(b) => b.left.height() < b.right.height(),
        Node::Leaf(_) => false,
    }
}

fn right_heavy_needs_double_rotation(right: &Node) -> bool {
    match right {
        Node::Internal(b) => b.right.height() < b.left.height(),
        Node::Leaf(_) => false,
    }
}

/// Standard AVL left rotation: `(a, (b, c)) -> ((a, b), c)`.
fn rotate_left(node: Node) -> Node {
    match node {
        Node::Internal(b) => {
            let Internal { left: a, right, .. } = *b;
            match right {
                Node::Internal(rb) => {
                    let Internal { left: b, right: c, .. } = *rb;
                    make_internal(make_internal(a, b), c)
                }
                leaf @ Node::Leaf(_) => make_internal(a, leaf),
            }
        }
        leaf @ Node::Leaf(_) => leaf,
    }
}

/// Standard AVL right rotation: `((a, b), c) -> (a, (b, c))`.
fn rotate_right(node: Node) -> Node {
    match node {
        Node::Internal(b) => {
            let Internal { left, right: c, .. } = *b;
            match left {
                Node::Internal(lb) => {
                    let Internal { left: a, right: b, .. } = *lb;
                    make_internal(a, make_internal(b, c))
                }
                leaf @ Node::Leaf(_) => make_internal(leaf, c),
            }
        }
        leaf @ Node::Leaf(_) => leaf,
    }
}
