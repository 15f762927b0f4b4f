//! Insertion and deletion: the tree-surgery routines that keep every leaf
//! ending in exactly one `'\n'` no matter where the edit lands.

use crate::internals::{cut_leftmost, join, join_left, join_right, split, Leaf, Node};
use crate::parse::{build_balanced, leaf_from_paragraph};
use crate::utf16;

/// Inserts a single `'\n'`-terminated paragraph fragment at raw offset
/// `at`. At a leaf boundary (`at` equal to some leaf's full length) this
/// prefers attaching the new paragraph to the *preceding* leaf, so typing
/// a newline at the end of a line creates a new line right after it.
pub(crate) fn insert_paragraph(node: Node, at: u32, fragment: &str) -> Node {
    match node {
        Node::Leaf(leaf) => leaf_insert_paragraph(leaf, at, fragment),
        Node::Internal(b) => {
            let crate::internals::Internal { left, right, weight, .. } = *b;
            if at <= weight {
                join(insert_paragraph(left, at, fragment), right)
            } else {
                join(left, insert_paragraph(right, at - weight, fragment))
            }
        }
    }
}

fn leaf_insert_paragraph(leaf: Leaf, at: u32, fragment: &str) -> Node {
    if at == leaf.len {
        let new_leaf = Node::new_leaf(fragment.to_string(), leaf.indentation);
        join(Node::Leaf(leaf), new_leaf)
    } else {
        let byte_at = utf16::to_byte_index(&leaf.content, at);
        let mut left_content = leaf.content[..byte_at].to_string();
        left_content.push_str(fragment);
        let right_content = leaf.content[byte_at..].to_string();

        let left_leaf = Node::Leaf(Leaf {
            len: utf16::len(&left_content),
            content: left_content,
            indentation: leaf.indentation,
            collapsed: leaf.collapsed,
        });
        let right_leaf = Node::new_leaf(right_content, leaf.indentation);
        join(left_leaf, right_leaf)
    }
}

/// Inserts plain (non-`'\n'`-containing) text at raw offset `at`. At a
/// leaf boundary this prefers the *following* leaf, so typing ordinary
/// characters right after a paragraph break continues that next line
/// rather than manufacturing an unterminated one.
pub(crate) fn insert_plain(node: Node, at: u32, text: &str) -> Node {
    match node {
        Node::Leaf(leaf) => leaf_insert_plain(leaf, at, text),
        Node::Internal(b) => {
            let crate::internals::Internal { left, right, weight, .. } = *b;
            if at < weight {
                join(insert_plain(left, at, text), right)
            } else {
                join(left, insert_plain(right, at - weight, text))
            }
        }
    }
}

fn leaf_insert_plain(mut leaf: Leaf, at: u32, text: &str) -> Node {
    let byte_at = utf16::to_byte_index(&leaf.content, at);
    leaf.content.insert_str(byte_at, text);
    leaf.len = utf16::len(&leaf.content);
    Node::Leaf(leaf)
}

/// Inserts possibly-multi-paragraph `text` at raw offset `offset`.
pub(crate) fn insert(mut root: Node, offset: u32, text: &str) -> Node {
    if text.is_empty() {
        return root;
    }
    let (terminated, last) = crate::parse::split_into_paragraphs(text);
    let at = offset;

    if let Some(tail) = last {
        root = insert_plain(root, at, tail);
    }

    if let Some((first, rest)) = terminated.split_first() {
        root = insert_paragraph(root, at, first);
        let after_first = at + utf16::len(first);
        if !rest.is_empty() {
            let leaves: Vec<Leaf> = rest.iter().map(|paragraph| leaf_from_paragraph(paragraph)).collect();
            let middle = build_balanced(leaves);
            let (l, r) = split(root, after_first);
            let left_plus_middle = join_left(l, middle);
            root = join_right(left_plus_middle, r);
        }
    }

    root
}

/// Deletes `len` raw units starting at raw offset `loc`. Returns `None`
/// only if the entire tree was removed, which the public API never
/// allows to happen (the sentinel leaf is never fully deletable through
/// `Rope::delete`'s bounds check).
pub(crate) fn delete(node: Node, loc: u32, len: u32) -> Option<Node> {
    if len == 0 {
        return Some(node);
    }
    match node {
        Node::Leaf(leaf) => delete_leaf(leaf, loc, len),
        Node::Internal(b) => {
            let crate::internals::Internal { left, right, weight, .. } = *b;
            if loc >= weight {
                match delete(right, loc - weight, len) {
                    None => Some(left),
                    Some(r) => Some(join(left, r)),
                }
            } else if loc + len < weight {
                match delete(left, loc, len) {
                    None => Some(right),
                    Some(l) => Some(join(l, right)),
                }
            } else {
                spanning_delete(left, right, loc, len, weight)
            }
        }
    }
}

fn delete_leaf(mut leaf: Leaf, loc: u32, len: u32) -> Option<Node> {
    if loc == 0 && len >= leaf.len {
        return None;
    }
    let start = utf16::to_byte_index(&leaf.content, loc);
    let end = utf16::to_byte_index(&leaf.content, loc + len);
    let removed_trailing_newline = loc + len == leaf.len;
    leaf.content.replace_range(start..end, "");
    leaf.len = utf16::len(&leaf.content);
    if removed_trailing_newline {
        leaf.collapsed = None;
    }
    Some(Node::Leaf(leaf))
}

/// A deletion that removes (or merely touches) the last code unit of
/// `left` — its trailing `'\n'` — must be followed by stitching the first
/// surviving leaf of `right` onto whatever is now the tail of `left`, or
/// the paragraph invariant breaks.
fn spanning_delete(left: Node, right: Node, loc: u32, len: u32, weight: u32) -> Option<Node> {
    let left_len = weight - loc;
    let right_len = len - left_len;

    let new_left = delete(left, loc, left_len);
    let new_right = delete(right, 0, right_len);

    match new_right {
        None => new_left,
        Some(r) => {
            let (cut_leaf, reduced_right) = cut_leftmost(r);
            let merged = match new_left {
                None => Node::Leaf(cut_leaf),
                Some(l) => graft_onto_rightmost(l, cut_leaf),
            };
            Some(join_right(merged, reduced_right))
        }
    }
}

/// Appends `cut`'s content onto the rightmost leaf of `node`, merging
/// `collapsed` subtrees per the rule that the surviving (left) leaf's
/// fold wins over the absorbed one.
fn graft_onto_rightmost(node: Node, cut: Leaf) -> Node {
    match node {
        Node::Leaf(mut leaf) => {
            leaf.content.push_str(&cut.content);
            leaf.len = utf16::len(&leaf.content);
            if leaf.collapsed.is_none() {
                leaf.collapsed = cut.collapsed;
            }
            Node::Leaf(leaf)
        }
        Node::Internal(b) => {
            let crate::internals::Internal { left, right, .. } = *b;
            join(left, graft_onto_rightmost(right, cut))
        }
    }
}
