//! Parsing plain text into a balanced tree of paragraph leaves.

use crate::internals::{join, Leaf, Node};

/// Splits `text` into `(leading tabs, content)` pairs, one per paragraph.
/// `content` always ends in exactly one `'\n'`, even if `text` itself
/// doesn't end in one — a missing trailing newline is treated as
/// equivalent to the document simply having no blank line at the end,
/// not as an extra empty paragraph. The rightmost leaf's own `'\n'` is
/// never materialized as a dedicated empty sentinel; "sentinel" is a role
/// that belongs to whichever leaf ends up rightmost, not a fixed node.
pub(crate) fn parse_leaves(text: &str) -> Vec<Leaf> {
    if text.is_empty() {
        return vec![Leaf::sentinel()];
    }
    let owned;
    let with_terminator: &str = if text.ends_with('\n') {
        text
    } else {
        owned = format!("{text}\n");
        &owned
    };
    with_terminator.split_inclusive('\n').map(leaf_from_paragraph).collect()
}

/// Builds a single leaf from a `'\n'`-terminated paragraph, splitting off
/// its leading tabs as indentation.
pub(crate) fn leaf_from_paragraph(paragraph: &str) -> Leaf {
    let tabs = paragraph.bytes().take_while(|&b| b == b'\t').count();
    Leaf::new(paragraph[tabs..].to_string(), tabs as u32)
}

/// Splits `text` into zero or more complete (`'\n'`-terminated) paragraphs
/// plus an optional trailing unterminated remainder.
pub(crate) fn split_into_paragraphs(text: &str) -> (Vec<&str>, Option<&str>) {
    if text.is_empty() {
        return (Vec::new(), None);
    }
    let mut parts: Vec<&str> = text.split_inclusive('\n').collect();
    let last = if text.ends_with('\n') { None } else { parts.pop() };
    (parts, last)
}

/// Builds a height-balanced tree over `leaves` by recursively splitting
/// down the middle, the same construction `Rope::from_text` and
/// multi-paragraph inserts both use.
pub(crate) fn build_balanced(leaves: Vec<Leaf>) -> Node {
    fn recur(mut leaves: Vec<Leaf>) -> Node {
        if leaves.len() == 1 {
            return Node::Leaf(leaves.pop().unwrap());
        }
        let mid = leaves.len() / 2;
        let right_half = leaves.split_off(mid);
        join(recur(leaves), recur(right_half))
    }
    assert!(!leaves.is_empty(), "build_balanced: no leaves to build a tree from");
    recur(leaves)
}
