//! Collapse and expand: folding a paragraph's deeper-indented children
//! into a hidden subtree hanging off of it, and unfolding them again.

use std::collections::HashSet;

use crate::indent::shift_all;
use crate::internals::{cut_leftmost, join, join_left, join_right, split, Leaf, Node};
use crate::traversal::{children_of_leaf, leaves_in, parent_of_leaf};

struct Candidate {
    start: u32,
    own_len: u32,
    children_len: u32,
}

fn children_len_of(root: &Node, after_offset: u32, total_len: u32, indentation: u32) -> u32 {
    children_of_leaf(root, after_offset, total_len, indentation).iter().map(|(l, _)| l.len).sum()
}

/// The parent subtree that `leaf` (sitting at `start`) would collapse:
/// the leaf itself if it has children, otherwise its nearest enclosing
/// parent. `None` if neither has any children to hide.
fn candidate_for_leaf(root: &Node, total_len: u32, leaf: &Leaf, start: u32) -> Option<Candidate> {
    let own_end = start + leaf.len;
    let children_len = children_len_of(root, own_end, total_len, leaf.indentation);
    if children_len > 0 {
        return Some(Candidate { start, own_len: leaf.len, children_len });
    }
    let (parent, parent_start) = parent_of_leaf(root, start, leaf.indentation)?;
    let parent_end = parent_start + parent.len;
    let children_len = children_len_of(root, parent_end, total_len, parent.indentation);
    if children_len == 0 {
        return None;
    }
    Some(Candidate { start: parent_start, own_len: parent.len, children_len })
}

/// For every leaf intersecting `[location, location+length)`, finds its
/// collapse candidate — itself if it has children, else its nearest
/// enclosing parent — dedupes by identity, drops any candidate wholly
/// contained in another (a selection spanning both a parent and one of
/// its own descendants collapses only the parent), and orders what's left
/// by descending start offset so folding one never perturbs another's
/// offset.
fn find_candidates(root: &Node, total_len: u32, location: u32, length: u32) -> Vec<Candidate> {
    let end = if length == 0 { location + 1 } else { location + length };
    let leaves = leaves_in(root, location, end);
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    for (leaf, start) in leaves {
        if let Some(candidate) = candidate_for_leaf(root, total_len, leaf, start) {
            if seen.insert(candidate.start) {
                found.push(candidate);
            }
        }
    }

    found.sort_by_key(|c| std::cmp::Reverse(c.own_len + c.children_len));
    let mut kept: Vec<Candidate> = Vec::new();
    'candidates: for c in found {
        let c_end = c.start + c.own_len + c.children_len;
        for k in &kept {
            let k_end = k.start + k.own_len + k.children_len;
            if c.start >= k.start && c_end <= k_end {
                continue 'candidates;
            }
        }
        kept.push(c);
    }
    kept.sort_by(|a, b| b.start.cmp(&a.start));
    kept
}

/// Folds every collapsible parent overlapping `[location, location+length)`
/// into its own hidden subtree. Returns `true` if at least one fold
/// happened.
pub(crate) fn collapse(root: &mut Node, total_len: u32, location: u32, length: u32) -> bool {
    let candidates = find_candidates(root, total_len, location, length);
    if candidates.is_empty() {
        return false;
    }
    for candidate in candidates {
        take_and_replace(root, |tree| fold_one(tree, candidate.start, candidate.own_len, candidate.children_len));
    }
    true
}

fn fold_one(root: Node, start: u32, own_len: u32, children_len: u32) -> Node {
    let (left, rest) = split(root, start);
    let (mid, right) = split(rest.expect("fold_one: candidate start out of bounds"), own_len + children_len);
    let mid = mid.expect("fold_one: candidate range out of bounds");

    let (mut leaf, children) = cut_leftmost(mid);
    if let Some(mut children) = children {
        shift_all(&mut children, -(leaf.indentation as i32));
        leaf.collapsed = Some(Box::new(match leaf.collapsed.take() {
            Some(existing) => join(existing, children),
            None => children,
        }));
    }

    let folded = Node::Leaf(leaf);
    join_right(join_left(left, folded), right)
}

/// Unfolds every collapsed leaf with a raw span overlapping
/// `[location, location+length)`. Returns `true` if at least one unfold
/// happened.
pub(crate) fn expand(root: &mut Node, location: u32, length: u32) -> bool {
    let targets: Vec<u32> = {
        let leaves = leaves_in(root, location, if length == 0 { location + 1 } else { location + length });
        leaves
            .into_iter()
            .filter(|(leaf, _)| leaf.collapsed.is_some())
            .map(|(_, start)| start)
            .collect()
    };
    if targets.is_empty() {
        return false;
    }
    for start in targets.into_iter().rev() {
        take_and_replace(root, |tree| unfold_one(tree, start));
    }
    true
}

fn unfold_one(root: Node, start: u32) -> Node {
    let (left, rest) = split(root, start);
    let rest = rest.expect("unfold_one: target start out of bounds");
    let (mut leaf, after) = cut_leftmost(rest);
    let indentation = leaf.indentation;
    let collapsed = leaf.collapsed.take();

    let mut result = join_left(left, Node::Leaf(leaf));
    if let Some(children) = collapsed {
        let mut children = *children;
        shift_all(&mut children, indentation as i32);
        result = join(result, children);
    }
    join_right(result, after)
}

fn take_and_replace(slot: &mut Node, f: impl FnOnce(Node) -> Node) {
    let taken = std::mem::replace(slot, Node::sentinel());
    *slot = f(taken);
}
