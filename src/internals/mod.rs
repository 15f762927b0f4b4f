//! Internal tree representation and the primitives that mutate it.
//!
//! Nothing here is public API: `Rope` (in `lib.rs`) is the only thing a
//! caller touches. This module just keeps the recursive tree-surgery code
//! in one place, grounded directly against the node shape it operates on.

mod node;
mod ops;

pub(crate) use node::{Internal, Leaf, Node};
pub(crate) use ops::{cut_leftmost, join, join_left, join_right, split};
