//! # outline-rope
//!
//! A balanced rope specialized for outliner documents: a sequence of
//! paragraphs, each at some indentation level, any of which may have its
//! deeper-indented children folded away into a hidden subtree.
//!
//! Unlike a general-purpose text rope, this crate's leaves are whole
//! paragraphs rather than arbitrary runs of characters — every leaf's
//! content ends in exactly one `'\n'`, and that invariant is what the
//! insertion, deletion, indent, collapse, and expand algorithms are all
//! built to preserve. Offsets throughout the public API are UTF-16
//! code-unit counts, matching the coordinate system most editor
//! frontends already speak.
//!
//! For the algorithm this crate implements, see:
//!
//! + https://en.wikipedia.org/wiki/Rope_(data_structure)
//! + https://www.ibm.com/developerworks/library/j-ropes/

mod collapse;
mod error;
mod indent;
mod internals;
mod mutate;
mod parse;
mod traversal;
mod utf16;

pub use error::RopeError;

use internals::Node;

/// A balanced rope over an outliner document.
///
/// The empty document is represented the same way as any other: a
/// single sentinel paragraph holding nothing but its own `'\n'`, so every
/// method works uniformly whether or not the rope has ever been written
/// to.
#[derive(Debug, Clone)]
pub struct Rope {
    root: Node,
}

impl Default for Rope {
    fn default() -> Self {
        Self::new()
    }
}

impl Rope {
    /// An empty document.
    pub fn new() -> Self {
        Rope { root: Node::sentinel() }
    }

    /// Parses `text` into a rope. Each line's leading tabs become that
    /// paragraph's indentation; the rest of the line (plus its `'\n'`,
    /// added if `text` doesn't already end in one) becomes its content.
    pub fn from_text(text: &str) -> Self {
        let leaves = parse::parse_leaves(text);
        Rope { root: parse::build_balanced(leaves) }
    }

    /// The document's visible length, in UTF-16 code units — everything
    /// a reader would see, not counting the final structural `'\n'`.
    pub fn length(&self) -> u32 {
        self.root.len() - 1
    }

    /// The document's text as a reader would see it: paragraphs joined by
    /// `'\n'`, with no leading tabs and no trailing newline. Any
    /// collapsed subtrees stay hidden.
    pub fn visible_string(&self) -> String {
        let mut out = String::with_capacity(self.root.len() as usize);
        traversal::visit_forward(&self.root, 0, self.root.len(), |leaf, _| {
            out.push_str(&leaf.content);
            true
        });
        out.pop();
        out
    }

    /// The document's length including the leading tabs that encode each
    /// paragraph's indentation — the length of [`Self::file_string`].
    pub fn file_length(&self) -> u32 {
        let mut indentation_total = 0u32;
        traversal::visit_forward(&self.root, 0, self.root.len(), |leaf, _| {
            indentation_total += leaf.indentation;
            true
        });
        self.length() + indentation_total
    }

    /// The document's text in on-disk form: each paragraph prefixed with
    /// one tab per indentation level. Round-trips through
    /// [`Self::from_text`] for any text whose lines are leading tabs
    /// followed by content.
    pub fn file_string(&self) -> String {
        let mut out = String::with_capacity(self.file_length() as usize + 1);
        traversal::visit_forward(&self.root, 0, self.root.len(), |leaf, _| {
            for _ in 0..leaf.indentation {
                out.push('\t');
            }
            out.push_str(&leaf.content);
            true
        });
        out.pop();
        out
    }

    /// Inserts `text` at `offset`, an offset into [`Self::visible_string`].
    ///
    /// `text` may contain any number of `'\n'`s; each one starts a new
    /// paragraph at the indentation of whatever paragraph it's inserted
    /// into.
    pub fn insert(&mut self, text: &str, offset: u32) -> Result<(), RopeError> {
        let length = self.length();
        if offset > length {
            return Err(RopeError::InvalidInsertOffset { offset, length });
        }
        let root = std::mem::replace(&mut self.root, Node::sentinel());
        self.root = mutate::insert(root, offset, text);
        Ok(())
    }

    /// Deletes the `length`-unit range starting at `location`.
    ///
    /// Deleting a paragraph's `'\n'` merges it with the following
    /// paragraph (and discards that following paragraph's collapsed
    /// subtree if the surviving paragraph already had one of its own).
    pub fn delete(&mut self, location: u32, length: u32) -> Result<(), RopeError> {
        let doc_length = self.length();
        if location + length > doc_length {
            return Err(RopeError::InvalidDeleteRange { location, length, doc_length });
        }
        if length == 0 {
            return Ok(());
        }
        let root = std::mem::replace(&mut self.root, Node::sentinel());
        self.root = mutate::delete(root, location, length).expect("delete: document cannot become empty");
        Ok(())
    }

    /// Shifts the indentation of every paragraph overlapping the
    /// `length`-unit range starting at `location` by `delta` (negative to
    /// outdent). Indentation never goes below zero.
    pub fn indent(&mut self, location: u32, length: u32, delta: i32) -> Result<(), RopeError> {
        let doc_length = self.length();
        if location + length > doc_length {
            return Err(RopeError::InvalidRange { location, length, doc_length });
        }
        let end = if length == 0 { location + 1 } else { location + length };
        indent::shift_range(&mut self.root, location, end, delta);
        Ok(())
    }

    /// Folds every paragraph with at least one deeper-indented child,
    /// overlapping the `length`-unit range starting at `location`, into
    /// a hidden subtree hung off of it.
    pub fn collapse(&mut self, location: u32, length: u32) -> Result<(), RopeError> {
        let doc_length = self.length();
        if location + length > doc_length {
            return Err(RopeError::InvalidRange { location, length, doc_length });
        }
        let total_len = self.root.len();
        if !collapse::collapse(&mut self.root, total_len, location, length) {
            return Err(RopeError::CannotCollapse { location, length });
        }
        Ok(())
    }

    /// Unfolds every collapsed paragraph with a raw span overlapping the
    /// `length`-unit range starting at `location`.
    pub fn expand(&mut self, location: u32, length: u32) -> Result<(), RopeError> {
        let doc_length = self.length();
        if location + length > doc_length {
            return Err(RopeError::InvalidRange { location, length, doc_length });
        }
        if !collapse::expand(&mut self.root, location, length) {
            return Err(RopeError::CannotExpand { location, length });
        }
        Ok(())
    }

    /// The indentation level of the paragraph containing `offset`.
    pub fn depth(&self, offset: u32) -> Result<u32, RopeError> {
        let length = self.length();
        if offset > length {
            return Err(RopeError::InvalidQueryOffset { offset, length });
        }
        let (leaf, _) = traversal::leaf_at(&self.root, offset);
        Ok(leaf.indentation)
    }

    /// The visible `(start, length)` of the paragraph containing `offset`.
    pub fn range_of_line(&self, offset: u32) -> Result<(u32, u32), RopeError> {
        let length = self.length();
        if offset > length {
            return Err(RopeError::InvalidQueryOffset { offset, length });
        }
        let (leaf, start) = traversal::leaf_at(&self.root, offset);
        let is_rightmost = start + leaf.len == self.root.len();
        let visible_len = if is_rightmost { leaf.len - 1 } else { leaf.len };
        Ok((start, visible_len))
    }
}

#[cfg(test)]
mod test;
