//! The error taxonomy for every fallible public operation.
//!
//! Boundary violations driven by caller-supplied offsets (an insertion
//! point past the end of the document, a collapse range that matches no
//! subtree, ...) are always reported through `Result`, never by panicking
//! — a caller wiring this rope up to untrusted input (a remote edit, a
//! malformed save file) can recover instead of bringing the process down.
//! Violations of this crate's own internal invariants remain `panic!`s:
//! they can only happen if there is a bug in this crate, not from
//! anything a caller did.

use thiserror::Error;

/// Everything that can go wrong calling into a [`crate::Rope`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RopeError {
    /// An `insert` offset fell outside `0..=length`.
    #[error("insert offset {offset} is out of bounds (document length is {length})")]
    InvalidInsertOffset { offset: u32, length: u32 },

    /// A `delete` range reached past the end of the document.
    #[error("delete range {location}..{} is out of bounds (document length is {doc_length})", location + length)]
    InvalidDeleteRange { location: u32, length: u32, doc_length: u32 },

    /// A query offset (`depth`, `range_of_line`) fell outside `0..=length`.
    #[error("query offset {offset} is out of bounds (document length is {length})")]
    InvalidQueryOffset { offset: u32, length: u32 },

    /// A range passed to `indent`, `collapse`, or `expand` reached past
    /// the end of the document.
    #[error("range {location}..{} is out of bounds (document length is {doc_length})", location + length)]
    InvalidRange { location: u32, length: u32, doc_length: u32 },

    /// `collapse` found no subtree eligible to fold at the given range.
    #[error("no collapsible subtree covers range {location}..{}", location + length)]
    CannotCollapse { location: u32, length: u32 },

    /// `expand` found no collapsed leaf within the given range.
    #[error("no collapsed leaf found in range {location}..{}", location + length)]
    CannotExpand { location: u32, length: u32 },
}
