//! Runtime error type.
//!
//! Only two conditions in this crate are observable at run time: combining
//! two variable-length sequences of different lengths, and indexing past the
//! end of a container-shaped quantity. Everything else (dimension mismatch,
//! fixed-array size mismatch, non-integer dimension roots, out-of-range
//! prefixes) is rejected while the program is being compiled and has no
//! runtime representation at all.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A runtime failure of a shape-polymorphic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Two variable-length sequences were combined elementwise but their
    /// lengths differ. Lengths are only known at the value level, so this
    /// cannot be caught earlier.
    #[error("cannot combine sequences of different lengths: {left} vs {right}")]
    ShapeMismatch { left: usize, right: usize },

    /// Indexed access past the end of a container-shaped quantity.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ShapeMismatch,
    IndexOutOfRange,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }
}
