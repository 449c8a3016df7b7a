//! Runtime errors.

/// Errors raised when moving components between vectors and plain slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The slice holds fewer elements than the vector has components.
    #[error("Slice too short: expected at least {expected} elements, got {found}")]
    SliceTooShort {
        /// The number of components of the vector.
        expected: usize,
        /// The length of the slice.
        found: usize,
    },
}

/// Result type of the fallible slice conversions.
pub type Result<T> = core::result::Result<T, Error>;
