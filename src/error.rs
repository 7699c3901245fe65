//! Error types for kernel and cursor operations.
//!
//! Every variant signals a programming mistake at the call site; none are
//! recoverable inside the kernel. Operations validate before mutating, so a
//! returned error implies no observable state change.

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by sequence, snapshot, and cursor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A slice point addressed a slice outside the slice list, or an offset
    /// past the end of its slice, in a mutating primitive.
    #[error("invalid slice point: slice {slice} offset {offset} in kernel of {slices} slice(s)")]
    InvalidSlicePoint {
        /// Slice index of the offending point.
        slice: usize,
        /// Offset within the slice.
        offset: usize,
        /// Number of slices in the kernel at the time of the call.
        slices: usize,
    },

    /// A cursor was used with the wrong sequence, was singular, or was
    /// positioned before the start where a real position is required.
    #[error("invalid cursor operation: {0}")]
    InvalidCursorOp(&'static str),

    /// Dereference of a singular, pre-begin, or past-end cursor.
    #[error("invalid dereference: {0}")]
    InvalidDereference(&'static str),

    /// An index exceeded the addressable range of a storage engine.
    #[error("index {index} out of range for storage of {len} element(s)")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Storage length at the time of the call.
        len: usize,
    },
}
