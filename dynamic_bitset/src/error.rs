use thiserror::Error;

/// Bitset errors
///
/// Every failure is a precondition violation reported at the offending
/// call, before any mutation becomes observable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitsetError {
    /// A bit position (or range bound) falls outside `[0, len)`.
    #[error("bit position {pos} is out of range for {len} bits")]
    OutOfRange { pos: usize, len: usize },

    /// A range where the start bound is past the end bound.
    #[error("range start {start} is greater than range end {end}")]
    InvalidRange { start: usize, end: usize },

    /// A requested bit count past the storage limit.
    #[error("requested {requested} bits exceeds the limit of {max} bits")]
    SizeLimit { requested: usize, max: usize },

    /// Integer conversion requested for a bitset wider than the destination.
    #[error("{len} bits do not fit in a {width}-bit integer")]
    Overflow { len: usize, width: u32 },
}
