use thiserror::Error;

/// Extraction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitExtractError {
    /// A bit position (or the end of a requested range) falls outside the
    /// buffer.
    #[error("bit position {pos} is out of range for a buffer of {bit_len} bits")]
    OutOfRange { pos: usize, bit_len: usize },

    /// The requested width does not leave room for the destination type's
    /// top bit.
    #[error("cannot read {width} bits into a {max}-bit result")]
    WidthTooLarge { width: usize, max: u32 },
}
