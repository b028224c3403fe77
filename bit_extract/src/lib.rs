//! # bit_extract
//!
//! Stateless bit-level reads over caller-owned byte buffers.
//!
//! Bits are addressed LSB-first within each byte: bit 0 of a buffer is the
//! least significant bit of its first byte. Multi-bit reads are returned
//! right-aligned, so the bit at `pos` becomes bit 0 of the result.
//!
//! ```rust
//! use bit_extract::{bit, extract_u64};
//!
//! // 0x2D = 0b0010_1101
//! let buf = [0x2Du8, 0x00];
//!
//! assert_eq!(bit(0, &buf).unwrap(), 1);
//! assert_eq!(bit(1, &buf).unwrap(), 0);
//!
//! // Three bits starting at position 2: 0b011
//! assert_eq!(extract_u64(2, 3, &buf).unwrap(), 0b011);
//! ```
//!
//! Requested ranges may straddle byte boundaries freely; the buffer is never
//! assumed aligned to the request.

pub mod error;
pub use error::BitExtractError;

mod extract;
pub use extract::{
    bit, extract_i8, extract_i16, extract_i32, extract_i64, extract_u8, extract_u16, extract_u32,
    extract_u64,
};
