//! # dynamic_bitset
//!
//! A growable container of packed bits: one byte of storage per eight
//! logical bits, with per-bit access, bulk predicates, insertion and
//! removal, slicing, and conversion to native integers.
//!
//! ```rust
//! use dynamic_bitset::DynamicBitset;
//!
//! let mut bs = DynamicBitset::with_len(10, false).unwrap();
//! bs.set(4, true).unwrap();
//!
//! assert!(bs.test(4).unwrap());
//! assert!(bs.any());
//! assert_eq!(bs.to_u64().unwrap(), 16);
//! ```
//!
//! Bits are addressed LSB-first within each byte: the bit at logical
//! position `p` lives in byte `p / 8` at offset `p % 8` from that byte's
//! least significant bit. That layout is an observable contract: it is what
//! [`DynamicBitset::to_u64`] and [`DynamicBitset::as_bytes`] expose.
//!
//! Every bitset exclusively owns its storage. Cloning and
//! [`DynamicBitset::slice`] produce fully independent copies, never shared
//! or reference-counted buffers.

pub mod error;
pub use error::BitsetError;

mod bitset;
pub use bitset::{DynamicBitset, Iter, MAX_BITS};
