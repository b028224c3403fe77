//! Single-bit and multi-bit reads from raw byte buffers.

use crate::BitExtractError;

/// Returns the value (0 or 1) of the bit at `pos` in `src`.
///
/// Bit 0 of each byte is its least significant bit.
///
/// # Errors
///
/// Returns [`BitExtractError::OutOfRange`] when `pos >= src.len() * 8`.
///
/// # Examples
///
/// ```
/// use bit_extract::bit;
///
/// let buf = [0b0000_0101u8];
/// assert_eq!(bit(0, &buf).unwrap(), 1);
/// assert_eq!(bit(1, &buf).unwrap(), 0);
/// assert_eq!(bit(2, &buf).unwrap(), 1);
/// assert!(bit(8, &buf).is_err());
/// ```
pub fn bit(pos: usize, src: &[u8]) -> Result<u8, BitExtractError> {
    let bit_len = src.len() * 8;
    if pos >= bit_len {
        return Err(BitExtractError::OutOfRange { pos, bit_len });
    }
    Ok((src[pos / 8] >> (pos % 8)) & 1)
}

/// Accumulates `width` bits starting at `pos` into a right-aligned `u64`.
///
/// Walks the range one byte at a time: take `min(remaining, 8 - offset)`
/// bits from the current byte through a byte-local mask, shift down to
/// byte-local position, then place at the running bit count and OR in.
/// Bounds are the caller's responsibility.
fn accumulate(src: &[u8], mut pos: usize, width: usize) -> u64 {
    let mut result = 0u64;
    let mut placed = 0;
    let mut remaining = width;

    while remaining > 0 {
        let byte = pos / 8;
        let offset = pos % 8;
        let take = remaining.min(8 - offset);

        let mask = ((1u16 << take) - 1) as u8;
        let chunk = (src[byte] >> offset) & mask;
        result |= u64::from(chunk) << placed;

        pos += take;
        placed += take;
        remaining -= take;
    }

    result
}

fn check_range(pos: usize, width: usize, src: &[u8]) -> Result<(), BitExtractError> {
    let bit_len = src.len() * 8;
    if pos >= bit_len {
        return Err(BitExtractError::OutOfRange { pos, bit_len });
    }
    if pos + width > bit_len {
        return Err(BitExtractError::OutOfRange {
            pos: pos + width,
            bit_len,
        });
    }
    Ok(())
}

macro_rules! extract_fns {
    ($($(#[$meta:meta])* $name:ident => $ty:ty),* $(,)?) => {$(
        $(#[$meta])*
        pub fn $name(pos: usize, width: usize, src: &[u8]) -> Result<$ty, BitExtractError> {
            if width >= <$ty>::BITS as usize {
                return Err(BitExtractError::WidthTooLarge {
                    width,
                    max: <$ty>::BITS,
                });
            }
            check_range(pos, width, src)?;
            Ok(accumulate(src, pos, width) as $ty)
        }
    )*};
}

extract_fns! {
    /// Reads `width` bits starting at `pos` as a right-aligned `u8`.
    ///
    /// # Errors
    ///
    /// [`BitExtractError::WidthTooLarge`] when `width >= 8`,
    /// [`BitExtractError::OutOfRange`] when the range falls outside `src`.
    extract_u8 => u8,
    /// Reads `width` bits starting at `pos` as a right-aligned `u16`.
    extract_u16 => u16,
    /// Reads `width` bits starting at `pos` as a right-aligned `u32`.
    extract_u32 => u32,
    /// Reads `width` bits starting at `pos` as a right-aligned `u64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_extract::extract_u64;
    ///
    /// // A 12-bit field starting at bit 4, straddling the byte boundary.
    /// let buf = [0xA0u8, 0xBC, 0x00];
    /// assert_eq!(extract_u64(4, 12, &buf).unwrap(), 0xBCA);
    /// ```
    extract_u64 => u64,
    /// Reads `width` bits starting at `pos` as a right-aligned `i8`.
    ///
    /// Since `width < 8` always holds, the result is never negative; the
    /// routine does not sign-extend past the requested width.
    extract_i8 => i8,
    /// Reads `width` bits starting at `pos` as a right-aligned `i16`.
    extract_i16 => i16,
    /// Reads `width` bits starting at `pos` as a right-aligned `i32`.
    extract_i32 => i32,
    /// Reads `width` bits starting at `pos` as a right-aligned `i64`.
    extract_i64 => i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0b11111111_11111011_10011111_01111101 as little-endian bytes
    const SAMPLE: [u8; 4] = [0x7D, 0x9F, 0xFB, 0xFF];

    #[test]
    fn single_bits() {
        assert_eq!(bit(0, &SAMPLE).unwrap(), 1);
        assert_eq!(bit(1, &SAMPLE).unwrap(), 0);
        assert_eq!(bit(31, &SAMPLE).unwrap(), 1);
    }

    #[test]
    fn bit_out_of_range() {
        assert_eq!(
            bit(32, &SAMPLE),
            Err(BitExtractError::OutOfRange {
                pos: 32,
                bit_len: 32
            })
        );
        assert!(bit(0, &[]).is_err());
    }

    #[test]
    fn eighteen_bit_field() {
        // The 18-bit field at bit 4, right-aligned.
        let expected = 0b11_1011_1001_1111_0111;
        assert_eq!(extract_i64(4, 18, &SAMPLE).unwrap(), expected);
        assert_eq!(extract_u64(4, 18, &SAMPLE).unwrap(), expected as u64);
        assert_eq!(extract_i32(4, 18, &SAMPLE).unwrap(), expected as i32);
    }

    #[test]
    fn byte_straddling() {
        let buf = [0b1010_0000u8, 0b0000_0101];
        // Bits 5..=10: 101 from byte 0, 101 from byte 1 -> 0b101_101
        assert_eq!(extract_u64(5, 6, &buf).unwrap(), 0b101_101);
    }

    #[test]
    fn zero_width_is_zero() {
        assert_eq!(extract_u64(3, 0, &SAMPLE).unwrap(), 0);
    }

    #[test]
    fn width_must_fit_destination() {
        assert_eq!(
            extract_u8(0, 8, &SAMPLE),
            Err(BitExtractError::WidthTooLarge { width: 8, max: 8 })
        );
        assert_eq!(
            extract_u64(0, 64, &SAMPLE),
            Err(BitExtractError::WidthTooLarge { width: 64, max: 64 })
        );
        assert!(extract_i32(0, 31, &SAMPLE).is_ok());
        assert!(extract_i32(0, 32, &SAMPLE).is_err());
    }

    #[test]
    fn range_must_fit_buffer() {
        assert_eq!(
            extract_u64(30, 3, &SAMPLE),
            Err(BitExtractError::OutOfRange {
                pos: 33,
                bit_len: 32
            })
        );
        assert!(extract_u64(32, 1, &SAMPLE).is_err());
        assert!(extract_u64(30, 2, &SAMPLE).is_ok());
    }

    #[test]
    fn signed_results_are_never_negative() {
        let buf = [0xFFu8; 8];
        assert_eq!(extract_i8(0, 7, &buf).unwrap(), 0x7F);
        assert_eq!(extract_i64(0, 63, &buf).unwrap(), i64::MAX);
    }

    #[test]
    fn matches_per_bit_reads() {
        let buf = [0x3Cu8, 0xA5, 0x0F];
        let value = extract_u64(2, 13, &buf).unwrap();
        for i in 0..13 {
            assert_eq!((value >> i) & 1, u64::from(bit(2 + i, &buf).unwrap()));
        }
    }
}
