//! Growable packed-bit container.

use crate::BitsetError;

const BITS_PER_BYTE: usize = 8;

/// Maximum number of bits a [`DynamicBitset`] can hold.
///
/// Derived from the maximum addressable length of the backing byte buffer:
/// a full bitset occupies `MAX_BITS / 8` bytes, and `MAX_BITS + 1` is still
/// representable so the size-limit check itself cannot overflow.
pub const MAX_BITS: usize = (usize::MAX / BITS_PER_BYTE) * BITS_PER_BYTE;

type Result<T> = core::result::Result<T, BitsetError>;

/// All-ones mask over the low `width` bits of a byte, `1 <= width <= 8`.
#[inline]
fn low_mask(width: usize) -> u8 {
    debug_assert!((1..=BITS_PER_BYTE).contains(&width));
    ((1u16 << width) - 1) as u8
}

/// A dynamically sized set of packed bits.
///
/// Eight logical bits occupy one byte of storage, LSB-first within each
/// byte. The byte buffer always holds exactly `len().div_ceil(8)` bytes;
/// shrinking operations release logical length but keep the allocated
/// capacity for later refills.
///
/// # Examples
///
/// ```
/// use dynamic_bitset::DynamicBitset;
///
/// let mut bs = DynamicBitset::from_bits(&[true, false, true]);
/// bs.push(true);
///
/// assert_eq!(bs.len(), 4);
/// assert_eq!(bs.to_u64().unwrap(), 0b1101);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DynamicBitset {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl DynamicBitset {
    /// Creates an empty bitset.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            bit_len: 0,
        }
    }

    /// Creates a bitset of `count` bits, all set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::SizeLimit`] if `count` exceeds [`MAX_BITS`].
    /// The check runs before any allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::DynamicBitset;
    ///
    /// let bs = DynamicBitset::with_len(10, true).unwrap();
    /// assert_eq!(bs.len(), 10);
    /// assert!(bs.all());
    /// ```
    pub fn with_len(count: usize, value: bool) -> Result<Self> {
        if count > MAX_BITS {
            return Err(BitsetError::SizeLimit {
                requested: count,
                max: MAX_BITS,
            });
        }
        let fill = if value { 0xFF } else { 0x00 };
        Ok(Self {
            bytes: vec![fill; count.div_ceil(BITS_PER_BYTE)],
            bit_len: count,
        })
    }

    /// Creates a bitset from an explicit list of bit values, in order.
    pub fn from_bits(bits: &[bool]) -> Self {
        let mut out = Self {
            bytes: vec![0; bits.len().div_ceil(BITS_PER_BYTE)],
            bit_len: bits.len(),
        };
        for (i, &b) in bits.iter().enumerate() {
            if b {
                out.bytes[i / BITS_PER_BYTE] |= 1 << (i % BITS_PER_BYTE);
            }
        }
        out
    }

    /// Returns the number of logical bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bit_len
    }

    /// Returns the storage length in bytes, always `len().div_ceil(8)`.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the bitset holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Returns the raw packed storage for interop.
    ///
    /// Bits past `len()` in the final byte are don't-care.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    fn in_range(&self, pos: usize) -> bool {
        pos < self.bit_len
    }

    #[inline]
    fn out_of_range(&self, pos: usize) -> BitsetError {
        BitsetError::OutOfRange {
            pos,
            len: self.bit_len,
        }
    }

    /// Reads a bit without bound checking against `len()`.
    #[inline]
    fn read_bit(&self, pos: usize) -> bool {
        (self.bytes[pos / BITS_PER_BYTE] >> (pos % BITS_PER_BYTE)) & 1 == 1
    }

    /// Clear-then-OR masked update; sibling bits in the byte are untouched.
    #[inline]
    fn write_bit(&mut self, pos: usize, value: bool) {
        let byte = pos / BITS_PER_BYTE;
        let mask = 1u8 << (pos % BITS_PER_BYTE);
        self.bytes[byte] = (self.bytes[byte] & !mask) | if value { mask } else { 0 };
    }

    /// Returns the bit at `pos` with bound checking.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] when `pos >= len()`.
    pub fn test(&self, pos: usize) -> Result<bool> {
        if !self.in_range(pos) {
            return Err(self.out_of_range(pos));
        }
        Ok(self.read_bit(pos))
    }

    /// Returns the bit at `pos`, or `None` when out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::DynamicBitset;
    ///
    /// let bs = DynamicBitset::from_bits(&[false, true]);
    /// assert_eq!(bs.get(1), Some(true));
    /// assert_eq!(bs.get(2), None);
    /// ```
    pub fn get(&self, pos: usize) -> Option<bool> {
        self.in_range(pos).then(|| self.read_bit(pos))
    }

    /// Sets the bit at `pos` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] when `pos >= len()`.
    pub fn set(&mut self, pos: usize, value: bool) -> Result<()> {
        if !self.in_range(pos) {
            return Err(self.out_of_range(pos));
        }
        self.write_bit(pos, value);
        Ok(())
    }

    /// Sets every bit to `value`.
    ///
    /// Whole bytes are written, so padding bits in the final byte take the
    /// value too; only the `len()` logical bits are observable.
    pub fn fill(&mut self, value: bool) {
        let fill = if value { 0xFF } else { 0x00 };
        self.bytes.fill(fill);
    }

    /// Complements the bit at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] when `pos >= len()`.
    pub fn flip(&mut self, pos: usize) -> Result<()> {
        if !self.in_range(pos) {
            return Err(self.out_of_range(pos));
        }
        self.bytes[pos / BITS_PER_BYTE] ^= 1 << (pos % BITS_PER_BYTE);
        Ok(())
    }

    /// Complements every bit.
    pub fn flip_all(&mut self) {
        for byte in &mut self.bytes {
            *byte = !*byte;
        }
    }

    /// Sets the bit at `pos` to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] when `pos >= len()`.
    pub fn reset(&mut self, pos: usize) -> Result<()> {
        self.set(pos, false)
    }

    /// Sets every bit to `false`.
    pub fn reset_all(&mut self) {
        self.fill(false);
    }

    /// Returns `true` iff every logical bit is set. Vacuously `true` when
    /// empty, following the all-of convention.
    ///
    /// Scans up to 8 bits at a time; the final partial byte is compared
    /// through an all-ones mask over the remaining bits so padding is never
    /// consulted.
    pub fn all(&self) -> bool {
        let mut remaining = self.bit_len;
        let mut offset = 0;

        while remaining > 0 {
            let take = remaining.min(BITS_PER_BYTE);
            let mask = low_mask(take);
            if self.bytes[offset / BITS_PER_BYTE] & mask != mask {
                return false;
            }
            offset += take;
            remaining -= take;
        }
        true
    }

    /// Returns `true` iff at least one logical bit is set. Vacuously `false`
    /// when empty, following the any-of convention.
    pub fn any(&self) -> bool {
        let mut remaining = self.bit_len;
        let mut offset = 0;

        while remaining > 0 {
            let take = remaining.min(BITS_PER_BYTE);
            if self.bytes[offset / BITS_PER_BYTE] & low_mask(take) != 0 {
                return true;
            }
            offset += take;
            remaining -= take;
        }
        false
    }

    /// Returns `true` iff no logical bit is set. Vacuously `true` when
    /// empty, following the none-of convention.
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Appends one bit, growing storage by a byte only when the current
    /// byte boundary is crossed.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::DynamicBitset;
    ///
    /// let mut bs = DynamicBitset::new();
    /// for _ in 0..8 {
    ///     bs.push(false);
    /// }
    /// assert_eq!(bs.byte_len(), 1);
    /// bs.push(true);
    /// assert_eq!(bs.byte_len(), 2);
    /// ```
    pub fn push(&mut self, value: bool) {
        if self.bytes.len() * BITS_PER_BYTE < self.bit_len + 1 {
            self.bytes.push(0);
        }
        self.bit_len += 1;
        self.write_bit(self.bit_len - 1, value);
    }

    /// Removes and returns the last bit, or `None` when empty.
    ///
    /// Allocated capacity is retained.
    pub fn pop(&mut self) -> Option<bool> {
        if self.bit_len == 0 {
            return None;
        }
        let bit = self.read_bit(self.bit_len - 1);
        self.bit_len -= 1;
        self.bytes.truncate(self.bit_len.div_ceil(BITS_PER_BYTE));
        Some(bit)
    }

    /// Grows storage and opens a gap of `gap` bits before `pos`.
    ///
    /// Existing bits are moved highest-index-first so the gap never
    /// overlaps a source bit that has yet to be read.
    fn shift_up(&mut self, pos: usize, gap: usize) -> Result<()> {
        if pos > self.bit_len {
            return Err(self.out_of_range(pos));
        }
        let new_len = self.bit_len.saturating_add(gap);
        if new_len > MAX_BITS {
            return Err(BitsetError::SizeLimit {
                requested: new_len,
                max: MAX_BITS,
            });
        }

        let old_len = self.bit_len;
        self.bytes.resize(new_len.div_ceil(BITS_PER_BYTE), 0);
        self.bit_len = new_len;

        for i in (pos..old_len).rev() {
            let b = self.read_bit(i);
            self.write_bit(i + gap, b);
        }
        Ok(())
    }

    /// Inserts one bit before `pos`; `pos == len()` appends.
    ///
    /// All bits at or after `pos` shift up by one.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] when `pos > len()`.
    pub fn insert(&mut self, pos: usize, value: bool) -> Result<()> {
        self.insert_repeat(pos, 1, value)
    }

    /// Inserts `count` copies of `value` before `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] when `pos > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::DynamicBitset;
    ///
    /// let mut bs = DynamicBitset::from_bits(&[true, true, false, false]);
    /// bs.insert_repeat(2, 3, true).unwrap();
    ///
    /// assert_eq!(bs.len(), 7);
    /// assert_eq!(bs.to_u64().unwrap(), 0b0011111);
    /// ```
    pub fn insert_repeat(&mut self, pos: usize, count: usize, value: bool) -> Result<()> {
        self.shift_up(pos, count)?;
        for i in pos..pos + count {
            self.write_bit(i, value);
        }
        Ok(())
    }

    /// Inserts a list of bit values before `pos`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] when `pos > len()`.
    pub fn insert_slice(&mut self, pos: usize, bits: &[bool]) -> Result<()> {
        self.shift_up(pos, bits.len())?;
        for (i, &b) in bits.iter().enumerate() {
            self.write_bit(pos + i, b);
        }
        Ok(())
    }

    /// Removes and returns the bit at `pos`; all following bits shift down
    /// by one.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] when `pos >= len()`.
    pub fn remove(&mut self, pos: usize) -> Result<bool> {
        if !self.in_range(pos) {
            return Err(self.out_of_range(pos));
        }
        let removed = self.read_bit(pos);
        for i in pos..self.bit_len - 1 {
            let b = self.read_bit(i + 1);
            self.write_bit(i, b);
        }
        self.bit_len -= 1;
        self.bytes.truncate(self.bit_len.div_ceil(BITS_PER_BYTE));
        Ok(removed)
    }

    /// Removes the inclusive range `[start, end]`; all bits after `end`
    /// shift down by the removed width.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] when either bound is past the
    /// last bit, and [`BitsetError::InvalidRange`] when `start > end`.
    pub fn remove_range(&mut self, start: usize, end: usize) -> Result<()> {
        if !self.in_range(start) {
            return Err(self.out_of_range(start));
        }
        if !self.in_range(end) {
            return Err(self.out_of_range(end));
        }
        if start > end {
            return Err(BitsetError::InvalidRange { start, end });
        }

        let removed = end - start + 1;
        for i in end + 1..self.bit_len {
            let b = self.read_bit(i);
            self.write_bit(i - removed, b);
        }
        self.bit_len -= removed;
        self.bytes.truncate(self.bit_len.div_ceil(BITS_PER_BYTE));
        Ok(())
    }

    /// Grows or truncates to exactly `len` bits; bits exposed by growth are
    /// set to `value`. No-op when `len == self.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::SizeLimit`] if `len` exceeds [`MAX_BITS`].
    pub fn resize(&mut self, len: usize, value: bool) -> Result<()> {
        if len > MAX_BITS {
            return Err(BitsetError::SizeLimit {
                requested: len,
                max: MAX_BITS,
            });
        }
        if len == self.bit_len {
            return Ok(());
        }
        if len < self.bit_len {
            self.bit_len = len;
            self.bytes.truncate(len.div_ceil(BITS_PER_BYTE));
            return Ok(());
        }

        let old_len = self.bit_len;
        self.bytes.resize(len.div_ceil(BITS_PER_BYTE), 0);
        self.bit_len = len;
        for i in old_len..len {
            self.write_bit(i, value);
        }
        Ok(())
    }

    /// Ensures storage for at least `bits` total bits without reallocation
    /// on subsequent growth. Does not change `len()`.
    pub fn reserve(&mut self, bits: usize) {
        let needed = bits.div_ceil(BITS_PER_BYTE);
        if needed > self.bytes.len() {
            self.bytes.reserve(needed - self.bytes.len());
        }
    }

    /// Drops every bit, keeping the allocated capacity for refills.
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.bit_len = 0;
    }

    /// Returns a new, fully independent bitset holding a copy of `len` bits
    /// starting at `begin`. No storage is shared with `self`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] when `begin` is not a valid bit
    /// position or `begin + len` exceeds `self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_bitset::DynamicBitset;
    ///
    /// let bs = DynamicBitset::from_bits(&[true, false, true, false, true, false]);
    /// let s = bs.slice(2, 4).unwrap();
    ///
    /// assert_eq!(s.len(), 4);
    /// assert_eq!(s.to_u64().unwrap(), 0b0101);
    /// ```
    pub fn slice(&self, begin: usize, len: usize) -> Result<DynamicBitset> {
        if !self.in_range(begin) {
            return Err(self.out_of_range(begin));
        }
        let end = begin.saturating_add(len);
        if end > self.bit_len {
            return Err(self.out_of_range(end));
        }

        let mut out = DynamicBitset {
            bytes: vec![0; len.div_ceil(BITS_PER_BYTE)],
            bit_len: len,
        };
        for i in 0..len {
            if self.read_bit(begin + i) {
                out.bytes[i / BITS_PER_BYTE] |= 1 << (i % BITS_PER_BYTE);
            }
        }
        Ok(out)
    }

    /// Packs the logical bits into a `u64`, bit 0 least significant.
    ///
    /// Padding bits in the final partial byte are masked out.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::Overflow`] when `len() > 64`.
    pub fn to_u64(&self) -> Result<u64> {
        if self.bit_len > u64::BITS as usize {
            return Err(BitsetError::Overflow {
                len: self.bit_len,
                width: u64::BITS,
            });
        }

        let mut raw = [0u8; 8];
        raw[..self.bytes.len()].copy_from_slice(&self.bytes);

        let tail = self.bit_len % BITS_PER_BYTE;
        if tail != 0 {
            raw[self.bytes.len() - 1] &= low_mask(tail);
        }
        Ok(u64::from_le_bytes(raw))
    }

    /// Returns an iterator over the logical bit values.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            bitset: self,
            index: 0,
        }
    }
}

/// Equality over logical bits only: equal iff same length and every
/// corresponding bit matches. Padding bits never participate, and bitsets
/// of different lengths are never equal regardless of storage content.
impl PartialEq for DynamicBitset {
    fn eq(&self, other: &Self) -> bool {
        if self.bit_len != other.bit_len {
            return false;
        }
        let full = self.bit_len / BITS_PER_BYTE;
        if self.bytes[..full] != other.bytes[..full] {
            return false;
        }
        let tail = self.bit_len % BITS_PER_BYTE;
        if tail != 0 {
            let mask = low_mask(tail);
            if self.bytes[full] & mask != other.bytes[full] & mask {
                return false;
            }
        }
        true
    }
}

impl Eq for DynamicBitset {}

/// Unchecked-style subscript access; panics when `pos >= len()`.
impl core::ops::Index<usize> for DynamicBitset {
    type Output = bool;

    fn index(&self, pos: usize) -> &bool {
        match self.get(pos) {
            Some(true) => &true,
            Some(false) => &false,
            None => panic!("bit position {pos} out of bounds for {} bits", self.len()),
        }
    }
}

pub struct Iter<'a> {
    bitset: &'a DynamicBitset,
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let bit = self.bitset.get(self.index)?;
        self.index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bitset.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a DynamicBitset {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<bool> for DynamicBitset {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut out = DynamicBitset::new();
        out.extend(iter);
        out
    }
}

impl Extend<bool> for DynamicBitset {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(self.bit_len + iter.size_hint().0);
        for bit in iter {
            self.push(bit);
        }
    }
}
