//! Fixed-length array of sub-byte integer elements.

use crate::PackedArrayError;
use crate::bit_ops;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

const BYTE_BITS: usize = 8;

/// How an element whose bit span crosses a byte boundary is handled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PackingMode {
    /// An element's bits are confined to the single byte addressed by its bit
    /// offset. Bits that would spill into the next byte are dropped on write
    /// and absent on read, so boundary-crossing elements lose their tail.
    ///
    /// In this mode `set` takes its payload from the HIGH `element_bits` bits
    /// of the value, while `get` returns it in the low bits: for a span that
    /// stays within one byte, `get(i)` after `set(i, v)` yields
    /// `v >> (8 - element_bits)`.
    SingleByte,

    /// An element's bits are split across two adjacent bytes when needed.
    /// `set` masks the value to its low `element_bits` bits and `get` returns
    /// exactly that value, at every index.
    #[default]
    Spanning,
}

/// A fixed-length sequence of `element_bits`-wide unsigned values packed
/// into a byte buffer.
///
/// Width and length are fixed at construction; the buffer never grows or
/// shrinks afterwards. Elements are packed MSB-first: element `i` occupies
/// bits `[i * element_bits, (i + 1) * element_bits)` of the bitstream over
/// the buffer.
///
/// # Examples
///
/// ```
/// use packed_array::PackedArray;
///
/// // 1000 values of 0..8 in 376 bytes instead of 1000.
/// let mut arr = PackedArray::new(3, 1000).unwrap();
/// for i in 0..1000 {
///     arr.set(i, (i % 8) as u8).unwrap();
/// }
/// assert_eq!(arr.get(999).unwrap(), (999 % 8) as u8);
/// assert_eq!(arr.as_bytes().len(), 1000 * 3 / 8 + 1);
/// ```
#[derive(Debug)]
pub struct PackedArray {
    element_bits: usize,
    len: usize,
    set_mask: u8,
    get_mask: u8,
    mode: PackingMode,
    buf: Vec<u8>,
}

/// Validates the element width.
#[inline]
fn validate_bits(element_bits: usize) -> Result<(), PackedArrayError> {
    if (1..=BYTE_BITS).contains(&element_bits) {
        Ok(())
    } else {
        Err(PackedArrayError::InvalidElementBits(element_bits))
    }
}

impl PackedArray {
    /// Creates a zeroed array of `len` elements of `element_bits` bits each,
    /// in [PackingMode::Spanning].
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_array::{PackedArray, PackedArrayError};
    ///
    /// let arr = PackedArray::new(4, 5).unwrap();
    /// assert_eq!(arr.len(), 5);
    ///
    /// assert!(matches!(
    ///     PackedArray::new(9, 5),
    ///     Err(PackedArrayError::InvalidElementBits(9))
    /// ));
    /// ```
    pub fn new(element_bits: usize, len: usize) -> Result<Self, PackedArrayError> {
        Self::with_mode(element_bits, len, PackingMode::Spanning)
    }

    /// Creates a zeroed array with an explicit [PackingMode].
    ///
    /// The buffer is sized `len * element_bits / 8 + 1` bytes: the minimum
    /// rounded down, plus one byte of slack.
    pub fn with_mode(
        element_bits: usize,
        len: usize,
        mode: PackingMode,
    ) -> Result<Self, PackedArrayError> {
        validate_bits(element_bits)?;

        Ok(Self {
            element_bits,
            len,
            // Top `element_bits` bits set.
            set_mask: (256 - (1u16 << (BYTE_BITS - element_bits))) as u8,
            // Bottom `element_bits` bits set.
            get_mask: bit_ops::low_mask(element_bits),
            mode,
            buf: vec![0u8; len * element_bits / BYTE_BITS + 1],
        })
    }

    /// Overwrites the element at `index`.
    ///
    /// Only the element's own bit span is touched; other elements sharing a
    /// byte are preserved. Which bits of `value` form the payload depends on
    /// the [PackingMode].
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_array::{PackedArray, PackedArrayError};
    ///
    /// let mut arr = PackedArray::new(4, 5).unwrap();
    /// arr.set(2, 0b1010).unwrap();
    /// assert_eq!(arr.get(2).unwrap(), 0b1010);
    ///
    /// assert!(matches!(
    ///     arr.set(5, 1),
    ///     Err(PackedArrayError::IndexOutOfRange { index: 5, len: 5 })
    /// ));
    /// ```
    pub fn set(&mut self, index: usize, value: u8) -> Result<(), PackedArrayError> {
        self.check_index(index)?;
        let bit_offset = index * self.element_bits;

        match self.mode {
            PackingMode::SingleByte => {
                bit_ops::set_single_byte(&mut self.buf, bit_offset, self.set_mask, value)
            }
            PackingMode::Spanning => {
                bit_ops::set_spanning(&mut self.buf, bit_offset, self.element_bits, value)
            }
        }

        Ok(())
    }

    /// Reads the element at `index`, returned in the low `element_bits` bits.
    pub fn get(&self, index: usize) -> Result<u8, PackedArrayError> {
        self.check_index(index)?;
        let bit_offset = index * self.element_bits;

        let value = match self.mode {
            PackingMode::SingleByte => {
                bit_ops::get_single_byte(&self.buf, bit_offset, self.element_bits, self.get_mask)
            }
            PackingMode::Spanning => {
                bit_ops::get_spanning(&self.buf, bit_offset, self.element_bits)
            }
        };

        Ok(value)
    }

    /// Number of logical elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit width of each element.
    pub fn element_bits(&self) -> usize {
        self.element_bits
    }

    pub fn mode(&self) -> PackingMode {
        self.mode
    }

    /// Read-only view of the backing buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            array: self,
            index: 0,
        }
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), PackedArrayError> {
        if index < self.len {
            Ok(())
        } else {
            Err(PackedArrayError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }
}

pub struct Iter<'a> {
    array: &'a PackedArray,
    index: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.array.len() {
            None
        } else {
            let val = self.array.get(self.index).ok();
            self.index += 1;
            val
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a PackedArray {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
