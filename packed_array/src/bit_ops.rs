//! Low-level bit manipulation over a byte buffer.
//!
//! Bits are addressed MSB-first: stream bit 0 is the high bit of `buf[0]`.
//! All shift amounts stay in `[0, 8)`.

/// Mask with the low `n` bits set, for `n` in `0..=8`.
#[inline]
pub(crate) fn low_mask(n: usize) -> u8 {
    debug_assert!(n <= 8);
    ((1u16 << n) - 1) as u8
}

/// Overwrites a masked span of the byte containing `bit_offset` with the
/// high bits of `value`.
///
/// `set_mask` has the top `element_bits` bits set; shifting it right by the
/// in-byte offset yields the active span. Bits of the element that would
/// spill into the next byte fall outside the shifted mask and are dropped,
/// never split.
pub(crate) fn set_single_byte(buf: &mut [u8], bit_offset: usize, set_mask: u8, value: u8) {
    let shift = (bit_offset % 8) as u32;
    let byte = bit_offset / 8;

    let mask = set_mask >> shift;
    buf[byte] = (buf[byte] & !mask) | ((value >> shift) & mask);
}

/// Reads back a span written by [set_single_byte], returned in the low bits.
///
/// Rotates the byte left so the span lands at the bottom, then isolates it
/// with `get_mask` (low `element_bits` bits set). The rotation amount is
/// reduced mod 8, so a span that spilled past the byte reads back without
/// its dropped bits.
pub(crate) fn get_single_byte(buf: &[u8], bit_offset: usize, element_bits: usize, get_mask: u8) -> u8 {
    let rot = ((bit_offset % 8 + element_bits) % 8) as u32;
    let byte = bit_offset / 8;

    buf[byte].rotate_left(rot) & get_mask
}

/// Writes the low `element_bits` bits of `value` MSB-first at `bit_offset`,
/// splitting across two adjacent bytes when the span crosses a boundary.
pub(crate) fn set_spanning(buf: &mut [u8], bit_offset: usize, element_bits: usize, value: u8) {
    let value = value & low_mask(element_bits);
    let byte = bit_offset / 8;
    let bit = bit_offset % 8;

    // Bits that fit in the first byte, then the remainder in the next.
    let head = (8 - bit).min(element_bits);
    let tail = element_bits - head;

    let head_shift = 8 - bit - head;
    let head_mask = low_mask(head) << head_shift;
    buf[byte] = (buf[byte] & !head_mask) | (((value >> tail) << head_shift) & head_mask);

    if tail > 0 {
        let tail_mask = low_mask(tail) << (8 - tail);
        buf[byte + 1] =
            (buf[byte + 1] & !tail_mask) | (((value & low_mask(tail)) << (8 - tail)) & tail_mask);
    }
}

/// Reads `element_bits` bits MSB-first at `bit_offset`, rejoining a span
/// split across two bytes. Returns the value in the low bits.
pub(crate) fn get_spanning(buf: &[u8], bit_offset: usize, element_bits: usize) -> u8 {
    let byte = bit_offset / 8;
    let bit = bit_offset % 8;

    let head = (8 - bit).min(element_bits);
    let tail = element_bits - head;

    let head_val = (buf[byte] >> (8 - bit - head)) & low_mask(head);
    if tail == 0 {
        head_val
    } else {
        (head_val << tail) | (buf[byte + 1] >> (8 - tail))
    }
}
