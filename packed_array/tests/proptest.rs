// tests/proptest.rs

#![cfg(test)]

use packed_array::{PackedArray, PackedArrayError, PackingMode};
use proptest::prelude::*;

//
// -----------------------------------------------------------------------------
// Helper Functions
// -----------------------------------------------------------------------------

/// Mask with the low `bits` bits set.
fn low_mask(bits: usize) -> u8 {
    ((1u16 << bits) - 1) as u8
}

/// True when the element's bit span stays within one buffer byte.
fn span_in_one_byte(index: usize, bits: usize) -> bool {
    (index * bits) % 8 + bits <= 8
}

//
// -----------------------------------------------------------------------------
// Buffer Sizing
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_buffer_size_formula(bits in 1usize..=8, len in 0usize..2000) {
        let arr = PackedArray::new(bits, len).unwrap();
        prop_assert_eq!(arr.as_bytes().len(), len * bits / 8 + 1);

        let arr = PackedArray::with_mode(bits, len, PackingMode::SingleByte).unwrap();
        prop_assert_eq!(arr.as_bytes().len(), len * bits / 8 + 1);
    }
}

proptest! {
    #[test]
    fn prop_invalid_widths_rejected(bits in prop::sample::select(vec![0usize, 9, 16, 64])) {
        prop_assert!(matches!(
            PackedArray::new(bits, 10),
            Err(PackedArrayError::InvalidElementBits(_))
        ));
    }
}

//
// -----------------------------------------------------------------------------
// Spanning Mode - Round-Trip
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_spanning_roundtrip(
        bits in 1usize..=8,
        values in prop::collection::vec(any::<u8>(), 0..500)
    ) {
        let mut arr = PackedArray::new(bits, values.len()).unwrap();

        for (i, &v) in values.iter().enumerate() {
            arr.set(i, v).unwrap();
        }

        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(arr.get(i).unwrap(), v & low_mask(bits));
        }
    }
}

proptest! {
    #[test]
    fn prop_spanning_set_leaves_neighbors(
        bits in 1usize..=8,
        values in prop::collection::vec(any::<u8>(), 1..200),
        update_idx in 0usize..200,
        new_val: u8
    ) {
        let mut arr = PackedArray::new(bits, values.len()).unwrap();

        for (i, &v) in values.iter().enumerate() {
            arr.set(i, v).unwrap();
        }

        let idx = update_idx % values.len();
        arr.set(idx, new_val).unwrap();
        prop_assert_eq!(arr.get(idx).unwrap(), new_val & low_mask(bits));

        for (i, &v) in values.iter().enumerate() {
            if i != idx {
                prop_assert_eq!(arr.get(i).unwrap(), v & low_mask(bits));
            }
        }
    }
}

//
// -----------------------------------------------------------------------------
// Single-Byte Mode - Observed Laws
// -----------------------------------------------------------------------------

proptest! {
    // For a span that fits in one byte, the stored payload is the HIGH
    // `bits` bits of the written value and reads back in the low bits.
    #[test]
    fn prop_single_byte_non_crossing_law(
        bits in 1usize..=8,
        len in 1usize..200,
        index in 0usize..200,
        value: u8
    ) {
        let index = index % len;
        prop_assume!(span_in_one_byte(index, bits));

        let mut arr = PackedArray::with_mode(bits, len, PackingMode::SingleByte).unwrap();
        arr.set(index, value).unwrap();
        prop_assert_eq!(arr.get(index).unwrap(), value >> (8 - bits));
    }
}

proptest! {
    // Widths that divide 8 never produce a crossing span, so the law holds
    // for a whole array of writes at once.
    #[test]
    fn prop_single_byte_aligned_widths_roundtrip(
        bits in prop::sample::select(vec![1usize, 2, 4, 8]),
        values in prop::collection::vec(any::<u8>(), 0..300)
    ) {
        let mut arr =
            PackedArray::with_mode(bits, values.len(), PackingMode::SingleByte).unwrap();

        for (i, &v) in values.iter().enumerate() {
            arr.set(i, v).unwrap();
        }

        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(arr.get(i).unwrap(), v >> (8 - bits));
        }
    }
}

proptest! {
    // A crossing span drops its spilled bits: reading back yields only the
    // bits that fit in the addressed byte, placed in the high positions of
    // the reconstructed value.
    #[test]
    fn prop_single_byte_crossing_drops_tail(
        bits in prop::sample::select(vec![3usize, 5, 6, 7]),
        len in 2usize..100,
        index in 0usize..100,
        value: u8
    ) {
        let index = index % len;
        prop_assume!(!span_in_one_byte(index, bits));

        let mut arr = PackedArray::with_mode(bits, len, PackingMode::SingleByte).unwrap();
        arr.set(index, value).unwrap();

        let kept = 8 - (index * bits) % 8;
        let expected = (value >> (8 - kept)) << (bits - kept);
        prop_assert_eq!(arr.get(index).unwrap(), expected);
    }
}

//
// -----------------------------------------------------------------------------
// Idempotence & Bounds
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_is_idempotent(
        bits in 1usize..=8,
        len in 1usize..200,
        index in 0usize..200,
        value: u8,
        single_byte: bool
    ) {
        let index = index % len;
        let mode = if single_byte {
            PackingMode::SingleByte
        } else {
            PackingMode::Spanning
        };

        let mut once = PackedArray::with_mode(bits, len, mode).unwrap();
        let mut twice = PackedArray::with_mode(bits, len, mode).unwrap();

        once.set(index, value).unwrap();
        twice.set(index, value).unwrap();
        twice.set(index, value).unwrap();

        prop_assert_eq!(once.as_bytes(), twice.as_bytes());
    }
}

proptest! {
    #[test]
    fn prop_out_of_range_rejected(
        bits in 1usize..=8,
        len in 0usize..100,
        past in 0usize..100
    ) {
        let mut arr = PackedArray::new(bits, len).unwrap();
        let index = len + past;

        prop_assert_eq!(
            arr.set(index, 0),
            Err(PackedArrayError::IndexOutOfRange { index, len })
        );
        prop_assert_eq!(
            arr.get(index),
            Err(PackedArrayError::IndexOutOfRange { index, len })
        );
    }
}

//
// -----------------------------------------------------------------------------
// Iterator
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_iterator_matches_get(
        bits in 1usize..=8,
        values in prop::collection::vec(any::<u8>(), 0..300)
    ) {
        let mut arr = PackedArray::new(bits, values.len()).unwrap();

        for (i, &v) in values.iter().enumerate() {
            arr.set(i, v).unwrap();
        }

        let collected: Vec<_> = arr.iter().collect();
        let expected: Vec<_> = values.iter().map(|&v| v & low_mask(bits)).collect();
        prop_assert_eq!(collected, expected);
    }
}
