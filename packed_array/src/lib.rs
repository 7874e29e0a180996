//! # packed_array
//!
//! A `no_std` compatible fixed-length array of sub-byte integer elements.
//!
//! Elements of 1 to 8 bits are packed contiguously into a byte buffer instead
//! of each occupying a full byte.
//!
//! ```rust
//! use packed_array::PackedArray;
//!
//! // Store 4-bit values (0-15)
//! let mut arr = PackedArray::new(4, 5).expect("failed to create array");
//! arr.set(0, 0xA).unwrap();
//! arr.set(1, 0x3).unwrap();
//!
//! assert_eq!(arr.get(0).unwrap(), 0xA);
//! assert_eq!(arr.get(1).unwrap(), 0x3);
//! ```
//!
//! ## Packing modes
//!
//! The default [PackingMode::Spanning] splits an element's bits across two
//! adjacent bytes when its span crosses a byte boundary, so every value
//! round-trips. [PackingMode::SingleByte] instead confines each element to
//! the byte its offset addresses, dropping any bits that would spill over —
//! the historical behavior of MSB-aligned single-byte packing, kept
//! selectable for callers that depend on it bit-for-bit.
//!
//! ```rust
//! use packed_array::{PackedArray, PackingMode};
//!
//! // A 3-bit element at index 2 starts at bit 6 and crosses into byte 1.
//! let mut arr = PackedArray::with_mode(3, 8, PackingMode::Spanning).unwrap();
//! arr.set(2, 0b111).unwrap();
//! assert_eq!(arr.get(2).unwrap(), 0b111);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod array;
pub mod error;

mod bit_ops;

pub use array::{Iter, PackedArray, PackingMode};
pub use error::PackedArrayError;
