#[cfg(feature = "std")]
use thiserror::Error;

/// Errors produced by [crate::PackedArray] construction and element access.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackedArrayError {
    #[cfg_attr(
        feature = "std",
        error("element width must be in the range 1..=8, got {0}")
    )]
    InvalidElementBits(usize),

    #[cfg_attr(
        feature = "std",
        error("index {index} is out of bounds for length {len}")
    )]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for PackedArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PackedArrayError::InvalidElementBits(bits) => {
                write!(f, "element width must be in the range 1..=8, got {}", bits)
            }
            PackedArrayError::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of bounds for length {}", index, len)
            }
        }
    }
}
