//! Machine words that back a packed entry reference.
//!
//! All field arithmetic is done in `u64`. The word type only fixes the
//! in-memory and serialized width of a reference.

use std::fmt;
use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Unsigned word holding a packed reference. Implemented for `u32` and `u64`.
pub trait RefWord:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + Send
    + Sync
    + Serialize
    + DeserializeOwned
    + 'static
{
    /// Width in bits.
    const WIDTH: u32;
    /// Width in bytes of the fixed-size encoding.
    const BYTE_WIDTH: usize;
    const ZERO: Self;
    /// The all-ones word.
    const ALL_ONES: Self;

    /// Little-endian byte array of `BYTE_WIDTH` bytes.
    type Bytes: AsRef<[u8]> + Copy + fmt::Debug + Eq;

    fn to_u64(self) -> u64;

    /// Narrow from `u64`. The caller guarantees `value` fits in `WIDTH` bits.
    fn from_u64(value: u64) -> Self;

    fn encode_le(self) -> Self::Bytes;

    /// Decode the first `BYTE_WIDTH` bytes; `None` if the slice is shorter.
    fn decode_le(bytes: &[u8]) -> Option<Self>;
}

impl RefWord for u32 {
    const WIDTH: u32 = 32;
    const BYTE_WIDTH: usize = 4;
    const ZERO: Self = 0;
    const ALL_ONES: Self = u32::MAX;

    type Bytes = [u8; 4];

    #[inline]
    fn to_u64(self) -> u64 {
        self as u64
    }

    #[inline]
    fn from_u64(value: u64) -> Self {
        debug_assert!(value <= u32::MAX as u64, "{value:#x} does not fit in u32");
        value as u32
    }

    #[inline]
    fn encode_le(self) -> [u8; 4] {
        u32::to_le_bytes(self)
    }

    fn decode_le(bytes: &[u8]) -> Option<Self> {
        let arr: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
        Some(u32::from_le_bytes(arr))
    }
}

impl RefWord for u64 {
    const WIDTH: u32 = 64;
    const BYTE_WIDTH: usize = 8;
    const ZERO: Self = 0;
    const ALL_ONES: Self = u64::MAX;

    type Bytes = [u8; 8];

    #[inline]
    fn to_u64(self) -> u64 {
        self
    }

    #[inline]
    fn from_u64(value: u64) -> Self {
        value
    }

    #[inline]
    fn encode_le(self) -> [u8; 8] {
        u64::to_le_bytes(self)
    }

    fn decode_le(bytes: &[u8]) -> Option<Self> {
        let arr: [u8; 8] = bytes.get(..8)?.try_into().ok()?;
        Some(u64::from_le_bytes(arr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(<u32 as RefWord>::WIDTH, 32);
        assert_eq!(<u64 as RefWord>::WIDTH, 64);
        assert_eq!(<u32 as RefWord>::BYTE_WIDTH, 4);
        assert_eq!(<u64 as RefWord>::BYTE_WIDTH, 8);
    }

    #[test]
    fn le_roundtrip() {
        let w: u32 = 0x0102_0304;
        assert_eq!(w.encode_le(), [4, 3, 2, 1]);
        assert_eq!(<u32 as RefWord>::decode_le(&[4, 3, 2, 1, 0xff]), Some(w));

        let w: u64 = 0x0102_0304_0506_0708;
        assert_eq!(<u64 as RefWord>::decode_le(&w.encode_le()), Some(w));
    }

    #[test]
    fn decode_short_slice() {
        assert_eq!(<u32 as RefWord>::decode_le(&[1, 2, 3]), None);
        assert_eq!(<u64 as RefWord>::decode_le(&[1, 2, 3, 4]), None);
    }
}
