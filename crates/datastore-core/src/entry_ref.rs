//! Packed `(buffer id, offset)` references into a segmented arena.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EntryRefError;
use crate::layout::RefLayout;
use crate::word::RefWord;

/// Reference to an element stored in one buffer of a segmented arena.
///
/// Packs an `O`-bit offset and a `B`-bit buffer id into a single `W` word:
/// `raw = (buffer_id << O) | offset`. Bits above `O + B` are always zero,
/// except in [`EntryRef::INVALID`], which is also the `Default`.
///
/// The sentinel is the all-ones word when `O + B < W`. When the fields fill
/// the word it is the zero word instead, and `(0, 0)` cannot be encoded.
///
/// Equality and ordering follow the raw word: references sort by buffer,
/// then by offset. An all-ones sentinel sorts after every valid reference,
/// a zero sentinel before.
///
/// The layout is checked at compile time: `O + B <= W`, `O < 64` and
/// `B <= 32`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct EntryRef<const O: u32, const B: u32, W: RefWord> {
    raw: W,
}

impl<const O: u32, const B: u32, W: RefWord> EntryRef<O, B, W> {
    pub const LAYOUT: RefLayout = {
        let layout = RefLayout::new(O, B, W::WIDTH);
        assert!(
            layout.is_well_formed(),
            "entry reference layout needs O + B <= word width, O < 64 and B <= 32"
        );
        layout
    };

    pub const OFFSET_BITS: u32 = O;
    pub const BUFFER_BITS: u32 = B;
    pub const WORD_BITS: u32 = W::WIDTH;

    /// Offsets per buffer (`2^O`).
    pub const OFFSET_SIZE: u64 = Self::LAYOUT.offset_size();
    /// Buffers addressable by this layout (`2^B`).
    pub const NUM_BUFFERS: u64 = Self::LAYOUT.num_buffers();
    pub const MAX_OFFSET: u64 = Self::LAYOUT.max_offset();
    pub const MAX_BUFFER_ID: u32 = Self::LAYOUT.max_buffer_id();

    /// The "no reference" value.
    pub const INVALID: Self = {
        if Self::LAYOUT.is_full_width() {
            Self { raw: W::ZERO }
        } else {
            Self { raw: W::ALL_ONES }
        }
    };

    /// Encode `(offset, buffer_id)`.
    ///
    /// # Panics
    /// Panics if `offset >= 2^O` or `buffer_id >= 2^B`, or on `(0, 0)` for a
    /// full-width layout, in every build profile. Use
    /// [`try_new`](Self::try_new) for untrusted input.
    #[inline]
    #[track_caller]
    pub fn new(offset: u64, buffer_id: u32) -> Self {
        Self::LAYOUT.ensure_fields(offset, buffer_id);
        Self {
            raw: W::from_u64(Self::LAYOUT.pack_unchecked(offset, buffer_id)),
        }
    }

    /// Checked form of [`new`](Self::new).
    pub fn try_new(offset: u64, buffer_id: u32) -> Result<Self, EntryRefError> {
        let raw = Self::LAYOUT.pack(offset, buffer_id)?;
        Ok(Self {
            raw: W::from_u64(raw),
        })
    }

    /// Wrap an already packed word, e.g. one read back from storage.
    ///
    /// Debug builds assert that no reserved bits are set.
    #[inline]
    pub fn from_raw(raw: W) -> Self {
        debug_assert!(
            Self::LAYOUT.is_legal_raw(raw.to_u64()),
            "raw value {raw:#x} has reserved bits set for layout {}",
            Self::LAYOUT
        );
        Self { raw }
    }

    /// Wrap a packed word, rejecting words with reserved bits set.
    pub fn try_from_raw(raw: W) -> Result<Self, EntryRefError> {
        Self::LAYOUT.check_raw(raw.to_u64())?;
        Ok(Self { raw })
    }

    /// Offset within the buffer.
    ///
    /// Meaningless on the sentinel; check [`is_valid`](Self::is_valid) first.
    #[inline]
    pub fn offset(self) -> u64 {
        Self::LAYOUT.offset_of(self.raw.to_u64())
    }

    #[inline]
    pub fn buffer_id(self) -> u32 {
        Self::LAYOUT.buffer_id_of(self.raw.to_u64())
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.raw != Self::INVALID.raw
    }

    /// The packed word.
    #[inline]
    pub fn raw(self) -> W {
        self.raw
    }

    /// Lowest reference in `buffer_id`.
    ///
    /// On a full-width layout buffer 0 starts at offset 1.
    ///
    /// # Panics
    /// Panics if `buffer_id >= 2^B`.
    #[track_caller]
    pub fn first_in_buffer(buffer_id: u32) -> Self {
        if Self::LAYOUT.is_full_width() && buffer_id == 0 {
            Self::new(1, 0)
        } else {
            Self::new(0, buffer_id)
        }
    }

    /// Highest reference in `buffer_id`.
    ///
    /// # Panics
    /// Panics if `buffer_id >= 2^B`.
    #[track_caller]
    pub fn last_in_buffer(buffer_id: u32) -> Self {
        Self::new(Self::MAX_OFFSET, buffer_id)
    }

    /// Every reference into `buffer_id`, as a range usable with
    /// `BTreeMap::range`.
    ///
    /// # Panics
    /// Panics if `buffer_id >= 2^B`.
    #[track_caller]
    pub fn buffer_range(buffer_id: u32) -> RangeInclusive<Self> {
        Self::first_in_buffer(buffer_id)..=Self::last_in_buffer(buffer_id)
    }

    /// References into `buffer_id` with offsets up to and including `max_offset`.
    ///
    /// # Panics
    /// Panics if `buffer_id >= 2^B` or `max_offset >= 2^O`, or if
    /// `max_offset` is 0 in buffer 0 of a full-width layout.
    #[track_caller]
    pub fn buffer_range_to(buffer_id: u32, max_offset: u64) -> RangeInclusive<Self> {
        Self::first_in_buffer(buffer_id)..=Self::new(max_offset, buffer_id)
    }

    /// Fixed-width little-endian encoding (`W / 8` bytes).
    pub fn to_le_bytes(self) -> W::Bytes {
        self.raw.encode_le()
    }

    /// Decode from the first `W / 8` bytes of `bytes`.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, EntryRefError> {
        let raw = W::decode_le(bytes).ok_or(EntryRefError::Truncated {
            expected: W::BYTE_WIDTH,
            actual: bytes.len(),
        })?;
        Self::try_from_raw(raw)
    }
}

impl<const O: u32, const B: u32, W: RefWord> Default for EntryRef<O, B, W> {
    fn default() -> Self {
        Self::INVALID
    }
}

impl<const O: u32, const B: u32, W: RefWord> fmt::Debug for EntryRef<O, B, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryRef<{}>({self})", Self::LAYOUT)
    }
}

impl<const O: u32, const B: u32, W: RefWord> fmt::Display for EntryRef<O, B, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}:{}", self.buffer_id(), self.offset())
        } else {
            f.write_str("invalid")
        }
    }
}

impl<const O: u32, const B: u32, W: RefWord> Serialize for EntryRef<O, B, W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, const O: u32, const B: u32, W: RefWord> Deserialize<'de> for EntryRef<O, B, W> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = W::deserialize(deserializer)?;
        Self::try_from_raw(raw).map_err(serde::de::Error::custom)
    }
}
