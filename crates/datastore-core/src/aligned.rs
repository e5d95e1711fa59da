//! References whose offsets are stored in alignment units.
//!
//! Storing `offset / 2^A` instead of the byte offset stretches the address
//! range of an `O`-bit field by a factor of `2^A`, at the cost of every
//! element starting on a `2^A` boundary.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entry_ref::EntryRef;
use crate::error::EntryRefError;
use crate::layout::RefLayout;
use crate::word::RefWord;

/// An [`EntryRef`] with a `2^A` alignment multiplier on the offset.
///
/// The raw word, equality, ordering and validity are those of the
/// underlying `EntryRef<O, B, W>`; only the offset is scaled.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct AlignedEntryRef<const O: u32, const B: u32, const A: u32, W: RefWord> {
    inner: EntryRef<O, B, W>,
}

impl<const O: u32, const B: u32, const A: u32, W: RefWord> AlignedEntryRef<O, B, A, W> {
    pub const LAYOUT: RefLayout = {
        let layout = EntryRef::<O, B, W>::LAYOUT.with_align(A);
        assert!(
            layout.is_well_formed(),
            "aligned offsets must fit in 64 bits (O + A <= 64)"
        );
        layout
    };

    /// Byte multiplier applied to the stored offset.
    pub const ALIGNMENT: u64 = Self::LAYOUT.alignment();
    /// Largest addressable byte offset.
    pub const MAX_OFFSET: u64 = Self::LAYOUT.max_offset();

    pub const INVALID: Self = {
        let _layout = Self::LAYOUT;
        Self {
            inner: EntryRef::INVALID,
        }
    };

    /// Encode a byte offset and buffer id.
    ///
    /// # Panics
    /// Panics if `byte_offset` is not a multiple of `2^A`, does not fit the
    /// offset field once scaled, or `buffer_id >= 2^B`, or on `(0, 0)` for a
    /// full-width layout.
    #[track_caller]
    pub fn new(byte_offset: u64, buffer_id: u32) -> Self {
        Self::LAYOUT.ensure_fields(byte_offset, buffer_id);
        let raw = Self::LAYOUT.pack_unchecked(byte_offset, buffer_id);
        Self {
            inner: EntryRef::from_raw(W::from_u64(raw)),
        }
    }

    pub fn try_new(byte_offset: u64, buffer_id: u32) -> Result<Self, EntryRefError> {
        let raw = Self::LAYOUT.pack(byte_offset, buffer_id)?;
        Ok(Self {
            inner: EntryRef::from_raw(W::from_u64(raw)),
        })
    }

    #[inline]
    pub fn from_raw(raw: W) -> Self {
        Self {
            inner: EntryRef::from_raw(raw),
        }
    }

    pub fn try_from_raw(raw: W) -> Result<Self, EntryRefError> {
        EntryRef::try_from_raw(raw).map(Self::from_entry_ref)
    }

    #[inline]
    pub fn from_entry_ref(inner: EntryRef<O, B, W>) -> Self {
        Self { inner }
    }

    #[inline]
    pub fn entry_ref(self) -> EntryRef<O, B, W> {
        self.inner
    }

    /// Byte offset within the buffer.
    #[inline]
    pub fn offset(self) -> u64 {
        Self::LAYOUT.offset_of(self.inner.raw().to_u64())
    }

    /// Offset as stored, in alignment units.
    #[inline]
    pub fn unit_offset(self) -> u64 {
        self.inner.offset()
    }

    #[inline]
    pub fn buffer_id(self) -> u32 {
        self.inner.buffer_id()
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.inner.is_valid()
    }

    #[inline]
    pub fn raw(self) -> W {
        self.inner.raw()
    }

    /// Padding needed to bring `value` up to the next multiple of `2^A`.
    #[inline]
    pub const fn pad(value: u64) -> u64 {
        value.wrapping_neg() & (Self::ALIGNMENT - 1)
    }

    /// Round `value` up to the next multiple of `2^A`, or `None` if that
    /// exceeds `u64::MAX`.
    #[inline]
    pub const fn align(value: u64) -> Option<u64> {
        value.checked_add(Self::pad(value))
    }

    pub fn to_le_bytes(self) -> W::Bytes {
        self.inner.to_le_bytes()
    }

    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, EntryRefError> {
        EntryRef::from_le_bytes(bytes).map(Self::from_entry_ref)
    }
}

impl<const O: u32, const B: u32, const A: u32, W: RefWord> Default for AlignedEntryRef<O, B, A, W> {
    fn default() -> Self {
        Self::INVALID
    }
}

impl<const O: u32, const B: u32, const A: u32, W: RefWord> From<AlignedEntryRef<O, B, A, W>>
    for EntryRef<O, B, W>
{
    fn from(aligned: AlignedEntryRef<O, B, A, W>) -> Self {
        aligned.inner
    }
}

impl<const O: u32, const B: u32, const A: u32, W: RefWord> fmt::Debug
    for AlignedEntryRef<O, B, A, W>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AlignedEntryRef<{}>({self})", Self::LAYOUT)
    }
}

impl<const O: u32, const B: u32, const A: u32, W: RefWord> fmt::Display
    for AlignedEntryRef<O, B, A, W>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}:{}", self.buffer_id(), self.offset())
        } else {
            f.write_str("invalid")
        }
    }
}

impl<const O: u32, const B: u32, const A: u32, W: RefWord> Serialize
    for AlignedEntryRef<O, B, A, W>
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

impl<'de, const O: u32, const B: u32, const A: u32, W: RefWord> Deserialize<'de>
    for AlignedEntryRef<O, B, A, W>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        EntryRef::deserialize(deserializer).map(Self::from_entry_ref)
    }
}
