//! Runtime description of a reference bit layout.
//!
//! Word layout, from the low end:
//! - bits `0..O`: offset (in alignment units)
//! - bits `O..O+B`: buffer id
//! - bits `O+B..W`: reserved, zero in every valid reference
//!
//! The invalid sentinel depends on whether the fields fill the word:
//! - spare bits left: the all-ones word, which sorts after every reference
//! - full width (`O + B == W`): the zero word, so `(0, 0)` is not encodable
//!
//! Stores that persist references record their `RefLayout` next to the data;
//! changing any of its fields is a binary-incompatible change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EntryRefError;

/// Bit layout of a packed entry reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LayoutSchema")]
pub struct RefLayout {
    /// Low-order bits holding the offset.
    pub offset_bits: u32,
    /// Bits holding the buffer id, directly above the offset.
    pub buffer_bits: u32,
    /// Width of the backing word (32 or 64).
    pub word_bits: u32,
    /// Offsets are stored divided by `2^align_bits`.
    pub align_bits: u32,
}

/// Stored form of [`RefLayout`], validated on the way in.
#[derive(Deserialize)]
struct LayoutSchema {
    offset_bits: u32,
    buffer_bits: u32,
    word_bits: u32,
    #[serde(default)]
    align_bits: u32,
}

impl TryFrom<LayoutSchema> for RefLayout {
    type Error = EntryRefError;

    fn try_from(schema: LayoutSchema) -> Result<Self, Self::Error> {
        let layout = RefLayout::new(schema.offset_bits, schema.buffer_bits, schema.word_bits)
            .with_align(schema.align_bits);
        layout.check()?;
        Ok(layout)
    }
}

impl RefLayout {
    pub const fn new(offset_bits: u32, buffer_bits: u32, word_bits: u32) -> Self {
        Self {
            offset_bits,
            buffer_bits,
            word_bits,
            align_bits: 0,
        }
    }

    pub const fn with_align(self, align_bits: u32) -> Self {
        Self { align_bits, ..self }
    }

    /// Bits occupied by the offset and buffer fields together.
    pub const fn used_bits(&self) -> u32 {
        self.offset_bits.saturating_add(self.buffer_bits)
    }

    /// Number of distinct offsets per buffer (`2^offset_bits`).
    pub const fn offset_size(&self) -> u64 {
        1u64 << self.offset_bits
    }

    /// Number of addressable buffers (`2^buffer_bits`).
    pub const fn num_buffers(&self) -> u64 {
        1u64 << self.buffer_bits
    }

    /// Largest addressable offset, scaled by the alignment.
    pub const fn max_offset(&self) -> u64 {
        self.offset_mask() << self.align_bits
    }

    const fn offset_mask(&self) -> u64 {
        self.offset_size() - 1
    }

    pub const fn max_buffer_id(&self) -> u32 {
        (self.num_buffers() - 1) as u32
    }

    /// Alignment multiplier applied to stored offsets.
    pub const fn alignment(&self) -> u64 {
        1u64 << self.align_bits
    }

    /// Whether the offset and buffer fields fill the whole word.
    pub const fn is_full_width(&self) -> bool {
        self.used_bits() == self.word_bits
    }

    /// The reserved "no reference" word.
    pub const fn sentinel(&self) -> u64 {
        if self.is_full_width() {
            0
        } else if self.word_bits >= 64 {
            u64::MAX
        } else {
            (1u64 << self.word_bits) - 1
        }
    }

    pub const fn byte_width(&self) -> usize {
        self.word_bits as usize / 8
    }

    /// Whether every invariant of the layout holds.
    ///
    /// `const` so typed references can assert it at compile time.
    pub const fn is_well_formed(&self) -> bool {
        (self.word_bits == 32 || self.word_bits == 64)
            && self.buffer_bits <= 32
            && self.offset_bits < 64
            && self.used_bits() <= self.word_bits
            && self.align_bits < 64
            && self.offset_bits.saturating_add(self.align_bits) <= 64
    }

    /// Validate a layout built at runtime.
    pub fn check(&self) -> Result<(), EntryRefError> {
        let reason = if self.word_bits != 32 && self.word_bits != 64 {
            format!("word must be 32 or 64 bits, got {}", self.word_bits)
        } else if self.buffer_bits > 32 {
            format!("at most 32 buffer bits, got {}", self.buffer_bits)
        } else if self.offset_bits >= 64 {
            format!("at most 63 offset bits, got {}", self.offset_bits)
        } else if self.used_bits() > self.word_bits {
            format!(
                "{} offset + {} buffer bits exceed a {}-bit word",
                self.offset_bits, self.buffer_bits, self.word_bits
            )
        } else if self.align_bits >= 64 || self.offset_bits.saturating_add(self.align_bits) > 64 {
            format!(
                "{} offset bits aligned to 2^{} overflow 64-bit byte offsets",
                self.offset_bits, self.align_bits
            )
        } else {
            return Ok(());
        };
        Err(EntryRefError::InvalidLayout(reason))
    }

    /// Pack a pair that is already known to be in range and aligned.
    #[inline]
    pub(crate) const fn pack_unchecked(&self, offset: u64, buffer_id: u32) -> u64 {
        ((buffer_id as u64) << self.offset_bits) | (offset >> self.align_bits)
    }

    /// Pack `(offset, buffer_id)` into a raw word, rejecting out-of-range or
    /// misaligned fields.
    ///
    /// `offset` is the logical offset; it is divided by the alignment before
    /// being stored.
    pub fn pack(&self, offset: u64, buffer_id: u32) -> Result<u64, EntryRefError> {
        self.check_fields(offset, buffer_id)?;
        Ok(self.pack_unchecked(offset, buffer_id))
    }

    pub(crate) fn check_fields(&self, offset: u64, buffer_id: u32) -> Result<(), EntryRefError> {
        if offset & (self.alignment() - 1) != 0 {
            return Err(EntryRefError::Misaligned {
                offset,
                alignment: self.alignment(),
            });
        }
        if offset > self.max_offset() {
            return Err(EntryRefError::OffsetOutOfRange {
                offset,
                bits: self.offset_bits,
                max: self.max_offset(),
            });
        }
        if buffer_id as u64 >= self.num_buffers() {
            return Err(EntryRefError::BufferOutOfRange {
                buffer_id: buffer_id as u64,
                bits: self.buffer_bits,
                max: self.max_buffer_id(),
            });
        }
        if self.is_full_width() && offset == 0 && buffer_id == 0 {
            return Err(EntryRefError::SentinelPair { layout: *self });
        }
        Ok(())
    }

    /// Logical offset of a raw word (stored field times the alignment).
    #[inline]
    pub const fn offset_of(&self, raw: u64) -> u64 {
        self.unit_offset_of(raw) << self.align_bits
    }

    /// Offset field of a raw word as stored, in alignment units.
    #[inline]
    pub const fn unit_offset_of(&self, raw: u64) -> u64 {
        raw & self.offset_mask()
    }

    /// Buffer field of a raw word.
    #[inline]
    pub const fn buffer_id_of(&self, raw: u64) -> u32 {
        ((raw >> self.offset_bits) & (self.num_buffers() - 1)) as u32
    }

    #[inline]
    pub const fn is_sentinel(&self, raw: u64) -> bool {
        raw == self.sentinel()
    }

    /// Whether `raw` is the sentinel or has no bits set above the buffer field.
    #[inline]
    pub const fn is_legal_raw(&self, raw: u64) -> bool {
        self.is_sentinel(raw) || self.used_bits() >= 64 || raw >> self.used_bits() == 0
    }

    /// Reject raw words with reserved bits set (the sentinel is accepted).
    pub fn check_raw(&self, raw: u64) -> Result<(), EntryRefError> {
        if self.is_legal_raw(raw) {
            Ok(())
        } else {
            Err(EntryRefError::ReservedBits {
                raw,
                used_bits: self.used_bits(),
            })
        }
    }

    /// Compare against a layout read back from storage.
    pub fn ensure_compatible(&self, stored: &RefLayout) -> Result<(), EntryRefError> {
        if self == stored {
            Ok(())
        } else {
            Err(EntryRefError::LayoutMismatch {
                expected: *self,
                actual: *stored,
            })
        }
    }
}

impl fmt::Display for RefLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.offset_bits, self.buffer_bits, self.word_bits
        )?;
        if self.align_bits > 0 {
            write!(f, "@{}", self.align_bits)?;
        }
        Ok(())
    }
}

impl FromStr for RefLayout {
    type Err = EntryRefError;

    /// Parse `O/B`, `O/B/W`, optionally followed by `@A`.
    ///
    /// Without `W` the narrowest word that holds both fields is chosen.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || {
            EntryRefError::InvalidLayout(format!(
                "expected `OFFSET/BUFFER[/WORD][@ALIGN]`, got `{s}`"
            ))
        };
        let number = |part: &str| part.trim().parse::<u32>().map_err(|_| malformed());

        let (fields, align_bits) = match s.split_once('@') {
            Some((fields, align)) => (fields, number(align)?),
            None => (s, 0),
        };

        let parts: Vec<&str> = fields.split('/').collect();
        let layout = match parts.as_slice() {
            [o, b] => {
                let (o, b) = (number(o)?, number(b)?);
                let word_bits = if o.saturating_add(b) <= 32 { 32 } else { 64 };
                RefLayout::new(o, b, word_bits)
            }
            [o, b, w] => RefLayout::new(number(o)?, number(b)?, number(w)?),
            _ => return Err(malformed()),
        }
        .with_align(align_bits);

        layout.check()?;
        Ok(layout)
    }
}
