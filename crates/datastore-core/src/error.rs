//! Errors reported by the checked construction and decoding paths.

use crate::layout::RefLayout;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryRefError {
    #[error("offset {offset} does not fit in {bits} offset bits (max {max})")]
    OffsetOutOfRange { offset: u64, bits: u32, max: u64 },

    #[error("buffer id {buffer_id} does not fit in {bits} buffer bits (max {max})")]
    BufferOutOfRange { buffer_id: u64, bits: u32, max: u32 },

    /// A packed word has bits set above the offset and buffer fields.
    #[error("raw value {raw:#x} has reserved bits set above bit {used_bits}")]
    ReservedBits { raw: u64, used_bits: u32 },

    /// `(0, 0)` packs to the zero word, which full-width layouts reserve.
    #[error("offset 0 in buffer 0 is the sentinel of full-width layout {layout}")]
    SentinelPair { layout: RefLayout },

    #[error("offset {offset} is not a multiple of alignment {alignment}")]
    Misaligned { offset: u64, alignment: u64 },

    #[error("truncated reference: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("layout mismatch: stored as {actual}, expected {expected}")]
    LayoutMismatch {
        expected: RefLayout,
        actual: RefLayout,
    },
}
