#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Compact entry references for segmented arenas.
//!
//! An entry reference packs a buffer id and an offset within that buffer
//! into one unsigned word, with the bit split fixed at compile time:
//! - [`EntryRef`]: `EntryRef<OFFSET_BITS, BUFFER_BITS, Word>`
//! - [`AlignedEntryRef`]: same, with offsets stored in `2^A` units
//! - [`RefLayout`]: runtime view of a layout, for schemas and tooling
//! - [`family`]: the standard splits (`24x8`, `10x10`, ...)
//!
//! The arena that owns the buffers is not part of this crate.

pub mod aligned;
pub mod colors;
pub mod dump;
pub mod entry_ref;
pub mod error;
pub mod family;
pub mod layout;
pub mod word;

mod invariants;

#[cfg(test)]
mod aligned_tests;
#[cfg(test)]
mod dump_tests;

pub use aligned::AlignedEntryRef;
pub use colors::Colors;
pub use dump::{dump, dump_refs};
pub use entry_ref::EntryRef;
pub use error::EntryRefError;
pub use family::{
    EntryRef3x2, EntryRef10x10, EntryRef10x22, EntryRef15x17, EntryRef18x6, EntryRef19x13,
    EntryRef22x10, EntryRef24x8, EntryRef31x1, FAMILY,
};
pub use layout::RefLayout;
pub use word::RefWord;
