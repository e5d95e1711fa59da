//! The standard set of reference layouts.
//!
//! Each consumer picks the split matching its expected buffer count and
//! buffer size. Every split fits a `u32`. Splits that use all 32 bits take
//! the zero word as their sentinel, the others the all-ones word. None of
//! these carry an alignment multiplier; wrap them in
//! [`AlignedEntryRef`](crate::AlignedEntryRef) when one is needed.

use crate::entry_ref::EntryRef;
use crate::layout::RefLayout;

/// 16M offsets, 256 buffers.
pub type EntryRef24x8 = EntryRef<24, 8, u32>;
/// 2G offsets, 2 buffers.
pub type EntryRef31x1 = EntryRef<31, 1, u32>;
/// 4M offsets, 1024 buffers.
pub type EntryRef22x10 = EntryRef<22, 10, u32>;
/// 512K offsets, 8192 buffers.
pub type EntryRef19x13 = EntryRef<19, 13, u32>;
/// 256K offsets, 64 buffers.
pub type EntryRef18x6 = EntryRef<18, 6, u32>;
/// 32K offsets, 128K buffers.
pub type EntryRef15x17 = EntryRef<15, 17, u32>;
/// 1024 offsets, 4M buffers.
pub type EntryRef10x22 = EntryRef<10, 22, u32>;
/// 1024 offsets, 1024 buffers.
pub type EntryRef10x10 = EntryRef<10, 10, u32>;
/// 8 offsets, 4 buffers.
pub type EntryRef3x2 = EntryRef<3, 2, u32>;

/// Named layouts of the aliases above, in declaration order.
pub const FAMILY: &[(&str, RefLayout)] = &[
    ("24x8", EntryRef24x8::LAYOUT),
    ("31x1", EntryRef31x1::LAYOUT),
    ("22x10", EntryRef22x10::LAYOUT),
    ("19x13", EntryRef19x13::LAYOUT),
    ("18x6", EntryRef18x6::LAYOUT),
    ("15x17", EntryRef15x17::LAYOUT),
    ("10x22", EntryRef10x22::LAYOUT),
    ("10x10", EntryRef10x10::LAYOUT),
    ("3x2", EntryRef3x2::LAYOUT),
];

/// Look up a family layout by its `OxB` name.
pub fn by_name(name: &str) -> Option<RefLayout> {
    FAMILY
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, layout)| *layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_layouts_are_well_formed() {
        for (name, layout) in FAMILY {
            assert!(layout.check().is_ok(), "{name}: {layout}");
            assert_eq!(layout.align_bits, 0);
        }
    }

    #[test]
    fn names_match_splits() {
        for (name, layout) in FAMILY {
            let expected = format!("{}x{}", layout.offset_bits, layout.buffer_bits);
            assert_eq!(*name, expected);
        }
    }

    #[test]
    fn every_split_fits_32_bits() {
        for (name, layout) in FAMILY {
            assert_eq!(layout.word_bits, 32, "{name}");
        }
    }

    #[test]
    fn sentinel_per_split() {
        for (name, layout) in FAMILY {
            let expected = if layout.used_bits() == 32 { 0 } else { u32::MAX as u64 };
            assert_eq!(layout.sentinel(), expected, "{name}");
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(by_name("10x10"), Some(RefLayout::new(10, 10, 32)));
        assert_eq!(by_name("24x8"), Some(RefLayout::new(24, 8, 32)));
        assert_eq!(by_name("8x24"), None);
    }

    #[test]
    fn alias_widths() {
        assert_eq!(std::mem::size_of::<EntryRef10x10>(), 4);
        assert_eq!(std::mem::size_of::<EntryRef18x6>(), 4);
        assert_eq!(std::mem::size_of::<EntryRef3x2>(), 4);
        assert_eq!(std::mem::size_of::<EntryRef24x8>(), 4);
        assert_eq!(std::mem::size_of::<EntryRef31x1>(), 4);
        assert_eq!(std::mem::size_of::<EntryRef15x17>(), 4);
    }
}
