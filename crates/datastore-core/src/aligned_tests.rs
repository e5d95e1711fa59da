use crate::{AlignedEntryRef, EntryRef, EntryRefError, RefLayout};

/// 4M slots of 16 bytes in each of 1024 buffers.
type Aligned16 = AlignedEntryRef<22, 10, 4, u64>;

#[test]
fn layout_carries_alignment() {
    assert_eq!(Aligned16::LAYOUT, RefLayout::new(22, 10, 64).with_align(4));
    assert_eq!(Aligned16::ALIGNMENT, 16);
    assert_eq!(Aligned16::MAX_OFFSET, ((1 << 22) - 1) * 16);
}

#[test]
fn offsets_are_scaled() {
    let r = Aligned16::new(160, 7);
    assert_eq!(r.offset(), 160);
    assert_eq!(r.unit_offset(), 10);
    assert_eq!(r.buffer_id(), 7);
    assert!(r.is_valid());
    assert_eq!(r.raw(), (7 << 22) | 10);
}

#[test]
fn entry_ref_shares_the_word() {
    let r = Aligned16::new(160, 7);
    let plain: EntryRef<22, 10, u64> = r.into();
    assert_eq!(plain, r.entry_ref());
    assert_eq!(plain.offset(), 10);
    assert_eq!(Aligned16::from_entry_ref(plain), r);
}

#[test]
fn max_byte_offset_roundtrips() {
    let r = Aligned16::new(Aligned16::MAX_OFFSET, 1023);
    assert_eq!(r.offset(), Aligned16::MAX_OFFSET);
    assert_eq!(r.buffer_id(), 1023);
}

#[test]
fn default_is_invalid() {
    let r = Aligned16::default();
    assert!(!r.is_valid());
    assert_eq!(r, Aligned16::INVALID);
    assert_eq!(r.raw(), u64::MAX);
}

#[test]
fn full_width_aligned_uses_zero_sentinel() {
    type Packed = AlignedEntryRef<22, 10, 2, u32>;
    assert_eq!(Packed::default().raw(), 0);
    assert!(!Packed::default().is_valid());

    let r = Packed::new(4, 0);
    assert_eq!(r.raw(), 1);
    assert!(r.is_valid());
    assert_eq!(
        Packed::try_new(0, 0),
        Err(EntryRefError::SentinelPair {
            layout: RefLayout::new(22, 10, 32).with_align(2),
        })
    );
}

#[test]
#[should_panic(expected = "not a multiple of alignment 16")]
fn misaligned_panics() {
    Aligned16::new(17, 0);
}

#[test]
fn try_new_errors() {
    assert_eq!(
        Aligned16::try_new(24, 0),
        Err(EntryRefError::Misaligned {
            offset: 24,
            alignment: 16,
        })
    );
    assert!(matches!(
        Aligned16::try_new(Aligned16::MAX_OFFSET + 16, 0),
        Err(EntryRefError::OffsetOutOfRange { .. })
    ));
    assert!(matches!(
        Aligned16::try_new(0, 1024),
        Err(EntryRefError::BufferOutOfRange { .. })
    ));
}

#[test]
fn align_and_pad() {
    assert_eq!(Aligned16::pad(0), 0);
    assert_eq!(Aligned16::pad(1), 15);
    assert_eq!(Aligned16::pad(16), 0);
    assert_eq!(Aligned16::pad(17), 15);
    assert_eq!(Aligned16::align(1), Some(16));
    assert_eq!(Aligned16::align(32), Some(32));
    assert_eq!(Aligned16::align(33), Some(48));
}

#[test]
fn align_near_word_end() {
    assert_eq!(Aligned16::align(u64::MAX - 15), Some(u64::MAX - 15));
    assert_eq!(Aligned16::align(u64::MAX - 14), None);
    assert_eq!(Aligned16::align(u64::MAX), None);
}

#[test]
fn unit_alignment_matches_entry_ref() {
    type Unaligned = AlignedEntryRef<10, 10, 0, u32>;
    let r = Unaligned::new(5, 3);
    assert_eq!(r.raw(), EntryRef::<10, 10, u32>::new(5, 3).raw());
    assert_eq!(Unaligned::pad(7), 0);
}

#[test]
fn ordering_follows_raw() {
    let a = Aligned16::new(16, 1);
    let b = Aligned16::new(32, 1);
    let c = Aligned16::new(0, 2);
    assert!(a < b && b < c && c < Aligned16::INVALID);
}

#[test]
fn display_and_debug() {
    let r = Aligned16::new(160, 7);
    assert_eq!(r.to_string(), "7:160");
    assert_eq!(format!("{r:?}"), "AlignedEntryRef<22/10/64@4>(7:160)");
    assert_eq!(Aligned16::INVALID.to_string(), "invalid");
}

#[test]
fn codec_and_serde() {
    let r = Aligned16::new(160, 7);
    assert_eq!(Aligned16::from_le_bytes(&r.to_le_bytes()), Ok(r));
    assert_eq!(Aligned16::try_from_raw(r.raw()), Ok(r));

    let json = serde_json::to_string(&r).unwrap();
    assert_eq!(json, ((7u64 << 22) | 10).to_string());
    assert_eq!(serde_json::from_str::<Aligned16>(&json).unwrap(), r);
}
