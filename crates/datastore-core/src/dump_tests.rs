use crate::{Colors, EntryRef10x10, RefLayout, dump, dump_refs};

#[test]
fn groups_by_buffer() {
    let refs = [
        EntryRef10x10::new(7, 0),
        EntryRef10x10::new(5, 3),
        EntryRef10x10::INVALID,
        EntryRef10x10::new(0, 0),
        EntryRef10x10::new(1023, 3),
    ];

    let res = dump_refs(&refs, Colors::OFF);

    insta::assert_snapshot!(res, @r#"
    [layout]
    layout = 10/10/32
    refs = 5

    [buffer 0]
      0  0x00000000
      7  0x00000007

    [buffer 3]
         5  0x00000c05
      1023  0x00000fff

    [invalid]
    count = 1
    "#);
}

#[test]
fn corrupt_words_listed_separately() {
    let layout = RefLayout::new(3, 2, 32);

    let res = dump(&layout, &[0x1f, 0x20, 0x05, 0xffff_ffff], Colors::OFF);

    insta::assert_snapshot!(res, @r#"
    [layout]
    layout = 3/2/32
    refs = 4

    [buffer 0]
      5  0x00000005

    [buffer 3]
      7  0x0000001f

    [invalid]
    count = 1

    [corrupt]
      0x00000020
    "#);
}

#[test]
fn aligned_offsets_in_bytes() {
    let layout = RefLayout::new(22, 10, 64).with_align(3);
    let raws = [layout.pack(64, 2).unwrap(), layout.pack(8, 2).unwrap()];

    let res = dump(&layout, &raws, Colors::OFF);

    insta::assert_snapshot!(res, @r#"
    [layout]
    layout = 22/10/64@3
    refs = 2

    [buffer 2]
       8  0x0000000000800001
      64  0x0000000000800008
    "#);
}

#[test]
fn empty_input() {
    let res = dump(&RefLayout::new(10, 10, 32), &[], Colors::OFF);
    assert_eq!(res, "[layout]\nlayout = 10/10/32\nrefs = 0\n");
}

#[test]
fn colored_headers() {
    let res = dump_refs(&[EntryRef10x10::new(1, 1)], Colors::ON);
    assert!(res.starts_with("\x1b[34m[layout]\x1b[0m\n"));
    assert!(res.contains("\x1b[32m1\x1b[0m  \x1b[2m0x00000401\x1b[0m"));
}

#[test]
fn full_width_zero_word_is_invalid() {
    let layout = RefLayout::new(24, 8, 32);

    let res = dump(&layout, &[0, 1, 0x0100_0000], Colors::OFF);

    insta::assert_snapshot!(res, @r#"
    [layout]
    layout = 24/8/32
    refs = 3

    [buffer 0]
      1  0x00000001

    [buffer 1]
      0  0x01000000

    [invalid]
    count = 1
    "#);
}
