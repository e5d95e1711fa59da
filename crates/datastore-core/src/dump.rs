//! Human-readable listing of packed references, grouped by buffer.
//!
//! Sections:
//! - `[layout]`: the layout and number of words dumped
//! - `[buffer N]`: one per buffer, offsets ascending, each with its raw word
//! - `[invalid]`: count of sentinels, if any
//! - `[corrupt]`: words with reserved bits set, if any

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::colors::Colors;
use crate::entry_ref::EntryRef;
use crate::layout::RefLayout;
use crate::word::RefWord;

/// Dump raw words decoded with `layout`.
pub fn dump(layout: &RefLayout, raws: &[u64], colors: Colors) -> String {
    let c = &colors;
    let mut out = String::new();

    let mut buffers: BTreeMap<u32, Vec<(u64, u64)>> = BTreeMap::new();
    let mut invalid = 0usize;
    let mut corrupt = Vec::new();
    for &raw in raws {
        if layout.is_sentinel(raw) {
            invalid += 1;
        } else if !layout.is_legal_raw(raw) {
            corrupt.push(raw);
        } else {
            buffers
                .entry(layout.buffer_id_of(raw))
                .or_default()
                .push((layout.offset_of(raw), raw));
        }
    }

    let hex_width = layout.word_bits as usize / 4 + 2;

    writeln!(out, "{}", c.section("layout")).unwrap();
    writeln!(out, "layout = {layout}").unwrap();
    writeln!(out, "refs = {}", raws.len()).unwrap();

    for (buffer_id, entries) in &mut buffers {
        entries.sort_unstable();
        let w = entries.last().map_or(1, |(offset, _)| width_for(*offset));

        writeln!(out).unwrap();
        writeln!(out, "{}", c.section(format_args!("buffer {buffer_id}"))).unwrap();
        for (offset, raw) in entries.iter() {
            let offset = format!("{offset:>w$}");
            let raw = format!("{raw:#0hex_width$x}");
            writeln!(out, "  {}  {}", c.offset(offset), c.word(raw)).unwrap();
        }
    }

    if invalid > 0 {
        writeln!(out).unwrap();
        writeln!(out, "{}", c.section("invalid")).unwrap();
        writeln!(out, "count = {invalid}").unwrap();
    }

    if !corrupt.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "{}", c.section("corrupt")).unwrap();
        for raw in corrupt {
            writeln!(out, "  {}", c.word(format!("{raw:#0hex_width$x}"))).unwrap();
        }
    }

    out
}

/// Dump typed references.
pub fn dump_refs<const O: u32, const B: u32, W: RefWord>(
    refs: &[EntryRef<O, B, W>],
    colors: Colors,
) -> String {
    let raws: Vec<u64> = refs.iter().map(|r| r.raw().to_u64()).collect();
    dump(&EntryRef::<O, B, W>::LAYOUT, &raws, colors)
}

/// Decimal digits needed to print `n`.
fn width_for(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}
