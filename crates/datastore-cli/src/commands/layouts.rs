use std::fmt::Write as _;

use datastore_core::FAMILY;
use serde::Serialize;

use super::{CommandError, emit};

pub struct LayoutsArgs {
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LayoutRow {
    name: &'static str,
    layout: String,
    word_bits: u32,
    offset_size: u64,
    num_buffers: u64,
}

pub fn run(args: LayoutsArgs) {
    emit(layouts(&args));
}

pub fn layouts(args: &LayoutsArgs) -> Result<String, CommandError> {
    let rows: Vec<LayoutRow> = FAMILY
        .iter()
        .map(|(name, layout)| LayoutRow {
            name: *name,
            layout: layout.to_string(),
            word_bits: layout.word_bits,
            offset_size: layout.offset_size(),
            num_buffers: layout.num_buffers(),
        })
        .collect();

    if args.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&rows)?));
    }

    let mut out = String::new();
    for row in &rows {
        writeln!(
            out,
            "{:<7}{:<10}{:>11} offsets{:>9} buffers",
            row.name, row.layout, row.offset_size, row.num_buffers
        )
        .unwrap();
    }
    Ok(out)
}
