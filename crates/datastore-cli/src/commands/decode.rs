use std::fmt::Write as _;

use datastore_core::RefLayout;

use super::report::RefReport;
use super::{CommandError, emit};

pub struct DecodeArgs {
    pub layout: RefLayout,
    pub raws: Vec<u64>,
    pub json: bool,
}

pub fn run(args: DecodeArgs) {
    emit(decode(&args));
}

/// Fails on the first word with reserved bits set.
pub fn decode(args: &DecodeArgs) -> Result<String, CommandError> {
    let reports = args
        .raws
        .iter()
        .map(|&raw| RefReport::decode(&args.layout, raw))
        .collect::<Result<Vec<_>, _>>()?;

    if args.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&reports)?));
    }

    let mut out = String::new();
    for report in &reports {
        writeln!(out, "{}", report.render()).unwrap();
    }
    Ok(out)
}
