//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::str::FromStr;

use clap::{Arg, ArgAction, value_parser};
use datastore_core::{EntryRefError, RefLayout, family};

/// Reference layout (-l/--layout), by family name or `O/B[/W][@A]`.
pub fn layout_arg() -> Arg {
    Arg::new("layout")
        .short('l')
        .long("layout")
        .value_name("LAYOUT")
        .required(true)
        .value_parser(parse_layout)
        .help("Layout: family name (10x10) or OFFSET/BUFFER[/WORD][@ALIGN]")
}

/// Offset within the buffer (-o/--offset).
pub fn offset_arg() -> Arg {
    Arg::new("offset")
        .short('o')
        .long("offset")
        .value_name("N")
        .required(true)
        .value_parser(value_parser!(u64))
        .help("Offset within the buffer (bytes for aligned layouts)")
}

/// Buffer id (-b/--buffer).
pub fn buffer_arg() -> Arg {
    Arg::new("buffer")
        .short('b')
        .long("buffer")
        .value_name("N")
        .required(true)
        .value_parser(value_parser!(u32))
        .help("Buffer id")
}

/// Raw words (positional, one or more).
pub fn raws_arg() -> Arg {
    Arg::new("raws")
        .value_name("RAW")
        .required(true)
        .num_args(1..)
        .value_parser(parse_raw)
        .help("Raw words, decimal or 0x-prefixed hex")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a decimal or 0x-prefixed hex word")]
pub struct ParseRawError(String);

pub fn parse_layout(s: &str) -> Result<RefLayout, EntryRefError> {
    match family::by_name(s) {
        Some(layout) => Ok(layout),
        None => RefLayout::from_str(s),
    }
}

pub fn parse_raw(s: &str) -> Result<u64, ParseRawError> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    };
    parsed.map_err(|_| ParseRawError(s.to_string()))
}
