//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `From<*Params>` impls bridge dispatch to command handlers

use clap::ArgMatches;
use datastore_core::RefLayout;

use super::ColorChoice;
use crate::commands::decode::DecodeArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::encode::EncodeArgs;
use crate::commands::layouts::LayoutsArgs;

pub struct EncodeParams {
    pub layout: RefLayout,
    pub offset: u64,
    pub buffer_id: u32,
    pub json: bool,
}

impl EncodeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            layout: parse_layout(m),
            offset: m.get_one::<u64>("offset").copied().unwrap_or_default(),
            buffer_id: m.get_one::<u32>("buffer").copied().unwrap_or_default(),
            json: m.get_flag("json"),
        }
    }
}

impl From<EncodeParams> for EncodeArgs {
    fn from(p: EncodeParams) -> Self {
        Self {
            layout: p.layout,
            offset: p.offset,
            buffer_id: p.buffer_id,
            json: p.json,
        }
    }
}

pub struct DecodeParams {
    pub layout: RefLayout,
    pub raws: Vec<u64>,
    pub json: bool,
}

impl DecodeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            layout: parse_layout(m),
            raws: parse_raws(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<DecodeParams> for DecodeArgs {
    fn from(p: DecodeParams) -> Self {
        Self {
            layout: p.layout,
            raws: p.raws,
            json: p.json,
        }
    }
}

pub struct DumpParams {
    pub layout: RefLayout,
    pub raws: Vec<u64>,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            layout: parse_layout(m),
            raws: parse_raws(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            layout: p.layout,
            raws: p.raws,
            color: p.color.should_colorize(),
        }
    }
}

pub struct LayoutsParams {
    pub json: bool,
}

impl LayoutsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
        }
    }
}

impl From<LayoutsParams> for LayoutsArgs {
    fn from(p: LayoutsParams) -> Self {
        Self { json: p.json }
    }
}

/// `--layout` is required, so clap has already rejected a missing one.
fn parse_layout(m: &ArgMatches) -> RefLayout {
    m.get_one::<RefLayout>("layout")
        .copied()
        .unwrap_or_else(|| unreachable!("clap should have required --layout"))
}

fn parse_raws(m: &ArgMatches) -> Vec<u64> {
    m.get_many::<u64>("raws")
        .map(|vals| vals.copied().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
