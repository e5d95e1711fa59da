mod cli;
mod commands;

use cli::{DecodeParams, DumpParams, EncodeParams, LayoutsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("encode", m)) => {
            let params = EncodeParams::from_matches(m);
            commands::encode::run(params.into());
        }
        Some(("decode", m)) => {
            let params = DecodeParams::from_matches(m);
            commands::decode::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("layouts", m)) => {
            let params = LayoutsParams::from_matches(m);
            commands::layouts::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
