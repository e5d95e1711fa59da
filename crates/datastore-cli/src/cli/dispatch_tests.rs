//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Layout and raw word parsing happens at the clap boundary
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Required args are enforced

use datastore_core::RefLayout;

use super::*;
use crate::cli::commands::{decode_command, dump_command, encode_command, layouts_command};

#[test]
fn encode_extracts_fields() {
    let cmd = encode_command();
    let result = cmd.try_get_matches_from(["encode", "-l", "10x10", "-o", "5", "-b", "3"]);
    assert!(result.is_ok(), "encode should parse: {:?}", result.err());

    let m = result.unwrap();
    let params = EncodeParams::from_matches(&m);

    assert_eq!(params.layout, RefLayout::new(10, 10, 32));
    assert_eq!(params.offset, 5);
    assert_eq!(params.buffer_id, 3);
    assert!(!params.json);
}

#[test]
fn encode_accepts_explicit_layout() {
    let cmd = encode_command();
    let m = cmd
        .try_get_matches_from([
            "encode",
            "--layout",
            "22/10/64@3",
            "--offset",
            "64",
            "--buffer",
            "2",
            "--json",
        ])
        .unwrap();
    let params = EncodeParams::from_matches(&m);

    assert_eq!(params.layout, RefLayout::new(22, 10, 64).with_align(3));
    assert!(params.json);
}

#[test]
fn encode_requires_layout() {
    let cmd = encode_command();
    let result = cmd.try_get_matches_from(["encode", "-o", "5", "-b", "3"]);
    assert!(result.is_err());
}

#[test]
fn bad_layout_rejected_by_clap() {
    let cmd = encode_command();
    let result = cmd.try_get_matches_from(["encode", "-l", "24/10/32", "-o", "0", "-b", "0"]);
    let err = result.err().unwrap().to_string();
    assert!(err.contains("exceed a 32-bit word"), "{err}");
}

#[test]
fn decode_parses_hex_and_decimal() {
    let cmd = decode_command();
    let m = cmd
        .try_get_matches_from(["decode", "-l", "10x10", "3077", "0xc05", "0xffffffff"])
        .unwrap();
    let params = DecodeParams::from_matches(&m);

    assert_eq!(params.raws, vec![3077, 3077, u32::MAX as u64]);
}

#[test]
fn decode_rejects_garbage_word() {
    let cmd = decode_command();
    let result = cmd.try_get_matches_from(["decode", "-l", "10x10", "xyz"]);
    assert!(result.is_err());
}

#[test]
fn decode_requires_words() {
    let cmd = decode_command();
    let result = cmd.try_get_matches_from(["decode", "-l", "10x10"]);
    assert!(result.is_err());
}

#[test]
fn dump_color_choice() {
    let cmd = dump_command();
    let m = cmd
        .try_get_matches_from(["dump", "-l", "3/2", "0x1f", "--color", "never"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.color, ColorChoice::Never);
    assert_eq!(params.layout, RefLayout::new(3, 2, 32));
    assert_eq!(params.raws, vec![0x1f]);
}

#[test]
fn dump_color_defaults_to_auto() {
    let cmd = dump_command();
    let m = cmd.try_get_matches_from(["dump", "-l", "3x2", "1"]).unwrap();
    let params = DumpParams::from_matches(&m);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn layouts_json_flag() {
    let cmd = layouts_command();
    let m = cmd.try_get_matches_from(["layouts", "--json"]).unwrap();
    assert!(LayoutsParams::from_matches(&m).json);
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["entryref"]);
    assert!(result.is_err());
}

#[test]
fn cli_routes_subcommands() {
    let m = build_cli()
        .try_get_matches_from(["entryref", "layouts"])
        .unwrap();
    assert_eq!(m.subcommand_name(), Some("layouts"));
}
