//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("entryref")
        .about("Build and inspect packed entry references")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(encode_command())
        .subcommand(decode_command())
        .subcommand(dump_command())
        .subcommand(layouts_command())
}

/// Pack an offset and buffer id into a raw word.
pub fn encode_command() -> Command {
    Command::new("encode")
        .about("Pack an offset and buffer id into a raw word")
        .after_help(
            r#"EXAMPLES:
  entryref encode -l 10x10 -o 5 -b 3            # 0x00000c05
  entryref encode -l 22/10/64@3 -o 64 -b 2      # byte offset, 8-byte units
  entryref encode -l 24x8 -o 7 -b 1 --json"#,
        )
        .arg(layout_arg())
        .arg(offset_arg())
        .arg(buffer_arg())
        .arg(json_arg())
}

/// Unpack raw words.
pub fn decode_command() -> Command {
    Command::new("decode")
        .about("Unpack raw words into offset and buffer id")
        .after_help(
            r#"EXAMPLES:
  entryref decode -l 10x10 3077
  entryref decode -l 10x10 0xc05 0xffffffff --json"#,
        )
        .arg(layout_arg())
        .arg(raws_arg())
        .arg(json_arg())
}

/// Listing of raw words grouped by buffer.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("List raw words grouped by buffer")
        .after_help(
            r#"EXAMPLES:
  entryref dump -l 10x10 7 3077 0xffffffff 0 4095
  entryref dump -l 3/2 0x1f 0x20 --color never"#,
        )
        .arg(layout_arg())
        .arg(raws_arg())
        .arg(color_arg())
}

/// Standard layouts.
pub fn layouts_command() -> Command {
    Command::new("layouts")
        .about("List the standard layouts")
        .arg(json_arg())
}
