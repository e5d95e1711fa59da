use datastore_core::RefLayout;

use super::report::RefReport;
use super::{CommandError, emit};

pub struct EncodeArgs {
    pub layout: RefLayout,
    pub offset: u64,
    pub buffer_id: u32,
    pub json: bool,
}

pub fn run(args: EncodeArgs) {
    emit(encode(&args));
}

pub fn encode(args: &EncodeArgs) -> Result<String, CommandError> {
    let raw = args.layout.pack(args.offset, args.buffer_id)?;
    let report = RefReport::decode(&args.layout, raw)?;
    if args.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&report)?));
    }
    Ok(format!("{}\n", report.render()))
}
