use datastore_core::{EntryRefError, RefLayout};
use serde::Serialize;

/// One decoded word, as printed by `encode` and `decode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefReport {
    pub raw: u64,
    pub hex: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

impl RefReport {
    pub fn decode(layout: &RefLayout, raw: u64) -> Result<Self, EntryRefError> {
        layout.check_raw(raw)?;
        let hex = format!("{raw:#0w$x}", w = layout.word_bits as usize / 4 + 2);
        if layout.is_sentinel(raw) {
            return Ok(Self {
                raw,
                hex,
                valid: false,
                buffer_id: None,
                offset: None,
            });
        }
        Ok(Self {
            raw,
            hex,
            valid: true,
            buffer_id: Some(layout.buffer_id_of(raw)),
            offset: Some(layout.offset_of(raw)),
        })
    }

    pub fn render(&self) -> String {
        match (self.buffer_id, self.offset) {
            (Some(buffer_id), Some(offset)) => {
                format!("{}  buffer {buffer_id}  offset {offset}", self.hex)
            }
            _ => format!("{}  invalid", self.hex),
        }
    }
}
