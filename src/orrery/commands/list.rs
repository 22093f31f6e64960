use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_bodies;
use crate::records::RecordStore;

pub fn run(records: &RecordStore) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_bodies(index_bodies(records.list()));
    if records.is_empty() {
        result.add_message(CmdMessage::info("The catalog is empty."));
    }
    Ok(result)
}
