use crate::commands::{at_display_index, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::records::RecordStore;

pub fn run(records: &mut RecordStore, index: DisplayIndex) -> Result<CmdResult> {
    let removed = records
        .remove(index.position())
        .map_err(|e| at_display_index(e, index))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Body removed ({}): {}",
        index, removed.name
    )));
    Ok(result.with_affected_bodies(vec![removed]))
}
