use crate::commands::{at_display_index, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::model::BodyInput;
use crate::records::RecordStore;

pub fn run(records: &mut RecordStore, index: DisplayIndex, input: &BodyInput) -> Result<CmdResult> {
    let updated = records
        .edit(index.position(), input)
        .map_err(|e| at_display_index(e, index))?
        .clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Body updated ({}): {}",
        index, updated.name
    )));
    Ok(result.with_affected_bodies(vec![updated]))
}
