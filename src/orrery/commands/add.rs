use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::model::BodyInput;
use crate::records::RecordStore;

pub fn run(records: &mut RecordStore, input: &BodyInput) -> Result<CmdResult> {
    let added = records.add(input)?.clone();
    let index = DisplayIndex::from_position(records.len() - 1);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Body added ({}): {}",
        index, added.name
    )));
    Ok(result.with_affected_bodies(vec![added]))
}
