use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, records: &RecordStore) -> Result<CmdResult> {
    store.save(records.list())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Saved {} bodies", records.len())));
    Ok(result)
}
