use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, records: &mut RecordStore) -> Result<CmdResult> {
    let seeded = !store.exists();
    let bodies = store.load()?;
    records.replace_all(bodies);

    let mut result = CmdResult::default();
    if seeded {
        result.add_message(CmdMessage::info(format!(
            "No data file yet, starting from the default dataset ({} bodies)",
            records.len()
        )));
    } else {
        result.add_message(CmdMessage::info(format!("Loaded {} bodies", records.len())));
    }
    Ok(result)
}
