use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;
use crate::store::DataStore;

/// Discards the backing store and restarts from the default dataset.
///
/// Works on a corrupt store too, since nothing is read before discarding.
pub fn run<S: DataStore>(store: &mut S, records: &mut RecordStore) -> Result<CmdResult> {
    let existed = store.exists();
    store.discard()?;
    records.replace_all(store.load()?);

    let mut result = CmdResult::default();
    if existed {
        result.add_message(CmdMessage::warning("Previous data file discarded"));
    }
    result.add_message(CmdMessage::success(format!(
        "Catalog reset to the default dataset ({} bodies)",
        records.len()
    )));
    Ok(result)
}
