use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_bodies;
use crate::model::Field;
use crate::records::RecordStore;
use crate::sort::SortEngine;

/// Reorders the catalog by `field`, toggling that field's direction. Never saves.
pub fn run(records: &mut RecordStore, engine: &mut SortEngine, field: Field) -> Result<CmdResult> {
    let direction = engine.sort_by(records.bodies_mut(), field);

    let mut result = CmdResult::default()
        .with_listed_bodies(index_bodies(records.list()))
        .with_sorted(field, direction);
    result.add_message(CmdMessage::info(format!(
        "Sorted by {} ({})",
        field, direction
    )));
    Ok(result)
}
