//! # API Facade
//!
//! [`OrreryApi`] is the boundary every presenter talks to. It owns the three
//! core pieces (the storage backend, the [`RecordStore`] and the
//! [`SortEngine`] with its toggle state) and dispatches each call to the
//! command layer.
//!
//! Mutations never save on their own. A presenter calls
//! [`OrreryApi::persist`] after a successful `add_record`, `edit_record` or
//! `remove_record`, and re-renders from [`OrreryApi::list_records`]. Sorting
//! only reorders memory.
//!
//! `OrreryApi<S: DataStore>` is generic over the storage backend:
//! - Production: `OrreryApi<FileStore>`
//! - Testing: `OrreryApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::model::{BodyInput, CelestialBody, Direction, Field};
use crate::records::RecordStore;
use crate::sort::{SortEngine, SortState};
use crate::store::DataStore;

pub struct OrreryApi<S: DataStore> {
    store: S,
    records: RecordStore,
    sorter: SortEngine,
    paths: commands::OrreryPaths,
}

impl<S: DataStore> OrreryApi<S> {
    /// Creates an API with an empty, unloaded collection.
    pub fn new(store: S, paths: commands::OrreryPaths) -> Self {
        Self {
            store,
            records: RecordStore::new(),
            sorter: SortEngine::new(),
            paths,
        }
    }

    /// Creates an API and loads the collection from `store`.
    pub fn open(store: S, paths: commands::OrreryPaths) -> Result<Self> {
        let mut api = Self::new(store, paths);
        api.load()?;
        Ok(api)
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&self.store, &mut self.records)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.records)
    }

    pub fn records(&self) -> &[CelestialBody] {
        self.records.list()
    }

    pub fn add_record(&mut self, input: &BodyInput) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.records, input)
    }

    pub fn edit_record(
        &mut self,
        index: DisplayIndex,
        input: &BodyInput,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.records, index, input)
    }

    pub fn remove_record(&mut self, index: DisplayIndex) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.records, index)
    }

    pub fn sort_by_field(&mut self, field: Field) -> Result<commands::CmdResult> {
        commands::sort::run(&mut self.records, &mut self.sorter, field)
    }

    /// Text form of [`OrreryApi::sort_by_field`]; unknown keys fail untouched.
    pub fn sort_by_key(&mut self, key: &str) -> Result<commands::CmdResult> {
        let field: Field = key.parse()?;
        self.sort_by_field(field)
    }

    /// Forces the direction the next sort by `field` will use.
    pub fn set_sort_direction(&mut self, field: Field, direction: Direction) {
        self.sorter
            .state_mut()
            .set(field, direction.is_descending());
    }

    pub fn sort_state(&self) -> &SortState {
        self.sorter.state()
    }

    pub fn persist(&mut self) -> Result<commands::CmdResult> {
        commands::persist::run(&mut self.store, &self.records)
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store, &mut self.records)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, OrreryPaths};
