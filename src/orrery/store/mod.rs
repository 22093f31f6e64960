//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence adapter for the catalog. The
//! whole collection is read and written at once; there are no incremental
//! writes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One JSON array in `<data dir>/<data_file>` (`bodies.json` by default)
//!   - Writes go to a temporary sibling file and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the serialized form, so corrupt payloads can be injected
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "name": "Mercury", "distance": 0.39, "mass": 0.0553, "orbital_period": 88.0 },
//!   ...
//! ]
//! ```
//!
//! No header and no schema version. When no backing file exists, `load`
//! returns [`crate::model::default_bodies`].

use crate::error::{OrreryError, Result};
use crate::model::CelestialBody;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog persistence.
pub trait DataStore {
    /// Load the full collection, or the default dataset if nothing is stored yet.
    fn load(&self) -> Result<Vec<CelestialBody>>;

    /// Overwrite the stored collection.
    fn save(&mut self, bodies: &[CelestialBody]) -> Result<()>;

    /// Whether a backing store currently exists.
    fn exists(&self) -> bool;

    /// Remove the backing store so the next load returns the default dataset.
    fn discard(&mut self) -> Result<()>;
}

/// Decodes a serialized collection, rejecting anything that is not a list of
/// complete, valid records.
pub(crate) fn decode(content: &str, origin: &Path) -> Result<Vec<CelestialBody>> {
    let bodies: Vec<CelestialBody> =
        serde_json::from_str(content).map_err(|e| OrreryError::CorruptData {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;

    for (position, body) in bodies.iter().enumerate() {
        body.validate().map_err(|e| OrreryError::CorruptData {
            path: origin.to_path_buf(),
            reason: format!("record {}: {}", position + 1, e),
        })?;
    }
    Ok(bodies)
}

pub(crate) fn encode(bodies: &[CelestialBody]) -> Result<String> {
    serde_json::to_string_pretty(bodies).map_err(OrreryError::Serialization)
}
