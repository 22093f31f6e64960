use super::{decode, encode, DataStore};
use crate::error::{OrreryError, Result};
use crate::model::{default_bodies, CelestialBody};
use std::path::Path;

/// In-memory storage backend for testing.
///
/// Holds the serialized collection rather than the records themselves so
/// `load` goes through the same decoding as [`super::fs::FileStore`].
#[derive(Default)]
pub struct InMemoryStore {
    data: Option<String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a raw payload, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            data: Some(raw.into()),
            simulate_write_error: false,
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<CelestialBody>> {
        match &self.data {
            Some(raw) => decode(raw, Path::new("<memory>")),
            None => Ok(default_bodies()),
        }
    }

    fn save(&mut self, bodies: &[CelestialBody]) -> Result<()> {
        if self.simulate_write_error {
            return Err(OrreryError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        self.data = Some(encode(bodies)?);
        Ok(())
    }

    fn exists(&self) -> bool {
        self.data.is_some()
    }

    fn discard(&mut self) -> Result<()> {
        self.data = None;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A few bodies whose insertion order is deliberately unsorted on every field.
    pub fn inner_planets_shuffled() -> Vec<CelestialBody> {
        vec![
            CelestialBody::new("Earth", 1.00, 1.0, 365.0).unwrap(),
            CelestialBody::new("Mercury", 0.39, 0.0553, 88.0).unwrap(),
            CelestialBody::new("Venus", 0.72, 0.815, 225.0).unwrap(),
        ]
    }

    pub fn store_with(bodies: &[CelestialBody]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.save(bodies).unwrap();
        store
    }
}
