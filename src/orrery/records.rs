//! The in-memory record collection.
//!
//! Records have no identity besides their position, so every index handed out
//! by [`RecordStore::list`] is only valid until the next reordering or removal.
//! All validation runs before the collection is touched.

use crate::error::{OrreryError, Result};
use crate::model::{BodyInput, CelestialBody};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    bodies: Vec<CelestialBody>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bodies(bodies: Vec<CelestialBody>) -> Self {
        Self { bodies }
    }

    /// Appends a new record. Does not re-sort.
    pub fn add(&mut self, input: &BodyInput) -> Result<&CelestialBody> {
        let body = input.parse()?;
        self.bodies.push(body);
        let last = self.bodies.len() - 1;
        Ok(&self.bodies[last])
    }

    /// Replaces the fields of the record at `index`, keeping its position.
    pub fn edit(&mut self, index: usize, input: &BodyInput) -> Result<&CelestialBody> {
        self.check_index(index)?;
        let body = input.parse()?;
        self.bodies[index] = body;
        Ok(&self.bodies[index])
    }

    /// Deletes the record at `index`; later records shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<CelestialBody> {
        self.check_index(index)?;
        Ok(self.bodies.remove(index))
    }

    pub fn list(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn get(&self, index: usize) -> Result<&CelestialBody> {
        self.check_index(index)?;
        Ok(&self.bodies[index])
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn replace_all(&mut self, bodies: Vec<CelestialBody>) {
        self.bodies = bodies;
    }

    /// Mutable access for reordering. Callers must not change record content.
    pub(crate) fn bodies_mut(&mut self) -> &mut Vec<CelestialBody> {
        &mut self.bodies
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.bodies.len() {
            return Err(OrreryError::Index {
                index,
                len: self.bodies.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_bodies;

    fn input(name: &str, distance: &str, mass: &str, period: &str) -> BodyInput {
        BodyInput::new(name, distance, mass, period)
    }

    #[test]
    fn add_appends_parsed_record() {
        let mut store = RecordStore::from_bodies(default_bodies());
        let before = store.len();

        let added = store
            .add(&input("Ceres", "2.77", "0.00016", "1682"))
            .unwrap()
            .clone();

        assert_eq!(store.len(), before + 1);
        assert_eq!(added, CelestialBody::new("Ceres", 2.77, 0.00016, 1682.0).unwrap());
        assert_eq!(store.list().last(), Some(&added));
    }

    #[test]
    fn add_to_empty_store() {
        let mut store = RecordStore::new();
        assert!(store.is_empty());
        store.add(&input("Io", "5.2", "0.015", "1.77")).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_invalid_leaves_store_unchanged() {
        let mut store = RecordStore::from_bodies(default_bodies());
        assert!(store.add(&input("", "1", "1", "1")).is_err());
        assert!(store.add(&input("X", "abc", "1", "1")).is_err());
        assert_eq!(store.list(), default_bodies().as_slice());
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut store = RecordStore::from_bodies(default_bodies());
        store
            .edit(2, &input("Terra", "1.0", "1.0", "365.25"))
            .unwrap();

        assert_eq!(store.len(), 8);
        assert_eq!(store.get(2).unwrap().name, "Terra");
        assert_eq!(store.get(2).unwrap().orbital_period, 365.25);
        assert_eq!(store.get(1).unwrap().name, "Venus");
        assert_eq!(store.get(3).unwrap().name, "Mars");
    }

    #[test]
    fn edit_out_of_bounds_is_index_error() {
        let mut store = RecordStore::from_bodies(default_bodies());
        let err = store.edit(8, &input("X", "1", "1", "1")).unwrap_err();
        assert!(matches!(err, OrreryError::Index { index: 8, len: 8 }));
        assert_eq!(store.list(), default_bodies().as_slice());
    }

    #[test]
    fn edit_with_bad_input_keeps_original() {
        let mut store = RecordStore::from_bodies(default_bodies());
        assert!(store.edit(0, &input("Mercury", "0.39", "-1", "88")).is_err());
        assert_eq!(store.list(), default_bodies().as_slice());
    }

    #[test]
    fn remove_shifts_later_records() {
        let mut store = RecordStore::from_bodies(default_bodies());
        let removed = store.remove(1).unwrap();

        assert_eq!(removed.name, "Venus");
        assert_eq!(store.len(), 7);
        let mut expected = default_bodies();
        expected.remove(1);
        assert_eq!(store.list(), expected.as_slice());
    }

    #[test]
    fn remove_out_of_bounds() {
        let mut store = RecordStore::new();
        assert!(matches!(
            store.remove(0),
            Err(OrreryError::Index { index: 0, len: 0 })
        ));
    }
}
