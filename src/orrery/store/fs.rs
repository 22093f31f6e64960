use super::{decode, encode, DataStore};
use crate::error::{OrreryError, Result};
use crate::model::{default_bodies, CelestialBody};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "bodies.json";

pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(OrreryError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<CelestialBody>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(default_bodies());
        }
        let content = fs::read_to_string(&path).map_err(OrreryError::Io)?;
        decode(&content, &path)
    }

    fn save(&mut self, bodies: &[CelestialBody]) -> Result<()> {
        self.ensure_dir()?;
        let content = encode(bodies)?;

        let tmp_path = self.root.join(format!(".bodies-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(OrreryError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, self.data_path()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(OrreryError::Io(e));
        }
        Ok(())
    }

    fn exists(&self) -> bool {
        self.data_path().exists()
    }

    fn discard(&mut self) -> Result<()> {
        let path = self.data_path();
        if path.exists() {
            fs::remove_file(path).map_err(OrreryError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_defaults() {
        let (_dir, store) = setup();
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), default_bodies());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, mut store) = setup();
        let mut bodies = default_bodies();
        bodies.reverse();
        bodies.push(CelestialBody::new("Ceres", 2.77, 0.00016, 1682.0).unwrap());

        store.save(&bodies).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), bodies);
    }

    #[test]
    fn empty_collection_round_trips() {
        let (_dir, mut store) = setup();
        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_overwrites_and_leaves_no_tmp_files() {
        let (_dir, mut store) = setup();
        store.save(&default_bodies()).unwrap();
        store.save(&default_bodies()[..2]).unwrap();

        assert_eq!(store.load().unwrap().len(), 2);
        for entry in fs::read_dir(store.root()).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "leftover tmp file: {}", name);
        }
    }

    #[test]
    fn failed_rename_reports_io_and_cleans_up() {
        let (_dir, mut store) = setup();
        // A directory in place of the data file makes the final rename fail
        fs::create_dir_all(store.data_path()).unwrap();

        let err = store.save(&default_bodies()).unwrap_err();
        assert!(matches!(err, OrreryError::Io(_)));

        let leftovers: Vec<_> = fs::read_dir(store.root())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "leftover tmp files: {:?}", leftovers);
        assert!(store.data_path().is_dir());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let (_dir, store) = setup();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.data_path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, OrreryError::CorruptData { .. }));
    }

    #[test]
    fn custom_data_file_name() {
        let (dir, mut store) = setup();
        store = store.with_data_file("moons.json");
        store.save(&default_bodies()[..1]).unwrap();
        assert!(dir.path().join("data").join("moons.json").exists());
    }

    #[test]
    fn discard_restores_defaults() {
        let (_dir, mut store) = setup();
        store.save(&[]).unwrap();
        store.discard().unwrap();
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), default_bodies());
        // Discarding twice is fine
        store.discard().unwrap();
    }
}
