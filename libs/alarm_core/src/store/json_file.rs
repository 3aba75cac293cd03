use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::{PreferenceStore, Preferences, Snapshot, StoreError};
use crate::preference::Preference;

/// A preference store persisted as a single JSON object file.
///
/// The file maps user IDs to preference wire names. A missing or empty file
/// holds no preferences. Every read parses the whole file and every write
/// replaces it through a temporary sibling file, so readers never observe a
/// partially written file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file doesn't need to exist yet.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Preferences, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(why) if why.kind() == io::ErrorKind::NotFound => return Ok(Preferences::new()),
            Err(why) => return Err(self.unavailable(why)),
        };

        if bytes.trim_ascii().is_empty() {
            return Ok(Preferences::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, preferences: &Preferences) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(preferences).map_err(|source| {
            StoreError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|why| self.unavailable(why))?;

        if let Err(why) = fs::rename(&temp, &self.path) {
            _ = fs::remove_file(&temp);
            return Err(self.unavailable(why));
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("preferences"), OsString::from);

        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn unavailable(&self, source: io::Error) -> StoreError {
        StoreError::Unavailable {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self) -> Result<Snapshot, StoreError> {
        self.read().map(Arc::new)
    }

    fn set(&self, user: &str, preference: Preference) -> Result<(), StoreError> {
        // read-modify-write must not interleave with another writer
        let _guard = self.write_lock.lock().expect("should not be poisoned");

        let mut preferences = self.read()?;
        preferences.insert(user.to_owned(), preference);
        self.write(&preferences)
    }
}
