use std::sync::{Arc, Mutex};

use arc_swap::ArcSwap;

use super::{PreferenceStore, Preferences, Snapshot, StoreError};
use crate::preference::Preference;

/// A preference store held entirely in memory.
///
/// Reads are lock-free and hand out the current snapshot. Writes copy the
/// snapshot, apply the change and swap the result in.
#[derive(Debug)]
pub struct MemoryStore {
    current: ArcSwap<Preferences>,
    write_lock: Mutex<()>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Preferences::new())
    }
}

impl MemoryStore {
    /// Creates a new store with initial preferences.
    #[must_use]
    pub fn new(preferences: Preferences) -> Self {
        Self {
            current: ArcSwap::from_pointee(preferences),
            write_lock: Mutex::new(()),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Preference)> for MemoryStore {
    fn from_iter<T: IntoIterator<Item = (K, Preference)>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Result<Snapshot, StoreError> {
        Ok(self.current.load_full())
    }

    fn set(&self, user: &str, preference: Preference) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().expect("should not be poisoned");

        let mut next = Preferences::clone(&self.current.load());
        next.insert(user.to_owned(), preference);
        self.current.store(Arc::new(next));
        Ok(())
    }
}
