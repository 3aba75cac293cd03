use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::preference::Preference;

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Preferences keyed by user ID, in storage order.
pub type Preferences = IndexMap<String, Preference>;

/// An immutable view of the preferences at one point in time.
pub type Snapshot = Arc<Preferences>;

/// Error type for [`PreferenceStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing medium could not be read or written.
    #[error("preference store {path:?} is unavailable")]
    Unavailable {
        /// The path that was accessed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The backing medium holds data that isn't a preference mapping.
    #[error("preference store {path:?} is malformed")]
    Malformed {
        /// The path that was accessed.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Storage for user preferences.
///
/// Reads return a whole snapshot and writes replace the whole stored mapping.
/// Implementations must serialize writes so that the last completed write
/// reflects the most recent accepted update, and a read concurrent with a
/// write must see either the old or the new mapping in full.
pub trait PreferenceStore: Send + Sync {
    /// Loads the current preferences.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backing medium cannot be read or is malformed.
    fn get(&self) -> Result<Snapshot, StoreError>;

    /// Sets the preference for a user, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the update could not be persisted. The caller must
    /// assume the update was not applied.
    fn set(&self, user: &str, preference: Preference) -> Result<(), StoreError>;

    /// Loads the current preferences, falling back to an empty snapshot if the
    /// store is unavailable.
    fn get_or_empty(&self) -> Snapshot {
        self.get().unwrap_or_else(|why| {
            log::warn!("Preference store unavailable, treating as empty: {why:?}");
            Snapshot::default()
        })
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Arc<S> {
    fn get(&self) -> Result<Snapshot, StoreError> {
        S::get(self)
    }

    fn set(&self, user: &str, preference: Preference) -> Result<(), StoreError> {
        S::set(self, user, preference)
    }
}
