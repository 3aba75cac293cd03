//! Eligibility and scheduling engine for game event alarms.
//!
//! The crate knows nothing about the chat platform. A [`PreferenceStore`]
//! provides who wants which alarms, a [`Notifier`] delivers them, and the
//! [`AlarmScheduler`] ties both to the fixed [`EventSchedule`].
#![warn(missing_docs)]

pub use crate::eligibility::{EventKind, should_notify};
pub use crate::pass::{NotificationEvent, Notifier, PassOutcome, collect_recipients, run_pass};
pub use crate::preference::Preference;
pub use crate::schedule::{EventSchedule, ParseTimeError, TimeOfDay, Trigger};
pub use crate::scheduler::AlarmScheduler;
pub use crate::store::{
    JsonFileStore, MemoryStore, PreferenceStore, Preferences, Snapshot, StoreError,
};

mod eligibility;
mod pass;
mod preference;
mod schedule;
mod scheduler;
pub mod slot;
mod store;
#[cfg(test)]
mod tests;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
