use std::future::Future;

use crate::eligibility::{EventKind, should_notify};
use crate::schedule::Trigger;
use crate::store::{PreferenceStore, Preferences};

/// An alarm to be delivered to the recipients it lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    /// The kind of event.
    pub kind: EventKind,
    /// Whether this is the advance notice.
    pub pre_notice: bool,
    /// The user IDs to mention, never empty.
    pub recipients: Vec<String>,
}

/// Delivers alarms to their destination.
pub trait Notifier: Send + Sync {
    /// Delivers a single alarm.
    ///
    /// # Errors
    ///
    /// Returns `Err` if delivery failed. The alarm is not retried.
    fn notify(&self, event: &NotificationEvent) -> impl Future<Output = crate::Result> + Send;
}

/// What happened during one alarm pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// Nobody was eligible, so nothing was sent.
    Suppressed,
    /// The alarm was delivered.
    Delivered {
        /// How many users were mentioned.
        recipients: usize,
    },
    /// The notifier failed to deliver the alarm.
    DeliveryFailed,
}

/// Collects the users eligible for an alarm, in snapshot order.
#[must_use]
pub fn collect_recipients(kind: EventKind, preferences: &Preferences, hour: u32) -> Vec<String> {
    preferences
        .iter()
        .filter(|(_, preference)| should_notify(kind, preference, hour))
        .map(|(user, _)| user.clone())
        .collect()
}

/// Runs one alarm pass for a trigger firing during `hour`.
///
/// Loads a fresh snapshot from `store` and notifies every eligible user at
/// once. An unavailable store counts as having no preferences. Failures are
/// logged and reported through the outcome, never returned.
pub async fn run_pass<S, N>(store: &S, notifier: &N, trigger: &Trigger, hour: u32) -> PassOutcome
where
    S: PreferenceStore + ?Sized,
    N: Notifier,
{
    let preferences = store.get_or_empty();
    let recipients = collect_recipients(trigger.kind, &preferences, hour);

    if recipients.is_empty() {
        log::debug!("No recipients for {trigger}, skipping.");
        return PassOutcome::Suppressed;
    }

    let event = NotificationEvent {
        kind: trigger.kind,
        pre_notice: trigger.pre_notice,
        recipients,
    };

    match notifier.notify(&event).await {
        Ok(()) => {
            log::info!("Sent {trigger} to {} user(s).", event.recipients.len());
            PassOutcome::Delivered {
                recipients: event.recipients.len(),
            }
        },
        Err(why) => {
            log::error!("Failed to deliver {trigger}: {why:?}");
            PassOutcome::DeliveryFailed
        },
    }
}
