use std::sync::{Arc, Mutex};

use alarm_core::*;
use chrono::FixedOffset;

#[derive(Default)]
struct Recorder {
    sent: Mutex<Vec<NotificationEvent>>,
}

impl Notifier for Recorder {
    async fn notify(&self, event: &NotificationEvent) -> anyhow::Result<()> {
        self.sent.lock().expect("not poisoned").push(event.clone());
        Ok(())
    }
}

fn kst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("valid offset")
}

#[tokio::test]
async fn fire_uses_fresh_snapshot() {
    let store = Arc::new(MemoryStore::default());
    let notifier = Arc::new(Recorder::default());
    let scheduler = AlarmScheduler::new(
        EventSchedule::default(),
        Arc::clone(&store),
        Arc::clone(&notifier),
        kst(),
    );

    let trigger = scheduler
        .schedule()
        .triggers()
        .next()
        .expect("default schedule has triggers");

    assert_eq!(scheduler.fire(&trigger).await, PassOutcome::Suppressed);

    // all-on is eligible at every hour, so the outcome doesn't depend on the clock
    store.set("u1", Preference::AllOn).expect("memory store never fails");
    assert_eq!(
        scheduler.fire(&trigger).await,
        PassOutcome::Delivered { recipients: 1 }
    );

    let sent = notifier.sent.lock().expect("not poisoned");
    assert_eq!(sent.len(), 1, "only the second pass delivers");
    assert_eq!(sent[0].recipients, ["u1"]);
}

#[tokio::test]
async fn current_hour_is_in_range() {
    let scheduler = AlarmScheduler::new(
        EventSchedule::default(),
        Arc::new(MemoryStore::default()),
        Arc::new(Recorder::default()),
        kst(),
    );

    assert!(scheduler.current_hour() < 24, "hour should be on a 24h clock");
}

#[tokio::test]
async fn start_registers_jobs() {
    let scheduler = AlarmScheduler::new(
        EventSchedule::default(),
        Arc::new(MemoryStore::default()),
        Arc::new(Recorder::default()),
        kst(),
    );

    let mut jobs = scheduler.start().await.expect("scheduler should start");
    jobs.shutdown().await.expect("scheduler should shut down");
}
