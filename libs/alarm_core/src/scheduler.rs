use std::sync::Arc;

use chrono::{FixedOffset, Timelike as _, Utc};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::pass::{Notifier, PassOutcome, run_pass};
use crate::schedule::{EventSchedule, Trigger};
use crate::store::PreferenceStore;

/// Runs alarm passes for every trigger of an [`EventSchedule`].
///
/// Each trigger becomes a daily cron job in the configured UTC offset. When a
/// job fires, the current hour is read in that same offset and a pass runs
/// with a fresh store snapshot. Jobs run independently of each other.
pub struct AlarmScheduler<S, N> {
    schedule: EventSchedule,
    store: Arc<S>,
    notifier: Arc<N>,
    offset: FixedOffset,
}

impl<S, N> AlarmScheduler<S, N>
where
    S: PreferenceStore + 'static,
    N: Notifier + 'static,
{
    /// Creates a new scheduler. It does nothing until [started].
    ///
    /// [started]: Self::start
    #[must_use]
    pub fn new(
        schedule: EventSchedule,
        store: Arc<S>,
        notifier: Arc<N>,
        offset: FixedOffset,
    ) -> Self {
        Self {
            schedule,
            store,
            notifier,
            offset,
        }
    }

    /// The schedule that drives this scheduler.
    #[must_use]
    pub fn schedule(&self) -> &EventSchedule {
        &self.schedule
    }

    /// The current hour in the scheduler's offset.
    #[must_use]
    pub fn current_hour(&self) -> u32 {
        Utc::now().with_timezone(&self.offset).hour()
    }

    /// Runs the pass for a trigger immediately.
    pub async fn fire(&self, trigger: &Trigger) -> PassOutcome {
        let hour = self.current_hour();
        run_pass(&*self.store, &*self.notifier, trigger, hour).await
    }

    /// Registers all triggers and starts the job scheduler.
    ///
    /// The returned handle may be used to shut the jobs down. Dropping it does
    /// not stop them.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the job scheduler cannot be created, a job cannot be
    /// registered, or the scheduler fails to start.
    pub async fn start(self) -> crate::Result<JobScheduler> {
        let this = Arc::new(self);
        let scheduler = JobScheduler::new().await?;

        for trigger in this.schedule.triggers() {
            let job = Self::job(&this, trigger)?;
            scheduler.add(job).await?;
            log::debug!("Registered alarm {trigger}.");
        }

        scheduler.start().await?;
        log::info!("Alarm scheduler started in UTC{}.", this.offset);
        Ok(scheduler)
    }

    fn job(this: &Arc<Self>, trigger: Trigger) -> crate::Result<Job> {
        let cron = trigger.cron_expr();
        let this = Arc::clone(this);

        let job = Job::new_async_tz(cron.as_str(), this.offset, move |_id, _scheduler| {
            let this = Arc::clone(&this);
            Box::pin(async move {
                let outcome = this.fire(&trigger).await;
                log::trace!("Alarm {trigger} finished: {outcome:?}");
            })
        })?;

        Ok(job)
    }
}
