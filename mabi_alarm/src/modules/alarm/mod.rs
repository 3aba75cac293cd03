use alarm_core::{AlarmScheduler, EventSchedule};

use super::prelude::*;

pub mod notifier;

#[cfg(test)]
mod tests;

pub struct Module;

impl super::Module for Module {
    fn name(&self) -> &'static str {
        "alarm"
    }

    fn intents(&self) -> GatewayIntents {
        GatewayIntents::GUILDS
    }

    async fn ready(self, ready: &MReady<'_>) -> Result {
        let data = ready.data;
        if data.alarms_started() {
            return Ok(());
        }

        let config = data.config();
        if config.utc_offset.is_none() {
            log::warn!(
                "No `alarm.utc_offset` set, using the host offset {}. Alarms won't follow daylight saving changes.",
                config.offset()
            );
        }

        let notifier = notifier::DiscordNotifier::new(Arc::clone(&ready.ctx.http), config);
        let scheduler = AlarmScheduler::new(
            EventSchedule::default(),
            Arc::clone(data.store()),
            Arc::new(notifier),
            config.offset(),
        );

        let jobs = scheduler
            .start()
            .await
            .context("cannot start alarm scheduler")?;

        if !data.set_alarms(jobs) {
            log::warn!("Alarm scheduler was started twice.");
        }

        Ok(())
    }
}
