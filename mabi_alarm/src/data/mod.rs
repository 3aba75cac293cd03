use std::sync::OnceLock;

use alarm_core::JsonFileStore;
use serenity::client::Context;
use tokio_cron_scheduler::JobScheduler;

use crate::config::MAlarmConfig;
use crate::modules::{Module as _, for_each_module};
use crate::prelude::*;

/// A general color that can be used for embeds indicating errors.
pub const ERROR_EMBED_COLOR: Colour = Colour::new(0xCF_00_25);

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
pub type MError = anyhow::Error;

/// Actual data type provided to poise's user data.
pub type MFrameworkData = Arc<MBotData>;
pub type MContext<'a> = poise::Context<'a, MFrameworkData, MError>;
pub type MCommand = poise::Command<MFrameworkData, MError>;

/// The global bot data. Only one instance exists per bot.
pub struct MBotData {
    /// The alarm configuration.
    config: MAlarmConfig,
    /// Where user preferences are kept.
    store: Arc<JsonFileStore>,
    /// The running alarm jobs, once started.
    alarms: OnceLock<JobScheduler>,
}

impl MBotData {
    /// Creates a new instance.
    #[must_use]
    pub fn new(config: MAlarmConfig) -> Self {
        let store = Arc::new(JsonFileStore::new(config.settings_path.clone()));
        Self {
            config,
            store,
            alarms: OnceLock::new(),
        }
    }

    /// Gets the alarm configuration.
    #[must_use]
    pub fn config(&self) -> &MAlarmConfig {
        &self.config
    }

    /// Gets the preference store.
    #[must_use]
    pub fn store(&self) -> &Arc<JsonFileStore> {
        &self.store
    }

    /// Keeps the handle of the started alarm jobs.
    ///
    /// Returns `false` if alarms were already started.
    pub fn set_alarms(&self, scheduler: JobScheduler) -> bool {
        self.alarms.set(scheduler).is_ok()
    }

    /// Whether the alarm jobs were started.
    #[must_use]
    pub fn alarms_started(&self) -> bool {
        self.alarms.get().is_some()
    }

    /// Gets the init data needed based on the modules.
    pub fn init(&self) -> Result<MInit> {
        let config = self.config();
        let mut init = MInit::default();

        for_each_module!(|m| {
            m.validate(config)?;
            init.intents |= m.intents();
            init.commands.extend(m.commands());
        });

        Ok(init)
    }

    /// Called once on the first ready event to perform setup with Discord.
    ///
    /// Module failures are logged and don't stop the other modules.
    pub async fn ready(self: Arc<Self>, ctx: &Context, commands: &[MCommand]) {
        let ready = MReady {
            ctx,
            data: &self,
            commands,
        };

        for_each_module!(|m| {
            let name = m.name();
            if let Err(why) = m.ready(&ready).await {
                log::error!("Ready step for `{name}` failed: {why:?}");
            }
        });
    }
}

/// Data needed for bot startup.
pub struct MInit {
    /// Intents used by this app.
    pub intents: GatewayIntents,
    /// Commands to register.
    pub commands: Vec<MCommand>,
}

impl Default for MInit {
    fn default() -> Self {
        Self {
            // default isn't empty but non_privileged and we need empty
            intents: GatewayIntents::empty(),
            commands: Vec::new(),
        }
    }
}

/// State passed to each module when the bot is ready.
pub struct MReady<'a> {
    pub ctx: &'a Context,
    pub data: &'a Arc<MBotData>,
    pub commands: &'a [MCommand],
}
