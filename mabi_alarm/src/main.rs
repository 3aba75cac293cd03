mod build;
mod config;
mod data;
mod logging;
mod modules;
mod prelude;
mod slashies;

fn main() -> anyhow::Result<()> {
    use std::borrow::Cow;
    use std::panic;

    use serenity::gateway::ActivityData;
    use serenity::prelude::*;

    use crate::build::{GIT_HASH, VERSION};
    use crate::config::MConfig;
    use crate::prelude::*;

    return inner();

    // short async fn to reduce `tokio::main` scope
    #[tokio::main]
    async fn inner() -> anyhow::Result<()> {
        // run the program and clean up
        let res = run().await;
        if let Err(why) = &res {
            log::error!("Exiting due to error: {why:?}");
        }

        log::logger().flush();
        res
    }

    // actual main logic
    async fn run() -> Result {
        let config = build_config()?;
        init_logging(config.log)?;

        if config.log_panic {
            // register the custom panic handler after logging is set up
            panic::set_hook(Box::new(on_panic));
        }

        log::info!(target: "mabi_alarm::version", "Mabi Alarm v{VERSION} - {GIT_HASH}");

        let bot_data = Arc::new(MBotData::new(config.alarm));
        let init = bot_data.init()?;

        let framework = poise::Framework::builder()
            .options(poise::FrameworkOptions {
                commands: init.commands,
                pre_command: |ctx| Box::pin(slashies::pre_command(ctx)),
                on_error: |error| Box::pin(slashies::error_handler(error)),
                event_handler: |ctx, event, framework, data| {
                    Box::pin(modules::dispatch_event(ctx, event, framework, data))
                },
                ..Default::default()
            })
            .setup(move |ctx, _ready, framework| {
                Box::pin(async move {
                    Arc::clone(&bot_data)
                        .ready(ctx, &framework.options().commands)
                        .await;
                    Ok(bot_data)
                })
            })
            .build();

        let status = config
            .discord
            .status
            .unwrap_or_else(|| format!("Mabi Alarm v{VERSION}"));

        let mut client = Client::builder(config.discord.token, init.intents)
            .activity(ActivityData::playing(status))
            .framework(framework)
            .await
            .context("failed to init discord client")?;

        client
            .start()
            .await
            .context("discord client shut down unexpectedly")
    }

    /// Custom panic handler that writes the panic to the logger and flushes it.
    fn on_panic(info: &panic::PanicHookInfo<'_>) {
        use std::backtrace::Backtrace;
        use std::io::{Write as _, stdout};

        // always include the backtrace here, even when not enabled
        let backtrace = Backtrace::force_capture();
        let thread = std::thread::current();
        let name = thread.name().unwrap_or("<unnamed>");

        // just in case the loggers fail or are empty
        _ = writeln!(stdout(), "thread '{name}' {info}");
        log::error!("thread '{name}' {info}\n{backtrace}");
        log::logger().flush();
    }

    fn profile() -> Result<Cow<'static, str>> {
        use std::env::VarError::NotPresent;
        use std::env::var;

        match var("MABI_ALARM_PROFILE") {
            Ok(value) => Ok(value.into()),
            Err(NotPresent) => Ok("release".into()),
            Err(err) => Err(err).context("cannot load MABI_ALARM_PROFILE env variable"),
        }
    }

    fn build_config() -> Result<MConfig> {
        use crate::config::setup::{Builder, DotEnv, Env, File, TomlText};

        // names the bot has always read its settings from
        const ENV_ALIASES: &[(&str, &str)] = &[
            ("DISCORD_BOT_TOKEN", "discord.token"),
            ("SETTING_CHANNEL_ID", "alarm.setting_channel"),
            ("ALERT_CHANNEL_ID", "alarm.alert_channel"),
            ("GUILD_ID", "alarm.guild"),
            ("EXTRA_GUILD_IDS", "alarm.extra_guilds"),
        ];

        let profile = profile()?;
        let profile_config = format!("mabi_alarm.{profile}.toml");
        let default_config = include_str!("../assets/default_config.toml");

        Builder::new()
            .add_layer(TomlText::new(default_config))
            .add_layer(File::new("mabi_alarm.toml").required(false))
            .add_layer(File::new(&profile_config).required(false))
            .add_layer(DotEnv::new(".env").aliases(ENV_ALIASES))
            .add_layer(Env::new().aliases(ENV_ALIASES))
            .build()
    }

    fn init_logging(config: log4rs::config::RawConfig) -> anyhow::Result<()> {
        let deserializers = crate::logging::deserializers();
        let (appenders, errors) = config.appenders_lossy(&{ deserializers });
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let config = log4rs::Config::builder()
            .appenders(appenders)
            .loggers(config.loggers())
            .build(config.root())?;

        log4rs::init_config(config)?;
        Ok(())
    }
}
