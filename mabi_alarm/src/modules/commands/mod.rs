use serenity::model::application::Command;

use super::prelude::*;

mod slashies;


pub struct Module;

impl super::Module for Module {
    fn name(&self) -> &'static str {
        "commands"
    }

    fn intents(&self) -> GatewayIntents {
        GatewayIntents::GUILDS
    }

    fn commands(&self) -> impl IntoIterator<Item = MCommand> {
        [slashies::help()]
    }

    async fn ready(self, ready: &MReady<'_>) -> Result {
        let http = &ready.ctx.http;
        let config = ready.data.config();

        if let Err(why) = clear_global_commands(http).await {
            log::error!("Failed to clear global commands: {why:?}");
        }

        for &guild in &config.extra_guilds {
            if let Err(why) = clear_guild_commands(http, guild).await {
                log::error!("Failed to clear commands of guild {guild}: {why:?}");
            }
        }

        poise::builtins::register_in_guild(http, ready.commands, config.guild)
            .await
            .with_context(|| format!("cannot register commands in guild {}", config.guild))?;

        log::info!(
            "Registered {} command(s) in guild {}.",
            ready.commands.len(),
            config.guild
        );
        Ok(())
    }
}

async fn clear_global_commands(http: &Arc<serenity::http::Http>) -> Result {
    let commands = Command::get_global_commands(http).await?;
    for command in commands {
        Command::delete_global_command(http, command.id).await?;
        log::info!("Deleted global command /{}.", command.name);
    }

    Ok(())
}

async fn clear_guild_commands(http: &Arc<serenity::http::Http>, guild: GuildId) -> Result {
    let commands = guild.get_commands(http).await?;
    for command in commands {
        guild.delete_command(http, command.id).await?;
        log::info!("Deleted command /{} in guild {guild}.", command.name);
    }

    Ok(())
}
