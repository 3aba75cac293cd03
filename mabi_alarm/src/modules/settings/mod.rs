use alarm_core::{Preference, PreferenceStore};
use serenity::model::application::{ComponentInteraction, Interaction};

use super::prelude::*;

pub mod panel;


pub struct Module;

impl super::Module for Module {
    fn name(&self) -> &'static str {
        "settings"
    }

    fn intents(&self) -> GatewayIntents {
        GatewayIntents::GUILDS
    }

    async fn ready(self, ready: &MReady<'_>) -> Result {
        let config = ready.data.config();
        if !config.post_panel {
            log::info!("Not posting the settings panel.");
            return Ok(());
        }

        config
            .setting_channel
            .send_message(&ready.ctx.http, panel_message(config))
            .await
            .context("cannot post settings panel")?;

        log::info!("Posted settings panel to {}.", config.setting_channel);
        Ok(())
    }

    async fn event(&self, ctx: &Context, event: &FullEvent, data: &MBotData) -> Result {
        if let FullEvent::InteractionCreate {
            interaction: Interaction::Component(interaction),
        } = event
        {
            button_click(ctx, interaction, data).await?;
        }

        Ok(())
    }
}

fn panel_message(config: &MAlarmConfig) -> CreateMessage {
    let mut embed = CreateEmbed::new()
        .title(panel::PANEL_TITLE)
        .description(panel::PANEL_DESCRIPTION)
        .color(config.panel_color);

    if let Some(url) = &config.thumbnails.panel {
        embed = embed.thumbnail(url);
    }

    let rows = panel::ROWS
        .iter()
        .map(|row| {
            let buttons = row
                .iter()
                .map(|b| {
                    CreateButton::new(b.preference.as_str())
                        .label(b.label)
                        .style(b.style)
                })
                .collect();

            CreateActionRow::Buttons(buttons)
        })
        .collect();

    CreateMessage::new().embed(embed).components(rows)
}

async fn button_click(ctx: &Context, interaction: &ComponentInteraction, data: &MBotData) -> Result {
    let user = interaction.user.id.to_string();

    let Some(preference) = Preference::from_known(&interaction.data.custom_id) else {
        log::warn!("Unknown button `{}` clicked by {user}.", interaction.data.custom_id);
        let (title, description) = panel::UNKNOWN;
        let embed = reply_embed(title, description, ERROR_EMBED_COLOR);
        return reply(ctx, interaction, embed).await;
    };

    let saved = save(Arc::clone(data.store()), user.clone(), preference.clone()).await;

    let embed = match saved {
        Ok(()) => {
            let label = panel::label(&preference).unwrap_or(preference.as_str());
            log::info!("User {user} chose [{label}].");
            let (title, description) = panel::confirmation(&preference);
            reply_embed(title, description, data.config().panel_color)
        },
        Err(why) => {
            log::error!("Failed to save preference {preference} for {user}: {why:?}");
            let (title, description) = panel::SAVE_FAILED;
            reply_embed(title, description, ERROR_EMBED_COLOR)
        },
    };

    reply(ctx, interaction, embed).await
}

/// Writes a preference off the async runtime.
///
/// A write task that panics counts as a failed write.
async fn save<S>(store: Arc<S>, user: String, preference: Preference) -> Result
where
    S: PreferenceStore + 'static,
{
    tokio::task::spawn_blocking(move || store.set(&user, preference))
        .await
        .context("preference write task panicked")?
        .context("cannot save preference")
}

fn reply_embed(title: &str, description: &str, color: Colour) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(color)
        .timestamp(Timestamp::now())
}

async fn reply(ctx: &Context, interaction: &ComponentInteraction, embed: CreateEmbed) -> Result {
    let response = CreateInteractionResponseMessage::new()
        .embed(embed)
        .ephemeral(true);

    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await
        .context("cannot reply to button click")?;

    Ok(())
}
