use std::path::PathBuf;

use chrono::FixedOffset;
use serde::Deserialize;
use serenity::model::Colour;
use serenity::model::id::{ChannelId, GuildId};

mod guild_list;
mod offset;
pub mod setup;
mod token_parse;

#[cfg(test)]
mod tests;

#[derive(Debug, Deserialize)]
pub struct MConfig {
    pub discord: MDiscordConfig,
    pub alarm: MAlarmConfig,
    #[serde(default)]
    pub log: log4rs::config::RawConfig,
    #[serde(default = "default_true")]
    pub log_panic: bool,
}

#[derive(Debug, Deserialize)]
pub struct MDiscordConfig {
    #[serde(with = "token_parse")]
    pub token: String,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MAlarmConfig {
    /// Where the settings panel is posted.
    pub setting_channel: ChannelId,
    /// Where alarms are sent.
    pub alert_channel: ChannelId,
    /// The guild to register commands in.
    pub guild: GuildId,
    /// Guilds whose commands should be cleared on startup.
    #[serde(with = "guild_list", default)]
    pub extra_guilds: Vec<GuildId>,
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
    /// The offset alarm times are given in. Defaults to the host's offset at
    /// startup, which doesn't follow daylight saving changes, so setting this
    /// is recommended on such hosts.
    #[serde(with = "offset", default)]
    pub utc_offset: Option<FixedOffset>,
    #[serde(default = "default_true")]
    pub post_panel: bool,
    #[serde(default = "default_panel_color")]
    pub panel_color: Colour,
    #[serde(default = "default_boundary_color")]
    pub boundary_color: Colour,
    #[serde(default = "default_panel_color")]
    pub field_boss_color: Colour,
    #[serde(default)]
    pub thumbnails: MThumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub struct MThumbnails {
    pub panel: Option<String>,
    pub pre_notice: Option<String>,
    pub on_time: Option<String>,
}

impl MAlarmConfig {
    /// The configured UTC offset, or the host's current one.
    ///
    /// The host offset is read once, so alarms drift by an hour after a
    /// daylight saving change until restart. Set `alarm.utc_offset` to avoid
    /// that.
    pub fn offset(&self) -> FixedOffset {
        self.utc_offset
            .unwrap_or_else(|| *chrono::Local::now().offset())
    }
}

fn default_true() -> bool {
    true
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("user-settings.json")
}

const fn default_panel_color() -> Colour {
    Colour::new(0x93_D3_4A)
}

const fn default_boundary_color() -> Colour {
    Colour::new(0x00_BF_FF)
}
