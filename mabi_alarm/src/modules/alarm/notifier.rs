use alarm_core::{EventKind, NotificationEvent, Notifier};
use serenity::http::Http;

use crate::config::MThumbnails;
use crate::prelude::*;

/// Posts alarms into a channel, mentioning every recipient.
pub struct DiscordNotifier {
    http: Arc<Http>,
    channel: ChannelId,
    boundary_color: Colour,
    field_boss_color: Colour,
    pre_notice_thumbnail: Option<String>,
    on_time_thumbnail: Option<String>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>, config: &config::MAlarmConfig) -> Self {
        let MThumbnails {
            pre_notice,
            on_time,
            ..
        } = &config.thumbnails;

        Self {
            http,
            channel: config.alert_channel,
            boundary_color: config.boundary_color,
            field_boss_color: config.field_boss_color,
            pre_notice_thumbnail: pre_notice.clone(),
            on_time_thumbnail: on_time.clone(),
        }
    }

    fn message(&self, event: &NotificationEvent) -> CreateMessage {
        let (title, description) = alarm_text(event.kind, event.pre_notice);
        let color = match event.kind {
            EventKind::Boundary => self.boundary_color,
            EventKind::FieldBoss => self.field_boss_color,
        };

        let thumbnail = if event.pre_notice {
            &self.pre_notice_thumbnail
        } else {
            &self.on_time_thumbnail
        };

        let mut embed = CreateEmbed::new()
            .title(title)
            .description(description)
            .color(color)
            .timestamp(Timestamp::now());

        if let Some(url) = thumbnail {
            embed = embed.thumbnail(url);
        }

        CreateMessage::new()
            .content(mentions(&event.recipients))
            .embed(embed)
    }
}

impl Notifier for DiscordNotifier {
    async fn notify(&self, event: &NotificationEvent) -> Result {
        self.channel
            .send_message(&*self.http, self.message(event))
            .await
            .with_context(|| format!("cannot send alarm to {}", self.channel))?;

        Ok(())
    }
}

/// The embed title and description for an alarm.
pub fn alarm_text(kind: EventKind, pre_notice: bool) -> (&'static str, &'static str) {
    let title = if pre_notice { "⏰ 5분 전 알림" } else { "🚨 정시 알림" };
    let description = match (kind, pre_notice) {
        (EventKind::Boundary, true) => "🛡️ 5분 후 결계가 시작됩니다!",
        (EventKind::Boundary, false) => "🛡️ 결계 시간입니다!",
        (EventKind::FieldBoss, true) => "👹 5분 후 필드보스 등장!",
        (EventKind::FieldBoss, false) => "👹 필드보스 출현!",
    };

    (title, description)
}

/// Joins user IDs into mentions separated by single spaces.
pub fn mentions(recipients: &[String]) -> String {
    let mut content = String::new();
    for user in recipients {
        if !content.is_empty() {
            content.push(' ');
        }

        content.push_str("<@");
        content.push_str(user);
        content.push('>');
    }

    content
}
