use std::fmt::Write as _;

use alarm_core::{EventSchedule, Preference, TimeOfDay};

use crate::modules::settings::panel;
use crate::prelude::*;

/// Explains the alarm buttons and event times.
#[poise::command(slash_command, guild_only)]
pub async fn help(ctx: MContext<'_>) -> Result {
    let embed = CreateEmbed::new()
        .title("📖 알리미 사용법")
        .description(help_text(&EventSchedule::default()))
        .color(ctx.data().config().panel_color);

    let reply = poise::CreateReply::default().embed(embed).ephemeral(true);
    ctx.send(reply).await?;
    Ok(())
}

/// What a preference does, as shown in `/help`.
fn meaning(preference: &Preference) -> &'static str {
    match preference {
        Preference::BoundaryAll => "결계 알림을 모든 시간에 받습니다.",
        Preference::BoundaryMorning => "오전(00·03·06·09시) 결계 알림만 받습니다.",
        Preference::BoundaryAfternoon => "오후(12·15·18·21시) 결계 알림만 받습니다.",
        Preference::BoundaryExceptLateNight => "심야(00·03시)를 제외한 결계 알림을 받습니다.",
        Preference::FieldBossOnly => "필드보스 알림만 받습니다.",
        Preference::AllOn => "결계와 필드보스 알림을 모두 받습니다.",
        Preference::AllOff => "모든 알림을 받지 않습니다.",
        Preference::Unrecognized(_) => "알 수 없는 설정입니다.",
    }
}

fn time_list(times: &[TimeOfDay]) -> String {
    let mut list = String::new();
    for time in times {
        if !list.is_empty() {
            list.push_str(", ");
        }

        _ = write!(list, "{time}");
    }

    list
}

pub(super) fn help_text(schedule: &EventSchedule) -> String {
    let mut text = String::from("**버튼 안내**\n");
    for button in panel::ROWS.iter().flat_map(|row| row.iter()) {
        _ = writeln!(text, "- **{}**: {}", button.label, meaning(&button.preference));
    }

    _ = writeln!(text, "\n**🛡️ 결계 시간**\n{}", time_list(schedule.boundary()));
    _ = writeln!(text, "\n**👹 필드보스 시간**\n{}", time_list(schedule.field_boss()));
    _ = write!(text, "\n각 시간 5분 전과 정각에 알림을 보냅니다.");
    text
}
