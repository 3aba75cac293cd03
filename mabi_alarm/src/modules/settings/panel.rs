//! Text and layout of the settings panel and its replies.

use alarm_core::Preference;
use serenity::model::application::ButtonStyle;

pub const PANEL_TITLE: &str = "📢 야채가게 뿌대노기 알리미 설정";

pub const PANEL_DESCRIPTION: &str = "버튼을 눌러 알림을 설정하세요.\n\n\
    필드보스, 결계 알림을 각각 선택하거나,\n모든 알림 켜기·끄기로 편하게 관리할 수 있습니다.\n\n\
    **⏰ 필드보스/결계 시간 5분 전·정각에 알림을 보냅니다.**";

/// A button on the settings panel.
#[derive(Debug, Clone)]
pub struct PanelButton {
    pub preference: Preference,
    pub label: &'static str,
    pub style: ButtonStyle,
}

const fn button(preference: Preference, label: &'static str, style: ButtonStyle) -> PanelButton {
    PanelButton {
        preference,
        label,
        style,
    }
}

static BOUNDARY_ROW: [PanelButton; 4] = [
    button(Preference::BoundaryAll, "결계-모든시간", ButtonStyle::Primary),
    button(Preference::BoundaryMorning, "결계-오전", ButtonStyle::Primary),
    button(Preference::BoundaryAfternoon, "결계-오후", ButtonStyle::Primary),
    button(Preference::BoundaryExceptLateNight, "결계-심야제외", ButtonStyle::Primary),
];

static GENERAL_ROW: [PanelButton; 3] = [
    button(Preference::FieldBossOnly, "필드보스만 알림받기", ButtonStyle::Success),
    button(Preference::AllOn, "모든 알림 켜기", ButtonStyle::Success),
    button(Preference::AllOff, "모든 알림 끄기", ButtonStyle::Danger),
];

/// The panel buttons, row by row.
pub static ROWS: [&[PanelButton]; 2] = [&BOUNDARY_ROW, &GENERAL_ROW];

/// Gets the panel label for a preference.
pub fn label(preference: &Preference) -> Option<&'static str> {
    ROWS.iter()
        .flat_map(|row| row.iter())
        .find(|b| b.preference == *preference)
        .map(|b| b.label)
}

/// The title and description of the reply after a preference was saved.
pub fn confirmation(preference: &Preference) -> (&'static str, &'static str) {
    const DONE: &str = "✅ 알림 설정 완료";

    match preference {
        Preference::BoundaryAll => (DONE, "[결계-모든시간] 알림이 설정되었습니다."),
        Preference::BoundaryMorning => (DONE, "[결계-오전] 알림이 설정되었습니다."),
        Preference::BoundaryAfternoon => (DONE, "[결계-오후] 알림이 설정되었습니다."),
        Preference::BoundaryExceptLateNight => (DONE, "[결계-심야 제외] 알림이 설정되었습니다."),
        Preference::FieldBossOnly => (DONE, "[필드보스만 알림]이 설정되었습니다."),
        Preference::AllOn => (DONE, "모든 알림이 켜졌습니다."),
        Preference::AllOff => ("🛑 모든 알림 꺼짐", "모든 알림이 비활성화되었습니다."),
        Preference::Unrecognized(_) => UNKNOWN,
    }
}

/// The reply for buttons this bot doesn't know.
pub const UNKNOWN: (&str, &str) = ("⚠️ 알 수 없는 설정", "알 수 없는 버튼이 클릭되었습니다.");

/// The reply when the preference could not be saved.
pub const SAVE_FAILED: (&str, &str) = (
    "⚠️ 설정 저장 실패",
    "알림 설정을 저장하지 못했습니다. 잠시 후 다시 시도해 주세요.",
);
