use chrono::FixedOffset;

use super::MAlarmConfig;

const BASE: &str = "setting_channel = 1\nalert_channel = 2\nguild = 3\n";

fn parse(extra: &str) -> MAlarmConfig {
    toml::from_str(&format!("{BASE}{extra}")).expect("valid alarm config")
}

#[test]
fn configured_offset_is_used() {
    let config = parse("utc_offset = \"+09:00\"\n");
    assert_eq!(config.offset(), FixedOffset::east_opt(9 * 3600).expect("valid offset"));

    let config = parse("utc_offset = -5\n");
    assert_eq!(config.offset(), FixedOffset::east_opt(-5 * 3600).expect("valid offset"));
}

#[test]
fn missing_offset_falls_back_to_host() {
    let config = parse("");
    assert_eq!(config.utc_offset, None);
    assert_eq!(config.offset(), *chrono::Local::now().offset());
}

#[test]
fn defaults() {
    let config = parse("extra_guilds = \"4, 5\"\n");
    assert!(config.post_panel, "panel is posted by default");
    assert_eq!(config.settings_path.to_str(), Some("user-settings.json"));
    assert_eq!(config.extra_guilds.len(), 2);
}
