use alarm_core::EventKind;

use super::notifier::{alarm_text, mentions};

#[test]
fn boundary_text() {
    assert_eq!(
        alarm_text(EventKind::Boundary, true),
        ("⏰ 5분 전 알림", "🛡️ 5분 후 결계가 시작됩니다!")
    );
    assert_eq!(
        alarm_text(EventKind::Boundary, false),
        ("🚨 정시 알림", "🛡️ 결계 시간입니다!")
    );
}

#[test]
fn field_boss_text() {
    assert_eq!(
        alarm_text(EventKind::FieldBoss, true),
        ("⏰ 5분 전 알림", "👹 5분 후 필드보스 등장!")
    );
    assert_eq!(
        alarm_text(EventKind::FieldBoss, false),
        ("🚨 정시 알림", "👹 필드보스 출현!")
    );
}

#[test]
fn mention_list() {
    let users = ["111".to_owned(), "222".to_owned(), "333".to_owned()];
    assert_eq!(mentions(&users), "<@111> <@222> <@333>");
    assert_eq!(mentions(&users[..1]), "<@111>");
    assert_eq!(mentions(&[]), "");
}
