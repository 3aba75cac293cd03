use crate::slot::*;
use crate::*;

const EVERY_HOUR: std::ops::Range<u32> = 0..24;

fn time(s: &str) -> TimeOfDay {
    s.parse().expect("test time should be valid")
}

#[test]
fn slots_are_disjoint_and_sized() {
    let morning = EVERY_HOUR.filter(|&h| is_morning_slot(h)).count();
    let afternoon = EVERY_HOUR.filter(|&h| is_afternoon_slot(h)).count();

    assert_eq!(morning, 4, "morning slot should have 4 hours");
    assert_eq!(afternoon, 4, "afternoon slot should have 4 hours");

    for h in EVERY_HOUR {
        assert!(
            !(is_morning_slot(h) && is_afternoon_slot(h)),
            "hour {h} is in both morning and afternoon"
        );
    }
}

#[test]
fn late_night_is_early_morning() {
    for h in EVERY_HOUR {
        if is_late_night_slot(h) {
            assert!(is_morning_slot(h), "late-night hour {h} should be morning");
        }
    }

    assert!(is_late_night_slot(0), "0 should be late night");
    assert!(is_late_night_slot(3), "3 should be late night");
    assert!(!is_late_night_slot(23), "23 should not be late night");
}

#[test]
fn field_boss_only_for_all_on_and_field_boss() {
    for pref in Preference::KNOWN {
        let expected = matches!(pref, Preference::AllOn | Preference::FieldBossOnly);
        for h in EVERY_HOUR {
            assert_eq!(
                should_notify(EventKind::FieldBoss, &pref, h),
                expected,
                "field boss, {pref} at hour {h}"
            );
        }
    }
}

#[test]
fn boundary_decision_table() {
    use EventKind::Boundary;

    for h in EVERY_HOUR {
        assert!(should_notify(Boundary, &Preference::AllOn, h), "all on at {h}");
        assert!(should_notify(Boundary, &Preference::BoundaryAll, h), "all at {h}");
        assert!(!should_notify(Boundary, &Preference::FieldBossOnly, h), "field only at {h}");
        assert!(!should_notify(Boundary, &Preference::AllOff, h), "all off at {h}");
    }

    assert!(should_notify(Boundary, &Preference::BoundaryMorning, 6), "morning at 6");
    assert!(!should_notify(Boundary, &Preference::BoundaryMorning, 12), "morning at 12");
    assert!(should_notify(Boundary, &Preference::BoundaryAfternoon, 21), "afternoon at 21");
    assert!(!should_notify(Boundary, &Preference::BoundaryAfternoon, 9), "afternoon at 9");

    // pre-notices fire in the hour before the event
    assert!(!should_notify(Boundary, &Preference::BoundaryMorning, 8), "morning at 8");
    assert!(should_notify(Boundary, &Preference::BoundaryAfternoon, 12), "afternoon at 12");
}

#[test]
fn except_late_night_excludes_midnight() {
    let pref = Preference::BoundaryExceptLateNight;
    assert!(!should_notify(EventKind::Boundary, &pref, 0), "hour 0");
    assert!(!should_notify(EventKind::Boundary, &pref, 3), "hour 3");
    assert!(should_notify(EventKind::Boundary, &pref, 23), "hour 23");
    assert!(should_notify(EventKind::Boundary, &pref, 6), "hour 6");
}

#[test]
fn unrecognized_never_notifies() {
    let pref = Preference::from_wire("alert_everything");
    assert_eq!(pref, Preference::Unrecognized("alert_everything".into()));

    for h in EVERY_HOUR {
        assert!(!should_notify(EventKind::Boundary, &pref, h), "boundary at {h}");
        assert!(!should_notify(EventKind::FieldBoss, &pref, h), "field boss at {h}");
    }
}

#[test]
fn preference_wire_names() {
    for pref in Preference::KNOWN {
        assert_eq!(Preference::from_known(pref.as_str()), Some(pref.clone()));
        assert!(pref.is_known(), "{pref:?} should be known");
    }

    assert_eq!(Preference::from_known("nope"), None);
    assert_eq!(Preference::AllOff.as_str(), "alert_all_off");
    assert_eq!(Preference::BoundaryExceptLateNight.as_str(), "alert_no_late");
}

#[test]
fn preference_json_keeps_unknown_text() {
    let json = r#"{"1":"alert_all_on","2":"legacy_value"}"#;
    let prefs: Preferences = serde_json::from_str(json).expect("should parse");

    assert_eq!(prefs.get("1"), Some(&Preference::AllOn));
    assert_eq!(prefs.get("2"), Some(&Preference::Unrecognized("legacy_value".into())));

    let back = serde_json::to_string(&prefs).expect("should serialize");
    assert_eq!(back, json);
}

#[test]
fn preference_json_non_string_values() {
    let json = r#"{"u1":"alert_all_on","u2":5,"u3":null,"u4":{"a":1},"u5":["x"]}"#;
    let prefs: Preferences = serde_json::from_str(json).expect("mixed values should parse");

    assert_eq!(prefs.len(), 5);
    assert_eq!(prefs.get("u1"), Some(&Preference::AllOn));
    assert_eq!(prefs.get("u2"), Some(&Preference::Unrecognized("5".into())));
    assert_eq!(prefs.get("u3"), Some(&Preference::Unrecognized("null".into())));
    assert_eq!(prefs.get("u4"), Some(&Preference::Unrecognized(r#"{"a":1}"#.into())));
    assert_eq!(prefs.get("u5"), Some(&Preference::Unrecognized(r#"["x"]"#.into())));

    for hour in EVERY_HOUR {
        assert_eq!(
            collect_recipients(EventKind::FieldBoss, &prefs, hour),
            ["u1"],
            "only the valid entry is eligible at hour {hour}"
        );
    }
}

#[test]
fn parse_time_of_day() {
    assert_eq!(time("00:00"), TimeOfDay::new(0, 0).expect("valid"));
    assert_eq!(time("9:05"), TimeOfDay::new(9, 5).expect("valid"));
    assert_eq!(time("23:59").to_string(), "23:59");

    for bad in ["24:00", "12:60", "12", "", "ab:cd", "+1:00", "12:000", "1:2:3"] {
        assert!(bad.parse::<TimeOfDay>().is_err(), "`{bad}` should not parse");
    }
}

#[test]
fn pre_notice_wraps() {
    assert_eq!(time("00:00").pre_notice(), time("23:55"));
    assert_eq!(time("09:00").pre_notice(), time("08:55"));
    assert_eq!(time("09:30").pre_notice(), time("09:25"));
    assert_eq!(time("12:04").pre_notice(), time("11:59"));
    assert_eq!(time("12:05").pre_notice(), time("12:00"));
}

#[test]
fn trigger_cron_expr() {
    let [on_time, pre] = Trigger::for_event(EventKind::Boundary, time("00:00"));

    assert!(!on_time.pre_notice, "first trigger is on time");
    assert_eq!(on_time.cron_expr(), "0 0 0 * * *");
    assert!(pre.pre_notice, "second trigger is the pre-notice");
    assert_eq!(pre.cron_expr(), "0 55 23 * * *");
    assert_eq!(pre.event_time, time("00:00"));
}

#[test]
fn default_schedule_triggers() {
    let schedule = EventSchedule::default();
    assert_eq!(schedule.boundary().len(), 8);
    assert_eq!(schedule.field_boss().len(), 4);

    let triggers: Vec<_> = schedule.triggers().collect();
    assert_eq!(triggers.len(), 24, "two triggers per table entry");

    for pair in triggers.chunks_exact(2) {
        let [on_time, pre] = pair else {
            unreachable!("chunks_exact(2)");
        };

        assert_eq!(on_time.event_time, pre.event_time);
        assert_eq!(on_time.kind, pre.kind);
        assert_ne!(on_time.fires_at, pre.fires_at, "triggers of {on_time} collide");
    }

    let field_boss = triggers
        .iter()
        .filter(|t| t.kind == EventKind::FieldBoss)
        .count();
    assert_eq!(field_boss, 8);
}

#[test]
fn memory_store_set_is_idempotent() {
    let store = MemoryStore::default();
    store.set("u1", Preference::AllOn).expect("memory store");
    let once = store.get().expect("memory store");

    store.set("u1", Preference::AllOn).expect("memory store");
    let twice = store.get().expect("memory store");

    assert_eq!(once, twice);
    assert_eq!(twice.len(), 1);
}

#[test]
fn memory_store_snapshot_is_stable() {
    let store: MemoryStore = [("u1", Preference::AllOn)].into_iter().collect();
    let before = store.get().expect("memory store");

    store.set("u1", Preference::AllOff).expect("memory store");
    store.set("u2", Preference::BoundaryAll).expect("memory store");

    assert_eq!(before.get("u1"), Some(&Preference::AllOn));
    assert_eq!(before.len(), 1, "old snapshot must not see new writes");

    let after = store.get().expect("memory store");
    assert_eq!(after.get("u1"), Some(&Preference::AllOff));
    assert_eq!(after.len(), 2);
}

#[test]
fn memory_store_concurrent_sets_are_kept() {
    let store = MemoryStore::default();

    std::thread::scope(|s| {
        for i in 0..16 {
            let store = &store;
            s.spawn(move || {
                for j in 0..25 {
                    store.set(&format!("u{i}-{j}"), Preference::AllOn).expect("memory store");
                }
            });
        }
    });

    let prefs = store.get().expect("memory store");
    assert_eq!(prefs.len(), 16 * 25, "no update may be lost");
}

#[test]
fn memory_store_reads_during_writes_are_whole() {
    let store = MemoryStore::default();

    std::thread::scope(|s| {
        s.spawn(|| {
            for i in 0..500 {
                store.set(&format!("u{i}"), Preference::AllOn).expect("memory store");
            }
        });

        let mut last = 0;
        for _ in 0..500 {
            let prefs = store.get().expect("memory store");
            assert!(prefs.len() >= last, "snapshots must never shrink");
            assert!(
                prefs.values().all(|p| *p == Preference::AllOn),
                "snapshot holds only written values"
            );
            last = prefs.len();
        }
    });
}

#[test]
fn recipients_keep_store_order() {
    let store: MemoryStore = [
        ("c", Preference::AllOn),
        ("a", Preference::BoundaryAll),
        ("b", Preference::FieldBossOnly),
    ]
    .into_iter()
    .collect();

    let prefs = store.get().expect("memory store");
    assert_eq!(collect_recipients(EventKind::Boundary, &prefs, 15), ["c", "a"]);
    assert_eq!(collect_recipients(EventKind::FieldBoss, &prefs, 15), ["c", "b"]);
}
