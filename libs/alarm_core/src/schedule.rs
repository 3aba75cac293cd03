use std::fmt;
use std::str::FromStr;

use crate::eligibility::EventKind;

/// How many minutes before an event the pre-notice fires.
pub const PRE_NOTICE_MINUTES: u32 = 5;

const BOUNDARY_TIMES: [TimeOfDay; 8] = [
    TimeOfDay::at(0, 0),
    TimeOfDay::at(3, 0),
    TimeOfDay::at(6, 0),
    TimeOfDay::at(9, 0),
    TimeOfDay::at(12, 0),
    TimeOfDay::at(15, 0),
    TimeOfDay::at(18, 0),
    TimeOfDay::at(21, 0),
];

const FIELD_BOSS_TIMES: [TimeOfDay; 4] = [
    TimeOfDay::at(12, 0),
    TimeOfDay::at(18, 0),
    TimeOfDay::at(20, 0),
    TimeOfDay::at(22, 0),
];

/// A wall-clock time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

/// Error returned when parsing a [`TimeOfDay`] from `HH:MM` fails.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid time of day `{input}`, expected `HH:MM` in 24h format")]
pub struct ParseTimeError {
    input: Box<str>,
}

impl TimeOfDay {
    /// Creates a new time, returning [`None`] if it is out of range.
    #[must_use]
    pub const fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    const fn at(hour: u32, minute: u32) -> Self {
        match Self::new(hour, minute) {
            Some(t) => t,
            None => panic!("time of day out of range"),
        }
    }

    /// The hour, `0..24`.
    #[must_use]
    pub const fn hour(self) -> u32 {
        self.hour
    }

    /// The minute, `0..60`.
    #[must_use]
    pub const fn minute(self) -> u32 {
        self.minute
    }

    /// The time [`PRE_NOTICE_MINUTES`] earlier, wrapping across the hour and
    /// the day.
    #[must_use]
    pub const fn pre_notice(self) -> Self {
        let (hour, minute) = if self.minute < PRE_NOTICE_MINUTES {
            ((self.hour + 23) % 24, self.minute + 60 - PRE_NOTICE_MINUTES)
        } else {
            (self.hour, self.minute - PRE_NOTICE_MINUTES)
        };

        Self { hour, minute }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn part(s: &str) -> Option<u32> {
            // `u32::from_str` would also accept a leading `+`
            if (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit()) {
                s.parse().ok()
            } else {
                None
            }
        }

        s.split_once(':')
            .and_then(|(h, m)| Self::new(part(h)?, part(m)?))
            .ok_or_else(|| ParseTimeError { input: s.into() })
    }
}

/// A daily firing derived from one event table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    /// The kind of event.
    pub kind: EventKind,
    /// The time the event itself starts.
    pub event_time: TimeOfDay,
    /// The time this trigger fires.
    pub fires_at: TimeOfDay,
    /// Whether this is the advance notice rather than the on-time one.
    pub pre_notice: bool,
}

impl Trigger {
    /// Derives both triggers for an event: the on-time one and the pre-notice.
    #[must_use]
    pub const fn for_event(kind: EventKind, event_time: TimeOfDay) -> [Self; 2] {
        [
            Self {
                kind,
                event_time,
                fires_at: event_time,
                pre_notice: false,
            },
            Self {
                kind,
                event_time,
                fires_at: event_time.pre_notice(),
                pre_notice: true,
            },
        ]
    }

    /// Gets a 6-field cron expression (`sec min hour dom month dow`) that
    /// fires daily at [`Self::fires_at`].
    #[must_use]
    pub fn cron_expr(&self) -> String {
        format!("0 {} {} * * *", self.fires_at.minute, self.fires_at.hour)
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.pre_notice { "pre-notice" } else { "on time" };
        write!(f, "{} {} ({label} at {})", self.kind, self.event_time, self.fires_at)
    }
}

/// The fixed tables of event times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSchedule {
    boundary: Vec<TimeOfDay>,
    field_boss: Vec<TimeOfDay>,
}

impl Default for EventSchedule {
    fn default() -> Self {
        Self::new(BOUNDARY_TIMES.to_vec(), FIELD_BOSS_TIMES.to_vec())
    }
}

impl EventSchedule {
    /// Creates a schedule from explicit tables.
    #[must_use]
    pub fn new(boundary: Vec<TimeOfDay>, field_boss: Vec<TimeOfDay>) -> Self {
        Self {
            boundary,
            field_boss,
        }
    }

    /// The boundary event times.
    #[must_use]
    pub fn boundary(&self) -> &[TimeOfDay] {
        &self.boundary
    }

    /// The field boss event times.
    #[must_use]
    pub fn field_boss(&self) -> &[TimeOfDay] {
        &self.field_boss
    }

    /// Iterates all triggers, two per table entry.
    pub fn triggers(&self) -> impl Iterator<Item = Trigger> + '_ {
        let boundary = self.boundary.iter().map(|&t| (EventKind::Boundary, t));
        let field_boss = self.field_boss.iter().map(|&t| (EventKind::FieldBoss, t));

        boundary
            .chain(field_boss)
            .flat_map(|(kind, time)| Trigger::for_event(kind, time))
    }
}
