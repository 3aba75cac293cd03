use std::fmt;

use crate::preference::Preference;
use crate::slot::{is_afternoon_slot, is_late_night_slot, is_morning_slot};

/// The kind of game event an alarm is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A boundary event.
    Boundary,
    /// A field boss appearance.
    FieldBoss,
}

impl EventKind {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boundary => "boundary",
            Self::FieldBoss => "field",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decides whether a user with `preference` is mentioned for an alarm of
/// `kind` that fires during `hour`.
///
/// `hour` must be the local hour at the time the alarm fires, not the hour of
/// the event itself.
#[must_use]
pub fn should_notify(kind: EventKind, preference: &Preference, hour: u32) -> bool {
    use Preference as P;

    match (kind, preference) {
        (_, P::AllOn) => true,
        (EventKind::Boundary, P::BoundaryAll) => true,
        (EventKind::Boundary, P::BoundaryMorning) => is_morning_slot(hour),
        (EventKind::Boundary, P::BoundaryAfternoon) => is_afternoon_slot(hour),
        (EventKind::Boundary, P::BoundaryExceptLateNight) => !is_late_night_slot(hour),
        (EventKind::FieldBoss, P::FieldBossOnly) => true,
        _ => false,
    }
}
