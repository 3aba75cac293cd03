//! Hour-of-day classification for boundary alarms.
//!
//! Only the hour is considered. A pre-notice firing at `08:55` for a `09:00`
//! boundary is classified with hour `8`.

/// Hours in the morning slot.
pub const MORNING_HOURS: [u32; 4] = [0, 3, 6, 9];

/// Hours in the afternoon slot.
pub const AFTERNOON_HOURS: [u32; 4] = [12, 15, 18, 21];

/// Hours in the late-night slot.
pub const LATE_NIGHT_HOURS: [u32; 2] = [0, 3];

/// Whether `hour` is in the morning slot.
#[must_use]
pub fn is_morning_slot(hour: u32) -> bool {
    MORNING_HOURS.contains(&hour)
}

/// Whether `hour` is in the afternoon slot.
#[must_use]
pub fn is_afternoon_slot(hour: u32) -> bool {
    AFTERNOON_HOURS.contains(&hour)
}

/// Whether `hour` is in the late-night slot.
#[must_use]
pub fn is_late_night_slot(hour: u32) -> bool {
    LATE_NIGHT_HOURS.contains(&hour)
}
