use std::fmt;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};

/// A user's choice of which alarms to receive.
///
/// Every known variant has a stable wire name that is used both as the button
/// custom ID and as the value persisted in the preference store. Values read
/// from storage that don't match any of them are kept as
/// [`Preference::Unrecognized`] and never produce notifications.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Preference {
    /// Boundary alarms at every time.
    BoundaryAll,
    /// Boundary alarms in the morning slot only.
    BoundaryMorning,
    /// Boundary alarms in the afternoon slot only.
    BoundaryAfternoon,
    /// Boundary alarms, except in the late-night slot.
    BoundaryExceptLateNight,
    /// Field boss alarms only.
    FieldBossOnly,
    /// Every alarm.
    AllOn,
    /// No alarms.
    AllOff,
    /// A stored value outside the known set. Non-string values hold their JSON text.
    Unrecognized(Box<str>),
}

impl Preference {
    /// All known preferences, in the order they are offered to users.
    pub const KNOWN: [Self; 7] = [
        Self::BoundaryAll,
        Self::BoundaryMorning,
        Self::BoundaryAfternoon,
        Self::BoundaryExceptLateNight,
        Self::FieldBossOnly,
        Self::AllOn,
        Self::AllOff,
    ];

    /// Parses a known preference from its wire name.
    ///
    /// Returns [`None`] for anything else. Use [`Preference::from_wire`] if
    /// unknown values should be retained instead.
    #[must_use]
    pub fn from_known(s: &str) -> Option<Self> {
        Some(match s {
            "alert_all" => Self::BoundaryAll,
            "alert_morning" => Self::BoundaryMorning,
            "alert_afternoon" => Self::BoundaryAfternoon,
            "alert_no_late" => Self::BoundaryExceptLateNight,
            "only_fieldboss" => Self::FieldBossOnly,
            "alert_all_on" => Self::AllOn,
            "alert_all_off" => Self::AllOff,
            _ => return None,
        })
    }

    /// Parses a preference from its wire name, keeping unknown values.
    #[must_use]
    pub fn from_wire(s: &str) -> Self {
        Self::from_known(s).unwrap_or_else(|| Self::Unrecognized(s.into()))
    }

    /// Gets the wire name of this preference.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::BoundaryAll => "alert_all",
            Self::BoundaryMorning => "alert_morning",
            Self::BoundaryAfternoon => "alert_afternoon",
            Self::BoundaryExceptLateNight => "alert_no_late",
            Self::FieldBossOnly => "only_fieldboss",
            Self::AllOn => "alert_all_on",
            Self::AllOff => "alert_all_off",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Whether this is one of the known preferences.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Preference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Preference {
    /// Reads a preference from any value.
    ///
    /// Strings are parsed by [`Preference::from_wire`]. Any other value, such
    /// as `null`, a number or an object, becomes [`Preference::Unrecognized`]
    /// holding its JSON text, so one bad entry doesn't spoil the mapping.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Self::from_wire(&s),
            other => Self::Unrecognized(other.to_string().into()),
        })
    }
}
