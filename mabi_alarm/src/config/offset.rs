//! Reads a UTC offset either as whole hours (`9`, `-5`) or as text
//! (`"+09:00"`, `"-03:30"`, `"9"`).

use std::fmt;

use chrono::FixedOffset;
use serde::de::{Deserializer, Error, Visitor};

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OffsetVisitor;
    impl Visitor<'_> for OffsetVisitor {
        type Value = Option<FixedOffset>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("utc offset like `+09:00` or whole hours")
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            let offset = i32::try_from(v)
                .ok()
                .and_then(|h| h.checked_mul(3600))
                .and_then(FixedOffset::east_opt)
                .ok_or_else(|| E::custom(format_args!("utc offset of {v} hours is out of range")))?;

            Ok(Some(offset))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            let v = i64::try_from(v).map_err(|_| E::custom("utc offset is out of range"))?;
            self.visit_i64(v)
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            let v = v.trim();
            if v.is_empty() {
                return Ok(None);
            }

            parse_offset(v)
                .map(Some)
                .ok_or_else(|| E::custom(format_args!("invalid utc offset `{v}`")))
        }
    }

    deserializer.deserialize_any(OffsetVisitor)
}

/// Parses `[+-]HH[:MM]`. The sign may be omitted for positive offsets.
pub fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => (1, s),
    };

    fn part(s: &str, max: i32) -> Option<i32> {
        // `i32::from_str` would also accept a second sign
        if !(1..=2).contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        s.parse().ok().filter(|v| *v <= max)
    }

    let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
    let hours = part(hours, 23)?;
    let minutes = part(minutes, 59)?;

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::parse_offset;

    #[test]
    fn parses_offsets() {
        let hours = |h: i32| chrono::FixedOffset::east_opt(h * 3600);

        assert_eq!(parse_offset("+09:00"), hours(9));
        assert_eq!(parse_offset("9"), hours(9));
        assert_eq!(parse_offset("-05:00"), hours(-5));
        assert_eq!(
            parse_offset("+05:30"),
            chrono::FixedOffset::east_opt(5 * 3600 + 30 * 60)
        );
        assert_eq!(parse_offset("0"), hours(0));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "+", "KST", "+24:00", "+09:60", "9:ab", "++9"] {
            assert_eq!(parse_offset(bad), None, "`{bad}` should be rejected");
        }
    }
}
