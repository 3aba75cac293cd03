//! Reads a list of guild IDs either as a sequence or as a comma separated
//! string, which is how it arrives from environment variables.

use std::fmt;
use std::num::NonZero;

use serde::de::{Deserializer, Error, SeqAccess, Visitor};
use serenity::model::id::GuildId;

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<GuildId>, D::Error>
where
    D: Deserializer<'de>,
{
    struct GuildListVisitor;
    impl<'de> Visitor<'de> for GuildListVisitor {
        type Value = Vec<GuildId>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("list of guild ids")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            parse_list(v).map_err(|part| E::custom(format_args!("invalid guild id `{part}`")))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut guilds = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(guild) = seq.next_element()? {
                guilds.push(guild);
            }

            Ok(guilds)
        }
    }

    deserializer.deserialize_any(GuildListVisitor)
}

/// Parses comma separated IDs, skipping empty entries.
///
/// On failure, returns the offending entry.
pub fn parse_list(s: &str) -> Result<Vec<GuildId>, &str> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<NonZero<u64>>()
                .map(GuildId::from)
                .map_err(|_| part)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_list() {
        let list = parse_list(" 123, 456 ,,789,").expect("valid list");
        assert_eq!(
            list,
            [GuildId::new(123), GuildId::new(456), GuildId::new(789)]
        );
    }

    #[test]
    fn empty_list() {
        assert_eq!(parse_list(""), Ok(Vec::new()));
        assert_eq!(parse_list(" , "), Ok(Vec::new()));
    }

    #[test]
    fn rejects_bad_ids() {
        assert_eq!(parse_list("123,abc"), Err("abc"));
        assert_eq!(parse_list("0"), Err("0"));
    }
}
