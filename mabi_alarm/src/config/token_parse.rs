//! Validates the bot token on deserialization so a malformed one is reported
//! before the client tries to connect with it.

use std::fmt;

use serde::de::{Deserializer, Error, Visitor};

pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TokenVisitor;
    impl Visitor<'_> for TokenVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("expected discord token")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            let token = v.trim();
            serenity::utils::validate_token(token).map_err(E::custom)?;
            Ok(token.to_owned())
        }
    }

    deserializer.deserialize_str(TokenVisitor)
}
