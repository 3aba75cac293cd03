//! Defines a `"default"` [`PatternEncoder`].
//!
//! Saves repeating the pattern for every appender in the configuration.
//! Timestamps are local by default since alarm times are local too.

use log4rs::config::Deserialize;
use log4rs::encode::Encode;
use log4rs::encode::pattern::PatternEncoder;

fn default_time() -> bool {
    true
}

#[derive(Debug, serde::Deserialize)]
pub struct DefaultPatternConfig {
    #[serde(default = "default_time")]
    time: bool,
    #[serde(default)]
    utc: bool,
}

pub struct DefaultPatternDeserializer;

impl Deserialize for DefaultPatternDeserializer {
    type Trait = dyn Encode;
    type Config = DefaultPatternConfig;

    fn deserialize(
        &self,
        config: Self::Config,
        _deserializers: &log4rs::config::Deserializers,
    ) -> anyhow::Result<Box<Self::Trait>> {
        let pattern = match (config.time, config.utc) {
            (false, _) => "[{h({l:<5})} {t}] {m}{n}",
            (true, false) => "[{d(%Y-%m-%d %H:%M:%S)} {h({l:<5})} {t}] {m}{n}",
            (true, true) => "[{d(%Y-%m-%d %H:%M:%S)(utc)} {h({l:<5})} {t}] {m}{n}",
        };

        Ok(Box::new(PatternEncoder::new(pattern)))
    }
}
