use log4rs::config::Deserializers;

mod default_pattern;

/// Gets the log4rs deserializers, including the custom ones.
pub fn deserializers() -> Deserializers {
    let mut d = Deserializers::new();
    d.insert("default", default_pattern::DefaultPatternDeserializer);
    d
}
