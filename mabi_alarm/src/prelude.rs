pub use std::sync::Arc;

pub use anyhow::Context as _;
pub use serenity::builder::*;
pub use serenity::model::prelude::*;

pub(crate) use crate::config;
pub use crate::data::*;
