use serenity::client::{Context, FullEvent};

use crate::config::MAlarmConfig;
use crate::prelude::*;

pub mod alarm;
pub mod commands;
pub mod settings;

mod prelude {
    pub use serenity::client::{Context, FullEvent};
    pub use serenity::prelude::*;

    pub use super::Module as _;
    pub use crate::config::MAlarmConfig;
    pub use crate::prelude::*;
}

/// Run an expression against every module.
///
/// Syntax is:
///
/// ```ignore
/// for_each_module!(|m| do_stuff(m));
/// ```
macro_rules! for_each_module {
    (@inner $module:expr, |$var:ident| $body:expr) => {{
        let $var = $module;
        $body
    }};
    (|$var:ident| $body:expr) => {{
        $crate::modules::for_each_module!(@inner $crate::modules::commands::Module, |$var| $body);
        $crate::modules::for_each_module!(@inner $crate::modules::settings::Module, |$var| $body);
        $crate::modules::for_each_module!(@inner $crate::modules::alarm::Module, |$var| $body);
    }};
}

pub(crate) use for_each_module;

pub trait Module: Sized {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// The intents needed.
    fn intents(&self) -> GatewayIntents {
        GatewayIntents::empty()
    }

    /// Commands for this module.
    fn commands(&self) -> impl IntoIterator<Item = MCommand> {
        []
    }

    /// Validates that the config is good.
    fn validate(&self, config: &MAlarmConfig) -> Result {
        _ = config;
        Ok(())
    }

    /// Runs once when the bot first connects.
    async fn ready(self, ready: &MReady<'_>) -> Result {
        _ = ready;
        Ok(())
    }

    /// Handles a gateway event.
    async fn event(&self, ctx: &Context, event: &FullEvent, data: &MBotData) -> Result {
        _ = (ctx, event, data);
        Ok(())
    }
}

/// Forwards gateway events to every module.
pub async fn dispatch_event(
    ctx: &Context,
    event: &FullEvent,
    _framework: poise::FrameworkContext<'_, MFrameworkData, MError>,
    data: &MFrameworkData,
) -> Result {
    for_each_module!(|m| {
        let name = m.name();
        if let Err(why) = m.event(ctx, event, data).await {
            log::error!("Event handling in `{name}` failed: {why:?}");
        }
    });

    Ok(())
}
