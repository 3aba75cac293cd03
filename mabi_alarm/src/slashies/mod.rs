use crate::prelude::*;

/// Pre-command execution hook.
pub async fn pre_command(ctx: MContext<'_>) {
    log::info!("{}: /{}", ctx.author().name, ctx.command().qualified_name);
}

/// Command execution error handler.
#[cold]
pub async fn error_handler(error: poise::FrameworkError<'_, MFrameworkData, MError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => command_error(ctx, &error).await,
        poise::FrameworkError::GuildOnly { ctx, .. } => {
            context_error(ctx, "이 명령어는 서버에서만 사용할 수 있습니다.".to_owned()).await;
        },
        error => {
            if let Err(why) = poise::builtins::on_error(error).await {
                log::error!("Error in error handler: {why:?}");
            }
        },
    }

    async fn command_error(ctx: MContext<'_>, err: &MError) {
        if let Some(ser_err) = err.downcast_ref::<serenity::Error>() {
            // print both errors to preserve the stack trace, if present
            log::warn!("Discord error in command: {ser_err:?} / {err:?}");
        } else {
            log::error!("Error in command: {err:?}");
        }

        context_error(ctx, format!("Internal error: ```{err}```")).await;
    }

    async fn context_error(ctx: MContext<'_>, feedback: String) {
        let embed = CreateEmbed::new()
            .description(feedback)
            .color(ERROR_EMBED_COLOR);

        let reply = poise::CreateReply::default().embed(embed).ephemeral(true);
        if let Err(err) = ctx.send(reply).await {
            log::error!("Error in error handler: {err:?}");
        }
    }
}
