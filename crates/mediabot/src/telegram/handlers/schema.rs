//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message};

use super::commands::handle_start_command;
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;
use crate::telegram::delivery::handle_confirmation;
use crate::telegram::downloads::handle_message;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// The same schema is used in production and in integration tests.
///
/// # Arguments
/// * `deps` - Handler dependencies (fetchers and session contexts)
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_messages = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        .branch(command_handler())
        // Plain text goes to the router; other commands are ignored
        .branch(message_handler(deps_messages))
        .branch(callback_handler(deps_callback))
}

fn command_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        |bot: Bot, msg: Message, cmd: Command| async move {
            log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

            match cmd {
                Command::Start | Command::Help => handle_start_command(&bot, &msg).await?,
            }
            Ok(())
        },
    ))
}

fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().is_some_and(|text| !text.starts_with('/')))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                handle_message(&bot, &msg, &deps).await?;
                Ok(())
            }
        })
}

fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            handle_confirmation(&bot, &q, &deps).await?;
            Ok(())
        }
    })
}
