//! Command handler implementations (/start, /help)

use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::HandlerError;
use crate::telegram::replies;

/// Handle /start and /help: both answer with the static welcome text.
pub async fn handle_start_command(bot: &Bot, msg: &Message) -> Result<(), HandlerError> {
    bot.send_message(msg.chat.id, replies::WELCOME).await?;
    Ok(())
}
