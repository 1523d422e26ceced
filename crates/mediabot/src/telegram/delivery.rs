//! Confirmation buttons: send the stored file, or just keep it.

use std::path::Path;
use std::str::FromStr;

use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, InputFile};

use super::handlers::HandlerDeps;
use super::replies;
use mediacore::{ConfirmChoice, DeliveryPlan, MediaKind};

/// Sends `path` as an audio or video attachment.
async fn send_media(bot: &Bot, chat_id: ChatId, path: &Path, kind: MediaKind) -> ResponseResult<()> {
    let file = InputFile::file(path.to_path_buf());
    match kind {
        MediaKind::Audio => {
            bot.send_audio(chat_id, file).caption(replies::caption(kind)).await?;
        }
        MediaKind::Video => {
            bot.send_video(chat_id, file).caption(replies::caption(kind)).await?;
        }
    }
    Ok(())
}

/// Handles a press on one of the confirmation buttons.
///
/// The query is always answered first. Presses on messages the bot can no
/// longer see, or with unknown data, are dropped after that.
pub async fn handle_confirmation(bot: &Bot, q: &CallbackQuery, deps: &HandlerDeps) -> ResponseResult<()> {
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(message) = q.message.as_ref() else {
        return Ok(());
    };
    let chat_id = message.chat().id;
    let message_id = message.id();

    let Some(choice) = q.data.as_deref().and_then(|data| ConfirmChoice::from_str(data).ok()) else {
        log::warn!("Ignoring callback {:?} in chat {}", q.data, chat_id);
        return Ok(());
    };

    let plan = deps.conversations.update(chat_id.0, |c| c.confirm(choice));
    match plan {
        DeliveryPlan::Send { path, kind } => {
            log::info!("📤 Sending {} to chat {}: {}", kind, chat_id, path.display());
            let sent = send_media(bot, chat_id, &path, kind).await;
            deps.conversations.update(chat_id.0, |c| c.delivery_finished(sent.is_ok()));
            if let Err(e) = sent {
                let _ = bot.edit_message_text(chat_id, message_id, replies::SEND_FAILED).await;
                log::error!("❌ Failed to send {} to chat {}: {}", path.display(), chat_id, e);
                return Err(e);
            }
            bot.edit_message_text(chat_id, message_id, replies::sent(kind)).await?;
        }
        DeliveryPlan::SaveOnly { path } => {
            log::info!("💾 Chat {} kept {} on disk only", chat_id, path.display());
            bot.edit_message_text(chat_id, message_id, replies::SAVED_ONLY).await?;
        }
        DeliveryPlan::FileNotFound => {
            log::warn!("Chat {} confirmed {} but no stored file exists", chat_id, choice);
            bot.edit_message_text(chat_id, message_id, replies::FILE_NOT_FOUND).await?;
        }
    }

    Ok(())
}
