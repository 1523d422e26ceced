//! Inbound links: route, fetch, then offer the file back.

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, Message};

use super::handlers::HandlerDeps;
use super::replies;
use mediacore::{classify, ConfirmChoice, MediaKind};

/// Two rows: send it here, or keep it on disk only.
pub fn confirmation_keyboard(kind: MediaKind) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            replies::send_button(kind),
            ConfirmChoice::send(kind).callback_data(),
        )],
        vec![InlineKeyboardButton::callback(
            replies::KEEP_ONLY_BUTTON,
            ConfirmChoice::DontSend.callback_data(),
        )],
    ])
}

/// Handles a text message that is not a command.
///
/// Recognized links get a progress note, a fetch, and either the
/// confirmation prompt or a failure reply. The chat's session is updated
/// around the fetch, never across an `.await`.
pub async fn handle_message(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let chat_id = msg.chat.id;

    let route = classify(text);
    let Some(request) = route.request(text) else {
        log::debug!("Unrecognized message in chat {}", chat_id);
        bot.send_message(chat_id, replies::UNRECOGNIZED).await?;
        return Ok(());
    };
    let kind = request.kind;

    log::info!("📨 Chat {} requested {} ({})", chat_id, route, request.source_url);
    // Nothing is recorded until the progress note is out, so a failed send
    // leaves the conversation untouched.
    bot.send_message(chat_id, replies::progress(kind)).await?;
    deps.conversations.update(chat_id.0, |c| c.begin_fetch(kind));

    match deps.fetchers.fetch(&request).await {
        Ok(result) => {
            deps.conversations.update(chat_id.0, |c| c.fetch_succeeded(kind, &result));
            bot.send_message(chat_id, replies::fetch_summary(kind, &result))
                .reply_markup(confirmation_keyboard(kind))
                .await?;
        }
        Err(_) => {
            // Already logged with its category by the fetch boundary
            deps.conversations.update(chat_id.0, |c| c.fetch_failed());
            bot.send_message(chat_id, replies::fetch_failed(kind)).await?;
        }
    }

    Ok(())
}
