use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::messages::{manual_keyword_set, HELP_TEXT};
use crate::notify::NotificationQueue;
use crate::session::SessionStore;

use super::notify::flush_notifications;

pub async fn help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, HELP_TEXT)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// Plain text becomes the manual keyword for the next batch.
pub async fn set_manual_keyword_from_text(
    bot: Bot,
    msg: Message,
    sessions: SessionStore,
) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let keyword = text.trim();
    if keyword.is_empty() || keyword.starts_with('/') {
        tracing::trace!(chat_id = msg.chat.id.0, "Ignoring text message");
        return Ok(());
    }

    sessions
        .with(msg.chat.id.0, |s| s.settings.set_manual_keyword(keyword))
        .await;
    tracing::debug!(chat_id = msg.chat.id.0, keyword, "Manual keyword set");

    let mut queue = NotificationQueue::new();
    queue.success(manual_keyword_set(keyword));
    flush_notifications(&bot, msg.chat.id, &mut queue).await
}
