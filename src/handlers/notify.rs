use anyhow::Result;
use teloxide::prelude::*;

use crate::notify::NotificationQueue;

/// Sends every queued notification to the chat, oldest first.
pub async fn flush_notifications(
    bot: &Bot,
    chat_id: ChatId,
    queue: &mut NotificationQueue,
) -> Result<()> {
    for note in queue.drain() {
        tracing::trace!(chat_id = chat_id.0, kind = ?note.kind, "Sending notification");
        bot.send_message(chat_id, note.render()).await?;
    }
    Ok(())
}
