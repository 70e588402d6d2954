use anyhow::Result;
use chrono::Utc;
use teloxide::prelude::*;
use teloxide::types::InputFile;

use crate::export::{render, ExportFormat};
use crate::messages::{exported, unknown_export_format, NO_BATCH};
use crate::notify::NotificationQueue;
use crate::session::SessionStore;

use super::notify::flush_notifications;

/// Parses `FORMAT [keywords]`. Formats built around titles and keyword
/// tiers always carry metadata.
pub fn parse_export_args(arg: &str) -> Option<(ExportFormat, bool)> {
    let mut words = arg.split_whitespace();
    let format: ExportFormat = words.next().unwrap_or("").parse().ok()?;
    let requested = words.any(|w| matches!(w.to_lowercase().as_str(), "keywords" | "kw"));
    let with_keywords = requested
        || matches!(
            format,
            ExportFormat::DetailedTxt | ExportFormat::AdobeStockJson | ExportFormat::PortfolioJson
        );
    Some((format, with_keywords))
}

pub async fn export_batch(
    bot: Bot,
    msg: Message,
    sessions: SessionStore,
    arg: String,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let mut queue = NotificationQueue::new();

    let Some((format, with_keywords)) = parse_export_args(&arg) else {
        queue.error(unknown_export_format(arg.trim()));
        return flush_notifications(&bot, chat_id, &mut queue).await;
    };

    let (batch, manual_keyword) = sessions
        .with(chat_id.0, |s| (s.batch.clone(), s.settings.manual_keyword.clone()))
        .await;
    if batch.is_empty() {
        queue.warning(NO_BATCH);
        return flush_notifications(&bot, chat_id, &mut queue).await;
    }

    let entries = batch.export_entries(with_keywords, &manual_keyword);
    match render(format, &entries, Utc::now()) {
        Ok(file) => {
            tracing::debug!(
                chat_id = chat_id.0,
                filename = %file.filename,
                mime = file.mime_type,
                "Sending export",
            );
            let document = InputFile::memory(file.contents.into_bytes()).file_name(file.filename.clone());
            bot.send_document(chat_id, document).await?;
            queue.success(exported(&file.filename));
        }
        Err(err) => {
            tracing::warn!(error = %err, "Export failed");
            queue.error(err.to_string());
        }
    }
    flush_notifications(&bot, chat_id, &mut queue).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_args() {
        assert_eq!(parse_export_args(""), Some((ExportFormat::Txt, false)));
        assert_eq!(parse_export_args("csv keywords"), Some((ExportFormat::Csv, true)));
        assert_eq!(
            parse_export_args("adobe"),
            Some((ExportFormat::AdobeStockJson, true))
        );
        assert_eq!(parse_export_args("pdf"), None);
    }
}
