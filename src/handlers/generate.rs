use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::ChatAction;
use tracing::{debug, warn};

use crate::config::Config;
use crate::export::{calculate_seo_score, PromptMetadata};
use crate::messages::{
    batch_generated, invalid_prompt_number, prompt_not_found, EMPTY_BATCH, NO_BATCH,
};
use crate::notify::NotificationQueue;
use crate::prompt::{generate_prompts, GeneratedPrompt};
use crate::random::StdRandom;
use crate::session::{Batch, SessionStore};
use crate::text_utils::split_list;

use super::notify::flush_notifications;

/// Telegram rejects messages above 4096 characters.
const MESSAGE_LIMIT: usize = 4000;

/// Numbers the prompts and packs them into as few messages as fit.
pub fn format_batch(prompts: &[GeneratedPrompt]) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    for (i, p) in prompts.iter().enumerate() {
        let entry = format!("{}. {}\n\n", i + 1, p.prompt);
        if !current.is_empty() && current.chars().count() + entry.chars().count() > MESSAGE_LIMIT {
            chunks.push(current.trim_end().to_string());
            current.clear();
        }
        current.push_str(&entry);
    }
    if !current.trim().is_empty() {
        chunks.push(current.trim_end().to_string());
    }
    chunks
}

/// Resolves a 1-based prompt number from a command argument, queueing an
/// error when it is missing or out of range.
pub fn resolve_prompt(
    batch: &Batch,
    arg: &str,
    queue: &mut NotificationQueue,
) -> Option<GeneratedPrompt> {
    if batch.is_empty() {
        queue.warning(NO_BATCH);
        return None;
    }
    let arg = arg.trim();
    let Ok(number) = arg.parse::<usize>() else {
        queue.error(invalid_prompt_number(arg));
        return None;
    };
    match batch.get(number) {
        Some(p) => Some(p.clone()),
        None => {
            queue.error(prompt_not_found(number, batch.prompts.len()));
            None
        }
    }
}

pub async fn generate(
    bot: Bot,
    msg: Message,
    sessions: SessionStore,
    config: Config,
    full_random: bool,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let settings = sessions.settings(chat_id.0).await;

    if let Err(err) = bot.send_chat_action(chat_id, ChatAction::Typing).await {
        warn!(error = %err, "Failed to send typing action");
    }
    tokio::time::sleep(config.generation_delay).await;

    let prompts = {
        let mut rng = StdRandom::new();
        generate_prompts(&settings, full_random, &mut rng)
    };
    debug!(chat_id = chat_id.0, count = prompts.len(), full_random, "Generated batch");

    let mut queue = NotificationQueue::new();
    let chunks = format_batch(&prompts);
    if prompts.is_empty() {
        queue.warning(EMPTY_BATCH);
    } else {
        queue.success(batch_generated(prompts.len()));
    }
    sessions.with(chat_id.0, |s| s.replace_batch(prompts)).await;

    for chunk in chunks {
        bot.send_message(chat_id, chunk).await?;
    }
    flush_notifications(&bot, chat_id, &mut queue).await
}

fn metadata_for(
    batch: &Batch,
    prompt: &GeneratedPrompt,
    manual_keyword: &str,
    extra: &str,
) -> PromptMetadata {
    let mut extras = split_list(manual_keyword);
    extras.extend(split_list(extra));
    PromptMetadata::for_prompt(prompt, &batch.style, &batch.mood, batch.locale, &extras)
}

pub fn format_keywords(meta: &PromptMetadata) -> String {
    let kw = &meta.keywords;
    format!(
        "Keywords ({}/49, SEO score {}):\n\nPrimary: {}\n\nSecondary: {}\n\nTertiary: {}\n\nAll: {}",
        kw.count,
        calculate_seo_score(kw),
        kw.primary.join(", "),
        kw.secondary.join(", "),
        kw.tertiary.join(", "),
        kw.all.join(", "),
    )
}

/// `/keywords N [extra, ...]`.
pub async fn show_keywords(
    bot: Bot,
    msg: Message,
    sessions: SessionStore,
    arg: String,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let (batch, settings) = sessions
        .with(chat_id.0, |s| (s.batch.clone(), s.settings.clone()))
        .await;
    let (number, extra) = arg.trim().split_once(char::is_whitespace).unwrap_or((arg.trim(), ""));
    let mut queue = NotificationQueue::new();
    if let Some(prompt) = resolve_prompt(&batch, number, &mut queue) {
        let meta = metadata_for(&batch, &prompt, &settings.manual_keyword, extra);
        bot.send_message(chat_id, format_keywords(&meta)).await?;
    }
    flush_notifications(&bot, chat_id, &mut queue).await
}

pub async fn show_title(bot: Bot, msg: Message, sessions: SessionStore, arg: String) -> Result<()> {
    let chat_id = msg.chat.id;
    let (batch, settings) = sessions
        .with(chat_id.0, |s| (s.batch.clone(), s.settings.clone()))
        .await;
    let mut queue = NotificationQueue::new();
    if let Some(prompt) = resolve_prompt(&batch, &arg, &mut queue) {
        let meta = metadata_for(&batch, &prompt, &settings.manual_keyword, "");
        bot.send_message(chat_id, meta.title).await?;
    }
    flush_notifications(&bot, chat_id, &mut queue).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Settings;
    use crate::random::SequenceRandom;

    fn batch(count: &str) -> Batch {
        let mut settings = Settings::default();
        settings.set_prompt_count(count).unwrap();
        let mut rng = SequenceRandom::constant(0.3);
        Batch::new(generate_prompts(&settings, false, &mut rng), &settings)
    }

    #[test]
    fn small_batch_fits_one_message() {
        let b = batch("3");
        let chunks = format_batch(&b.prompts);
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].starts_with("1. "));
        assert!(chunks[0].contains("\n\n3. "));
    }

    #[test]
    fn large_batch_is_split() {
        let b = batch("50");
        let chunks = format_batch(&b.prompts);
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.chars().count() <= MESSAGE_LIMIT));
        let total: usize = chunks.iter().map(|c| c.matches(". Professional").count()).sum();
        assert_eq!(total, 50);
    }

    #[test]
    fn keyword_extras_merge_with_manual_keyword() {
        let b = batch("1");
        let meta = metadata_for(&b, &b.prompts[0], "Glass Desk", "oak, Lamp");
        for word in ["Glass Desk", "oak", "Lamp"] {
            assert!(meta.keywords.all.contains(&word.to_string()));
        }
        assert!(format_keywords(&meta).starts_with("Keywords (49/49, SEO score"));
    }

    #[test]
    fn resolve_prompt_reports_errors() {
        let mut queue = NotificationQueue::new();
        assert!(resolve_prompt(&Batch::default(), "1", &mut queue).is_none());
        let b = batch("2");
        assert!(resolve_prompt(&b, "x", &mut queue).is_none());
        assert!(resolve_prompt(&b, "3", &mut queue).is_none());
        assert!(resolve_prompt(&b, " 2 ", &mut queue).is_some());
        assert_eq!(queue.len(), 3);
    }
}
