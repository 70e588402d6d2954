use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::ChatAction;
use tracing::warn;

use crate::ai::{
    analyze_prompt, enhance_prompt, generate_variations, AiOutcome, AiProvider, AiService,
    AiUsage, PromptAnalysis,
};
use crate::config::Config;
use crate::db::Database;
use crate::messages::{
    ai_failed, prompt_enhanced, provider_selected, AI_DISABLED, AI_NOT_READY, USAGE_RESET,
};
use crate::notify::NotificationQueue;
use crate::session::SessionStore;

use super::generate::resolve_prompt;
use super::notify::flush_notifications;

const DEFAULT_VARIATIONS: usize = 3;
const MAX_VARIATIONS: usize = 10;

/// Builds the chat's AI service from config and its stored preference.
/// Queues a notification and returns `None` when AI cannot be used.
pub async fn service_for_chat(
    db: &Database,
    config: &Config,
    chat_id: ChatId,
    queue: &mut NotificationQueue,
) -> Result<Option<AiService>> {
    let Some(ai) = &config.ai else {
        queue.warning(AI_DISABLED);
        return Ok(None);
    };
    let preference = db.get_ai_preference(chat_id).await?;
    let (provider, model) = match &preference {
        Some(p) => (p.provider, p.model.as_deref()),
        None => (ai.default_provider, None),
    };

    let mut service = AiService::new(ai.clone());
    if !service.initialize(provider, model) {
        queue.error(AI_NOT_READY);
        return Ok(None);
    }
    Ok(Some(service))
}

/// Persists billed usage and turns failures into an error notification.
/// A failed usage write is logged; the AI result is still delivered.
pub async fn record_outcome<T>(
    db: &Database,
    service: &AiService,
    chat_id: ChatId,
    outcome: &AiOutcome<T>,
    queue: &mut NotificationQueue,
) {
    if let Some(error) = &outcome.error {
        queue.error(ai_failed(error));
    }
    if let (Some(usage), Some(provider)) = (outcome.usage, service.provider()) {
        if let Err(err) = record_usage(db, service, chat_id, provider, &usage).await {
            warn!(chat_id = chat_id.0, error = %err, "Failed to record AI usage");
        }
    }
}

async fn record_usage(
    db: &Database,
    service: &AiService,
    chat_id: ChatId,
    provider: AiProvider,
    usage: &AiUsage,
) -> Result<()> {
    let cost = service.calculate_cost(usage);
    db.record_usage(chat_id, provider, usage, cost).await
}

async fn typing(bot: &Bot, chat_id: ChatId) {
    if let Err(err) = bot.send_chat_action(chat_id, ChatAction::Typing).await {
        warn!(error = %err, "Failed to send typing action");
    }
}

pub async fn enhance(
    bot: Bot,
    msg: Message,
    db: Database,
    config: Config,
    sessions: SessionStore,
    arg: String,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let mut queue = NotificationQueue::new();
    let batch = sessions.batch(chat_id.0).await;

    let Some(prompt) = resolve_prompt(&batch, &arg, &mut queue) else {
        return flush_notifications(&bot, chat_id, &mut queue).await;
    };
    let Some(service) = service_for_chat(&db, &config, chat_id, &mut queue).await? else {
        return flush_notifications(&bot, chat_id, &mut queue).await;
    };

    typing(&bot, chat_id).await;
    let outcome = enhance_prompt(&service, &prompt.prompt, prompt.mode).await;
    record_outcome(&db, &service, chat_id, &outcome, &mut queue).await;

    if outcome.success {
        bot.send_message(chat_id, outcome.value).await?;
        queue.success(prompt_enhanced(arg.trim()));
    }
    flush_notifications(&bot, chat_id, &mut queue).await
}

/// Splits `N [count]`.
pub fn parse_variation_args(arg: &str) -> (String, usize) {
    let mut words = arg.split_whitespace();
    let number = words.next().unwrap_or("").to_string();
    let count = words
        .next()
        .and_then(|w| w.parse::<usize>().ok())
        .unwrap_or(DEFAULT_VARIATIONS)
        .clamp(1, MAX_VARIATIONS);
    (number, count)
}

pub async fn variations(
    bot: Bot,
    msg: Message,
    db: Database,
    config: Config,
    sessions: SessionStore,
    arg: String,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let mut queue = NotificationQueue::new();
    let batch = sessions.batch(chat_id.0).await;
    let (number, count) = parse_variation_args(&arg);

    let Some(prompt) = resolve_prompt(&batch, &number, &mut queue) else {
        return flush_notifications(&bot, chat_id, &mut queue).await;
    };
    let Some(service) = service_for_chat(&db, &config, chat_id, &mut queue).await? else {
        return flush_notifications(&bot, chat_id, &mut queue).await;
    };

    typing(&bot, chat_id).await;
    let outcome = generate_variations(&service, &prompt.prompt, count).await;
    record_outcome(&db, &service, chat_id, &outcome, &mut queue).await;

    if outcome.success {
        if outcome.value.is_empty() {
            queue.warning("The AI returned no variations.");
        } else {
            let text = outcome
                .value
                .iter()
                .enumerate()
                .map(|(i, v)| format!("{}. {v}", i + 1))
                .collect::<Vec<_>>()
                .join("\n\n");
            bot.send_message(chat_id, text).await?;
        }
    }
    flush_notifications(&bot, chat_id, &mut queue).await
}

pub fn format_analysis(analysis: &PromptAnalysis) -> String {
    let list = |items: &[String]| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items
                .iter()
                .map(|i| format!("• {i}"))
                .collect::<Vec<_>>()
                .join("\n")
        }
    };
    format!(
        "Score: {}/100\n\nStrengths:\n{}\n\nImprovements:\n{}\n\nSuggested keywords: {}",
        analysis.score,
        list(&analysis.strengths),
        list(&analysis.improvements),
        if analysis.keywords.is_empty() {
            "-".to_string()
        } else {
            analysis.keywords.join(", ")
        },
    )
}

pub async fn analyze(
    bot: Bot,
    msg: Message,
    db: Database,
    config: Config,
    sessions: SessionStore,
    arg: String,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let mut queue = NotificationQueue::new();
    let batch = sessions.batch(chat_id.0).await;

    let Some(prompt) = resolve_prompt(&batch, &arg, &mut queue) else {
        return flush_notifications(&bot, chat_id, &mut queue).await;
    };
    let Some(service) = service_for_chat(&db, &config, chat_id, &mut queue).await? else {
        return flush_notifications(&bot, chat_id, &mut queue).await;
    };

    typing(&bot, chat_id).await;
    let outcome = analyze_prompt(&service, &prompt.prompt).await;
    record_outcome(&db, &service, chat_id, &outcome, &mut queue).await;
    if outcome.success {
        bot.send_message(chat_id, format_analysis(&outcome.value))
            .await?;
    }
    flush_notifications(&bot, chat_id, &mut queue).await
}

/// `/provider [gemini|openai [model]]`.
pub async fn select_provider(
    bot: Bot,
    msg: Message,
    db: Database,
    config: Config,
    arg: String,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let mut queue = NotificationQueue::new();
    let Some(ai) = &config.ai else {
        queue.warning(AI_DISABLED);
        return flush_notifications(&bot, chat_id, &mut queue).await;
    };

    let mut words = arg.split_whitespace();
    let Some(name) = words.next() else {
        let mut current = NotificationQueue::new();
        if let Some(service) = service_for_chat(&db, &config, chat_id, &mut current).await? {
            let available: Vec<&str> = service
                .available_providers()
                .into_iter()
                .map(|p| p.as_str())
                .collect();
            bot.send_message(
                chat_id,
                format!(
                    "Current provider: {} ({})\nAvailable: {}",
                    service.provider().map(|p| p.as_str()).unwrap_or("-"),
                    service.model().unwrap_or("-"),
                    available.join(", "),
                ),
            )
            .await?;
        }
        return flush_notifications(&bot, chat_id, &mut current).await;
    };

    let provider: AiProvider = match name.parse() {
        Ok(p) => p,
        Err(err) => {
            queue.error(err.to_string());
            return flush_notifications(&bot, chat_id, &mut queue).await;
        }
    };
    let model = words.next();

    let mut service = AiService::new(ai.clone());
    if service.initialize(provider, model) {
        db.set_ai_preference(chat_id, provider, model).await?;
        queue.success(provider_selected(
            provider.as_str(),
            service.model().unwrap_or_default(),
        ));
    } else {
        queue.error(AI_NOT_READY);
    }
    flush_notifications(&bot, chat_id, &mut queue).await
}

/// `/usage [reset]`.
pub async fn show_usage(bot: Bot, msg: Message, db: Database, arg: String) -> Result<()> {
    let chat_id = msg.chat.id;
    if arg.trim().eq_ignore_ascii_case("reset") {
        db.reset_usage(chat_id).await?;
        let mut queue = NotificationQueue::new();
        queue.success(USAGE_RESET);
        return flush_notifications(&bot, chat_id, &mut queue).await;
    }

    let mut lines = Vec::new();
    for provider in [AiProvider::Gemini, AiProvider::OpenAi] {
        let stats = db.get_usage(chat_id, provider).await?;
        lines.push(format!(
            "{provider}: {} requests, {} tokens, ${:.4}",
            stats.requests, stats.tokens, stats.estimated_cost
        ));
    }
    bot.send_message(chat_id, lines.join("\n")).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AiConfig;
    use crate::tests::util::init_test_db;

    #[tokio::test]
    async fn usage_write_failure_is_not_fatal() {
        let db = init_test_db().await;
        db.pool().close().await;
        let mut service = AiService::new(AiConfig {
            gemini_api_key: Some("g-key".into()),
            openai_api_key: None,
            default_provider: AiProvider::Gemini,
            gemini_model: "gemini-1.5-flash".into(),
            openai_model: "gpt-4o-mini".into(),
            gemini_api_url: None,
            openai_chat_url: None,
        });
        assert!(service.initialize(AiProvider::Gemini, None));
        let outcome = AiOutcome {
            success: true,
            value: "a desk".to_string(),
            usage: Some(AiUsage {
                prompt_tokens: 1,
                completion_tokens: 1,
                total_tokens: 2,
            }),
            error: None,
        };

        let mut queue = NotificationQueue::new();
        record_outcome(&db, &service, ChatId(1), &outcome, &mut queue).await;
        assert!(queue.is_empty());
    }

    #[test]
    fn variation_args_default_and_clamp() {
        assert_eq!(parse_variation_args("2"), ("2".to_string(), 3));
        assert_eq!(parse_variation_args("2 50"), ("2".to_string(), 10));
        assert_eq!(parse_variation_args(""), (String::new(), 3));
    }

    #[test]
    fn analysis_formatting() {
        let text = format_analysis(&PromptAnalysis::fallback());
        assert!(text.starts_with("Score: 50/100"));
        assert!(text.contains("• Clear subject"));
        assert!(text.ends_with("Suggested keywords: -"));
    }
}
