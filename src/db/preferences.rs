use super::Database;
use crate::ai::AiProvider;
use anyhow::Result;
use teloxide::types::ChatId;

/// Stored provider choice for a chat. `model` of `None` means the
/// provider's configured default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiPreference {
    pub provider: AiProvider,
    pub model: Option<String>,
}

#[derive(sqlx::FromRow)]
struct PreferenceRow {
    provider: String,
    model: Option<String>,
}

impl Database {
    pub async fn get_ai_preference(&self, chat_id: ChatId) -> Result<Option<AiPreference>> {
        tracing::trace!(chat_id = chat_id.0, "Fetching AI preference");
        let row = sqlx::query_as::<_, PreferenceRow>(
            "SELECT provider, model FROM ai_preferences WHERE chat_id = ?",
        )
        .bind(chat_id.0)
        .fetch_optional(self.pool())
        .await?;

        Ok(row.and_then(|r| match r.provider.parse() {
            Ok(provider) => Some(AiPreference {
                provider,
                model: r.model,
            }),
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring stored AI preference");
                None
            }
        }))
    }

    pub async fn set_ai_preference(
        &self,
        chat_id: ChatId,
        provider: AiProvider,
        model: Option<&str>,
    ) -> Result<()> {
        tracing::debug!(chat_id = chat_id.0, %provider, ?model, "Saving AI preference");
        sqlx::query(
            "INSERT INTO ai_preferences (chat_id, provider, model) VALUES (?, ?, ?) \
             ON CONFLICT(chat_id) DO UPDATE SET provider = excluded.provider, model = excluded.model",
        )
        .bind(chat_id.0)
        .bind(provider.as_str())
        .bind(model)
        .execute(self.pool())
        .await?;
        Ok(())
    }
}
