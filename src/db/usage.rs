use super::Database;
use crate::ai::{AiProvider, AiUsage};
use anyhow::Result;
use teloxide::types::ChatId;

/// Accumulated usage for one chat and provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, sqlx::FromRow)]
pub struct UsageStats {
    pub requests: i64,
    pub tokens: i64,
    pub estimated_cost: f64,
}

impl Database {
    pub async fn get_usage(&self, chat_id: ChatId, provider: AiProvider) -> Result<UsageStats> {
        tracing::trace!(chat_id = chat_id.0, %provider, "Fetching AI usage");
        let stats = sqlx::query_as::<_, UsageStats>(
            "SELECT requests, tokens, estimated_cost FROM ai_usage WHERE chat_id = ? AND provider = ?",
        )
        .bind(chat_id.0)
        .bind(provider.as_str())
        .fetch_optional(self.pool())
        .await?;
        Ok(stats.unwrap_or_default())
    }

    /// Adds one request with `usage` tokens and `cost` to the counters.
    pub async fn record_usage(
        &self,
        chat_id: ChatId,
        provider: AiProvider,
        usage: &AiUsage,
        cost: f64,
    ) -> Result<()> {
        tracing::debug!(
            chat_id = chat_id.0,
            %provider,
            tokens = usage.total_tokens,
            cost,
            "Recording AI usage",
        );
        sqlx::query(
            "INSERT INTO ai_usage (chat_id, provider, requests, tokens, estimated_cost) \
             VALUES (?, ?, 1, ?, ?) \
             ON CONFLICT(chat_id, provider) DO UPDATE SET \
             requests = requests + 1, \
             tokens = tokens + excluded.tokens, \
             estimated_cost = estimated_cost + excluded.estimated_cost",
        )
        .bind(chat_id.0)
        .bind(provider.as_str())
        .bind(i64::from(usage.total_tokens))
        .bind(cost)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    pub async fn reset_usage(&self, chat_id: ChatId) -> Result<()> {
        tracing::debug!(chat_id = chat_id.0, "Resetting AI usage");
        sqlx::query("DELETE FROM ai_usage WHERE chat_id = ?")
            .bind(chat_id.0)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::util::init_test_db;

    #[tokio::test]
    async fn usage_accumulates_per_provider() {
        let db = init_test_db().await;
        let chat = ChatId(1);
        let usage = AiUsage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        };
        db.record_usage(chat, AiProvider::Gemini, &usage, 0.5).await.unwrap();
        db.record_usage(chat, AiProvider::Gemini, &usage, 0.25).await.unwrap();

        let stats = db.get_usage(chat, AiProvider::Gemini).await.unwrap();
        assert_eq!(stats.requests, 2);
        assert_eq!(stats.tokens, 30);
        assert!((stats.estimated_cost - 0.75).abs() < 1e-9);
        assert_eq!(
            db.get_usage(chat, AiProvider::OpenAi).await.unwrap(),
            UsageStats::default()
        );

        db.reset_usage(chat).await.unwrap();
        assert_eq!(db.get_usage(chat, AiProvider::Gemini).await.unwrap().requests, 0);
    }
}
