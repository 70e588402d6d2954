//! Per-chat ephemeral state: current settings and the last generated batch.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::catalog::Locale;
use crate::export::{ExportEntry, PromptMetadata};
use crate::prompt::{GeneratedPrompt, Settings};
use crate::text_utils::split_list;

/// A generated batch together with the style and mood it was built with.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub prompts: Vec<GeneratedPrompt>,
    pub style: String,
    pub mood: String,
    pub locale: Locale,
}

impl Batch {
    pub fn new(prompts: Vec<GeneratedPrompt>, settings: &Settings) -> Self {
        Self {
            prompts,
            style: settings.style.clone(),
            mood: settings.mood.clone(),
            locale: settings.locale,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// 1-based lookup as shown to the user.
    pub fn get(&self, number: usize) -> Option<&GeneratedPrompt> {
        number.checked_sub(1).and_then(|i| self.prompts.get(i))
    }

    /// Export entries, enriched with title and keywords when `with_keywords`.
    /// The comma separated manual keyword feeds the extra keyword context.
    pub fn export_entries(&self, with_keywords: bool, manual_keyword: &str) -> Vec<ExportEntry> {
        let extras = split_list(manual_keyword);
        self.prompts
            .iter()
            .map(|p| ExportEntry {
                prompt: p.clone(),
                metadata: with_keywords.then(|| {
                    PromptMetadata::for_prompt(p, &self.style, &self.mood, self.locale, &extras)
                }),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub settings: Settings,
    pub batch: Batch,
}

impl Session {
    /// Replaces the previous batch wholesale.
    pub fn replace_batch(&mut self, prompts: Vec<GeneratedPrompt>) {
        self.batch = Batch::new(prompts, &self.settings);
    }
}

/// Shared map of chat id to session. Cloning shares the same map.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<i64, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` on the chat's session, creating a default one first if needed.
    /// The lock is released before returning, so `f` must not await.
    pub async fn with<T>(&self, chat_id: i64, f: impl FnOnce(&mut Session) -> T) -> T {
        let mut sessions = self.inner.lock().await;
        let session = sessions.entry(chat_id).or_default();
        f(session)
    }

    pub async fn settings(&self, chat_id: i64) -> Settings {
        self.with(chat_id, |s| s.settings.clone()).await
    }

    pub async fn batch(&self, chat_id: i64) -> Batch {
        self.with(chat_id, |s| s.batch.clone()).await
    }
}
