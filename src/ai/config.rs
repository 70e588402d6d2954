use std::env;

use super::common::AiProvider;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Debug)]
pub struct AiConfig {
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub default_provider: AiProvider,
    pub gemini_model: String,
    pub openai_model: String,
    pub gemini_api_url: Option<String>,
    pub openai_chat_url: Option<String>,
}

impl AiConfig {
    /// `None` when neither `GEMINI_API_KEY` nor `OPENAI_API_KEY` is set.
    pub fn from_env() -> Option<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        if gemini_api_key.is_none() && openai_api_key.is_none() {
            return None;
        }

        let default_provider = match env::var("AI_PROVIDER") {
            Ok(value) => value.parse::<AiProvider>().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Invalid AI_PROVIDER, using gemini");
                AiProvider::Gemini
            }),
            Err(_) => AiProvider::Gemini,
        };

        Some(Self {
            gemini_api_key,
            openai_api_key,
            default_provider,
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            gemini_api_url: env::var("GEMINI_API_URL").ok(),
            openai_chat_url: env::var("OPENAI_CHAT_URL").ok(),
        })
    }

    pub fn api_key(&self, provider: AiProvider) -> Option<&str> {
        match provider {
            AiProvider::Gemini => self.gemini_api_key.as_deref(),
            AiProvider::OpenAi => self.openai_api_key.as_deref(),
        }
    }

    pub fn default_model(&self, provider: AiProvider) -> &str {
        match provider {
            AiProvider::Gemini => &self.gemini_model,
            AiProvider::OpenAi => &self.openai_model,
        }
    }
}
