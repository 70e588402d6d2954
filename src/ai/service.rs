use anyhow::{anyhow, Result};
use tracing::{info, instrument, warn};

use super::common::{AiCompletion, AiProvider, AiUsage, CallOptions};
use super::config::AiConfig;
use super::gemini::gemini_complete;
use super::openai::openai_complete;

/// USD per 1K tokens as `(model, input, output)`.
const PRICING: &[(&str, f64, f64)] = &[
    ("gemini-1.5-flash", 0.000075, 0.0003),
    ("gemini-1.5-pro", 0.00125, 0.005),
    ("gemini-2.0-flash", 0.0001, 0.0004),
    ("gpt-4o-mini", 0.00015, 0.0006),
    ("gpt-4o", 0.0025, 0.01),
    ("gpt-3.5-turbo", 0.0005, 0.0015),
];

/// Handle over one configured provider and model.
#[derive(Clone, Debug)]
pub struct AiService {
    config: AiConfig,
    active: Option<(AiProvider, String)>,
}

impl AiService {
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    /// Selects the provider and model. Returns `false` and leaves the
    /// service not ready when no key is configured for `provider`.
    pub fn initialize(&mut self, provider: AiProvider, model: Option<&str>) -> bool {
        if self.config.api_key(provider).is_none() {
            warn!(%provider, "No API key configured");
            self.active = None;
            return false;
        }
        let model = model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| self.config.default_model(provider))
            .to_string();
        info!(%provider, %model, "AI service initialized");
        self.active = Some((provider, model));
        true
    }

    pub fn is_ready(&self) -> bool {
        self.active.is_some()
    }

    pub fn provider(&self) -> Option<AiProvider> {
        self.active.as_ref().map(|(p, _)| *p)
    }

    pub fn model(&self) -> Option<&str> {
        self.active.as_ref().map(|(_, m)| m.as_str())
    }

    /// Providers that have a key configured.
    pub fn available_providers(&self) -> Vec<AiProvider> {
        [AiProvider::Gemini, AiProvider::OpenAi]
            .into_iter()
            .filter(|p| self.config.api_key(*p).is_some())
            .collect()
    }

    #[instrument(level = "trace", skip(self, prompt, system_prompt))]
    pub async fn call_ai(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        options: &CallOptions,
    ) -> Result<AiCompletion> {
        let (provider, model) = self
            .active
            .as_ref()
            .ok_or_else(|| anyhow!("AI service is not initialized"))?;
        let api_key = self
            .config
            .api_key(*provider)
            .ok_or_else(|| anyhow!("missing API key for {provider}"))?;

        match provider {
            AiProvider::Gemini => {
                gemini_complete(
                    api_key,
                    model,
                    prompt,
                    system_prompt,
                    options,
                    self.config.gemini_api_url.as_deref(),
                )
                .await
            }
            AiProvider::OpenAi => {
                openai_complete(
                    api_key,
                    model,
                    prompt,
                    system_prompt,
                    options,
                    self.config.openai_chat_url.as_deref(),
                )
                .await
            }
        }
    }

    /// Estimated USD cost of `usage` for the active model. Unknown models
    /// and an uninitialized service cost nothing.
    pub fn calculate_cost(&self, usage: &AiUsage) -> f64 {
        let Some(model) = self.model() else {
            return 0.0;
        };
        PRICING
            .iter()
            .find(|(name, _, _)| *name == model)
            .map(|(_, input, output)| {
                f64::from(usage.prompt_tokens) / 1000.0 * input
                    + f64::from(usage.completion_tokens) / 1000.0 * output
            })
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(gemini: Option<&str>, openai: Option<&str>) -> AiConfig {
        AiConfig {
            gemini_api_key: gemini.map(str::to_string),
            openai_api_key: openai.map(str::to_string),
            default_provider: AiProvider::Gemini,
            gemini_model: "gemini-1.5-flash".into(),
            openai_model: "gpt-4o-mini".into(),
            gemini_api_url: None,
            openai_chat_url: None,
        }
    }

    #[test]
    fn initialize_requires_key() {
        let mut service = AiService::new(config(Some("g"), None));
        assert!(!service.initialize(AiProvider::OpenAi, None));
        assert!(!service.is_ready());
        assert!(service.initialize(AiProvider::Gemini, None));
        assert_eq!(service.model(), Some("gemini-1.5-flash"));
        assert_eq!(service.available_providers(), vec![AiProvider::Gemini]);
    }

    #[test]
    fn cost_uses_pricing_table() {
        let mut service = AiService::new(config(None, Some("o")));
        service.initialize(AiProvider::OpenAi, Some("gpt-4o"));
        let usage = AiUsage {
            prompt_tokens: 1000,
            completion_tokens: 1000,
            total_tokens: 2000,
        };
        assert!((service.calculate_cost(&usage) - 0.0125).abs() < 1e-9);

        service.initialize(AiProvider::OpenAi, Some("custom-model"));
        assert_eq!(service.calculate_cost(&usage), 0.0);
    }

    #[tokio::test]
    async fn call_without_initialize_fails() {
        let service = AiService::new(config(Some("g"), None));
        assert!(service
            .call_ai("hi", None, &CallOptions::default())
            .await
            .is_err());
    }
}
