use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use super::common::{send_request, AiCompletion, AiProvider, AiUsage, CallOptions};

pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: Option<GeminiUsage>,
}

pub fn build_gemini_body(prompt: &str, system_prompt: Option<&str>, options: &CallOptions) -> Value {
    let mut body = json!({
        "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "temperature": options.temperature,
            "maxOutputTokens": options.max_tokens,
        },
    });
    if let Some(system) = system_prompt {
        body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
    }
    body
}

pub fn parse_gemini_response(raw: &str) -> Result<AiCompletion> {
    let resp: GeminiResponse = serde_json::from_str(raw)?;
    let text = resp
        .candidates
        .first()
        .ok_or_else(|| anyhow!("missing Gemini candidate"))?
        .content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect::<Vec<_>>()
        .join("");
    if text.trim().is_empty() {
        return Err(anyhow!("empty Gemini response"));
    }
    let usage = resp.usage_metadata.unwrap_or_default();
    Ok(AiCompletion {
        text: text.trim().to_string(),
        usage: AiUsage {
            prompt_tokens: usage.prompt_token_count,
            completion_tokens: usage.candidates_token_count,
            total_tokens: usage.total_token_count,
        },
    })
}

#[instrument(level = "trace", skip(api_key, prompt, system_prompt))]
pub async fn gemini_complete(
    api_key: &str,
    model: &str,
    prompt: &str,
    system_prompt: Option<&str>,
    options: &CallOptions,
    base_url: Option<&str>,
) -> Result<AiCompletion> {
    let base = base_url.unwrap_or(GEMINI_API_URL).trim_end_matches('/');
    let url = format!("{base}/v1beta/models/{model}:generateContent");
    debug!(url, "sending Gemini generateContent request");

    let body = build_gemini_body(prompt, system_prompt, options);
    let client = reqwest::Client::new();
    let builder = client.post(&url).query(&[("key", api_key)]).json(&body);
    let raw = send_request(builder, AiProvider::Gemini).await?;
    parse_gemini_response(&raw)
}
