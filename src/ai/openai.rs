use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use super::common::{send_request, AiCompletion, AiProvider, AiUsage, CallOptions};

pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize, Default)]
struct ChatUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

pub fn build_chat_body(
    model: &str,
    prompt: &str,
    system_prompt: Option<&str>,
    options: &CallOptions,
) -> Value {
    let mut messages = Vec::new();
    if let Some(system) = system_prompt {
        messages.push(json!({ "role": "system", "content": system }));
    }
    messages.push(json!({ "role": "user", "content": prompt }));
    json!({
        "model": model,
        "messages": messages,
        "temperature": options.temperature,
        "max_tokens": options.max_tokens,
    })
}

pub fn parse_chat_response(raw: &str) -> Result<AiCompletion> {
    let chat: ChatResponse = serde_json::from_str(raw)?;
    let content = chat
        .choices
        .first()
        .ok_or_else(|| anyhow!("missing chat choice"))?
        .message
        .content
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_string();
    if content.is_empty() {
        return Err(anyhow!("empty chat response"));
    }
    let usage = chat.usage.unwrap_or_default();
    Ok(AiCompletion {
        text: content,
        usage: AiUsage {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        },
    })
}

#[instrument(level = "trace", skip(api_key, prompt, system_prompt))]
pub async fn openai_complete(
    api_key: &str,
    model: &str,
    prompt: &str,
    system_prompt: Option<&str>,
    options: &CallOptions,
    url: Option<&str>,
) -> Result<AiCompletion> {
    let url = url.unwrap_or(OPENAI_CHAT_URL);
    debug!(url, "sending chat completion request");

    let body = build_chat_body(model, prompt, system_prompt, options);
    let client = reqwest::Client::new();
    let builder = client.post(url).bearer_auth(api_key).json(&body);
    let raw = send_request(builder, AiProvider::OpenAi).await?;
    parse_chat_response(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_message_comes_first() {
        let body = build_chat_body("gpt-4o-mini", "hi", Some("sys"), &CallOptions::default());
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hi");
        assert_eq!(body["max_tokens"], 1024);
    }

    #[test]
    fn parses_content_and_usage() {
        let raw = r#"{"choices":[{"message":{"content":" ok "}}],
            "usage":{"prompt_tokens":10,"completion_tokens":4,"total_tokens":14}}"#;
        let completion = parse_chat_response(raw).unwrap();
        assert_eq!(completion.text, "ok");
        assert_eq!(completion.usage.prompt_tokens, 10);
    }

    #[test]
    fn usage_is_optional() {
        let raw = r#"{"choices":[{"message":{"content":"ok"}}]}"#;
        assert_eq!(parse_chat_response(raw).unwrap().usage, AiUsage::default());
    }
}
