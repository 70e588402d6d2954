//! Prompt enhancement, variations and analysis built on [`AiService`].
//!
//! Every feature reports through [`AiOutcome`]; provider failures never
//! propagate to the caller.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use super::common::{extract_json_object, strip_code_fences, AiUsage, CallOptions};
use super::prompts::{
    ANALYZE_PROMPT, ENHANCE_MIDJOURNEY_PROMPT, ENHANCE_STANDARD_PROMPT, VARIATIONS_PROMPT,
};
use super::service::AiService;
use crate::prompt::{OutputMode, MIDJOURNEY_PREFIX};
use crate::text_utils::strip_list_marker;

#[derive(Debug, Clone, PartialEq)]
pub struct AiOutcome<T> {
    pub success: bool,
    pub value: T,
    pub usage: Option<AiUsage>,
    pub error: Option<String>,
}

impl<T> AiOutcome<T> {
    fn ok(value: T, usage: AiUsage) -> Self {
        Self {
            success: true,
            value,
            usage: Some(usage),
            error: None,
        }
    }

    /// The call went through but the answer was unusable. Usage is kept
    /// since the tokens were billed.
    fn unusable(fallback: T, usage: AiUsage, error: impl ToString) -> Self {
        Self {
            success: false,
            value: fallback,
            usage: Some(usage),
            error: Some(error.to_string()),
        }
    }

    fn failed(fallback: T, error: impl ToString) -> Self {
        Self {
            success: false,
            value: fallback,
            usage: None,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptAnalysis {
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl PromptAnalysis {
    /// Returned when the model answer cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            score: 50,
            strengths: vec!["Clear subject".to_string()],
            improvements: vec![
                "Add specific lighting details".to_string(),
                "Describe the composition".to_string(),
            ],
            keywords: Vec::new(),
        }
    }
}

/// Splits a Midjourney prompt into its description and trailing flags.
fn split_midjourney(prompt: &str) -> (&str, &str) {
    let body = prompt
        .trim()
        .strip_prefix(MIDJOURNEY_PREFIX)
        .unwrap_or(prompt)
        .trim();
    match body.find(" --") {
        Some(idx) => (body[..idx].trim(), body[idx..].trim()),
        None => (body, ""),
    }
}

#[instrument(level = "trace", skip(service, prompt))]
pub async fn enhance_prompt(
    service: &AiService,
    prompt: &str,
    mode: OutputMode,
) -> AiOutcome<String> {
    let (input, system) = match mode {
        OutputMode::Midjourney => (split_midjourney(prompt).0, ENHANCE_MIDJOURNEY_PROMPT),
        OutputMode::Standard => (prompt, ENHANCE_STANDARD_PROMPT),
    };

    let completion = match service
        .call_ai(input, Some(system), &CallOptions::default())
        .await
    {
        Ok(c) => c,
        Err(err) => {
            warn!(error = %err, "Prompt enhancement failed");
            return AiOutcome::failed(prompt.to_string(), err);
        }
    };

    let enhanced = strip_code_fences(&completion.text).trim_matches('"').trim();
    let enhanced = match mode {
        OutputMode::Midjourney => enhanced.strip_prefix(MIDJOURNEY_PREFIX).unwrap_or(enhanced).trim(),
        OutputMode::Standard => enhanced,
    };
    if enhanced.is_empty() {
        warn!("Prompt enhancement returned no text");
        return AiOutcome::unusable(prompt.to_string(), completion.usage, "empty response");
    }

    let value = match mode {
        OutputMode::Midjourney => {
            let (_, flags) = split_midjourney(prompt);
            if flags.is_empty() {
                format!("{MIDJOURNEY_PREFIX} {enhanced}")
            } else {
                format!("{MIDJOURNEY_PREFIX} {enhanced} {flags}")
            }
        }
        OutputMode::Standard => enhanced.to_string(),
    };
    AiOutcome::ok(value, completion.usage)
}

#[instrument(level = "trace", skip(service, prompt))]
pub async fn generate_variations(
    service: &AiService,
    prompt: &str,
    count: usize,
) -> AiOutcome<Vec<String>> {
    let request = format!("Create {count} variations of this prompt:\n{prompt}");
    let options = CallOptions {
        temperature: 0.9,
        ..CallOptions::default()
    };
    match service
        .call_ai(&request, Some(VARIATIONS_PROMPT), &options)
        .await
    {
        Ok(completion) => {
            let variations = strip_code_fences(&completion.text)
                .lines()
                .filter(|line| !line.trim_end().ends_with(':'))
                .filter_map(strip_list_marker)
                .take(count)
                .collect();
            AiOutcome::ok(variations, completion.usage)
        }
        Err(err) => {
            warn!(error = %err, "Variation generation failed");
            AiOutcome::failed(Vec::new(), err)
        }
    }
}

/// Parses an analysis answer, tolerating code fences and chatter around
/// the JSON object.
pub fn parse_analysis(text: &str) -> Option<PromptAnalysis> {
    let cleaned = strip_code_fences(text);
    let json = extract_json_object(cleaned)?;
    let mut analysis: PromptAnalysis = serde_json::from_str(json).ok()?;
    analysis.score = analysis.score.min(100);
    Some(analysis)
}

#[instrument(level = "trace", skip(service, prompt))]
pub async fn analyze_prompt(service: &AiService, prompt: &str) -> AiOutcome<PromptAnalysis> {
    let options = CallOptions {
        temperature: 0.3,
        ..CallOptions::default()
    };
    match service.call_ai(prompt, Some(ANALYZE_PROMPT), &options).await {
        Ok(completion) => match parse_analysis(&completion.text) {
            Some(analysis) => AiOutcome::ok(analysis, completion.usage),
            None => {
                warn!("Analysis response was not valid JSON");
                AiOutcome::ok(PromptAnalysis::fallback(), completion.usage)
            }
        },
        Err(err) => {
            warn!(error = %err, "Prompt analysis failed");
            AiOutcome::failed(PromptAnalysis::fallback(), err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midjourney_split_keeps_flags() {
        let (desc, flags) = split_midjourney("/imagine prompt: a desk, soft light --ar 16:9 --v 6.1");
        assert_eq!(desc, "a desk, soft light");
        assert_eq!(flags, "--ar 16:9 --v 6.1");
    }

    #[test]
    fn analysis_parsed_from_fenced_json() {
        let text = "```json\n{\"score\": 82, \"strengths\": [\"lighting\"], \"improvements\": [], \"keywords\": [\"desk\"]}\n```";
        let analysis = parse_analysis(text).unwrap();
        assert_eq!(analysis.score, 82);
        assert_eq!(analysis.keywords, vec!["desk"]);
    }

    #[test]
    fn analysis_garbage_is_none() {
        assert!(parse_analysis("Looks great to me!").is_none());
    }
}
