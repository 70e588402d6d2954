use stockprompt::ai::{
    analyze_prompt, enhance_prompt, generate_variations, AiConfig, AiProvider, AiService,
    CallOptions, PromptAnalysis,
};
use stockprompt::prompt::OutputMode;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GEMINI_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn config(server: &MockServer) -> AiConfig {
    AiConfig {
        gemini_api_key: Some("g-key".into()),
        openai_api_key: Some("o-key".into()),
        default_provider: AiProvider::Gemini,
        gemini_model: "gemini-1.5-flash".into(),
        openai_model: "gpt-4o-mini".into(),
        gemini_api_url: Some(server.uri()),
        openai_chat_url: Some(format!("{}/v1/chat/completions", server.uri())),
    }
}

fn service(server: &MockServer, provider: AiProvider) -> AiService {
    let mut service = AiService::new(config(server));
    assert!(service.initialize(provider, None));
    service
}

fn gemini_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }],
        "usageMetadata": { "promptTokenCount": 100, "candidatesTokenCount": 50, "totalTokenCount": 150 }
    })
}

fn openai_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{ "message": { "content": text } }],
        "usage": { "prompt_tokens": 1000, "completion_tokens": 1000, "total_tokens": 2000 }
    })
}

#[tokio::test]
async fn gemini_call_sends_key_and_system_instruction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(query_param("key", "g-key"))
        .and(body_partial_json(serde_json::json!({
            "systemInstruction": { "parts": [{ "text": "sys" }] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("hello")))
        .expect(1)
        .mount(&server)
        .await;

    let service = service(&server, AiProvider::Gemini);
    let completion = service
        .call_ai("hi", Some("sys"), &CallOptions::default())
        .await
        .unwrap();
    assert_eq!(completion.text, "hello");
    assert_eq!(completion.usage.total_tokens, 150);
    server.verify().await;
}

#[tokio::test]
async fn openai_call_uses_bearer_auth_and_cost() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer o-key"))
        .and(body_partial_json(serde_json::json!({ "model": "gpt-4o-mini" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_body("ok")))
        .mount(&server)
        .await;

    let service = service(&server, AiProvider::OpenAi);
    let completion = service
        .call_ai("hi", None, &CallOptions::default())
        .await
        .unwrap();
    assert_eq!(completion.text, "ok");
    let cost = service.calculate_cost(&completion.usage);
    assert!((cost - 0.00075).abs() < 1e-12);
}

#[tokio::test]
async fn enhance_keeps_midjourney_prefix_and_flags() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_body("a sunlit oak desk by a window")),
        )
        .mount(&server)
        .await;

    let service = service(&server, AiProvider::Gemini);
    let outcome = enhance_prompt(
        &service,
        "/imagine prompt: a desk, soft light --ar 16:9 --v 6.1",
        OutputMode::Midjourney,
    )
    .await;
    assert!(outcome.success);
    assert_eq!(
        outcome.value,
        "/imagine prompt: a sunlit oak desk by a window --ar 16:9 --v 6.1"
    );
    assert_eq!(outcome.usage.unwrap().total_tokens, 150);
}

#[tokio::test]
async fn enhance_failure_falls_back_to_original() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let service = service(&server, AiProvider::OpenAi);
    let outcome = enhance_prompt(&service, "a desk", OutputMode::Standard).await;
    assert!(!outcome.success);
    assert_eq!(outcome.value, "a desk");
    assert!(outcome.error.unwrap().contains("500"));
    assert!(outcome.usage.is_none());
}

#[tokio::test]
async fn empty_enhancement_keeps_original_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_body("```\n\"\"\n```")))
        .mount(&server)
        .await;

    let service = service(&server, AiProvider::OpenAi);
    let original = "/imagine prompt: a desk --ar 16:9";
    let outcome = enhance_prompt(&service, original, OutputMode::Midjourney).await;
    assert!(!outcome.success);
    assert_eq!(outcome.value, original);
    assert!(outcome.error.is_some());
    assert_eq!(outcome.usage.unwrap().total_tokens, 2000);

    let outcome = enhance_prompt(&service, "a desk", OutputMode::Standard).await;
    assert!(!outcome.success);
    assert_eq!(outcome.value, "a desk");
}

#[tokio::test]
async fn variations_skip_preamble_lines() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_body(
            "Here are 2 variations:\n1. 3.5mm macro shot of a desk\n2. wide desk view",
        )))
        .mount(&server)
        .await;

    let service = service(&server, AiProvider::OpenAi);
    let outcome = generate_variations(&service, "a desk", 2).await;
    assert_eq!(
        outcome.value,
        vec!["3.5mm macro shot of a desk", "wide desk view"]
    );
}

#[tokio::test]
async fn variations_strip_markers_and_cap() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_body(
            "1. first idea\n\n2) second idea\n- third idea\n4. fourth idea",
        )))
        .mount(&server)
        .await;

    let service = service(&server, AiProvider::OpenAi);
    let outcome = generate_variations(&service, "a desk", 3).await;
    assert!(outcome.success);
    assert_eq!(
        outcome.value,
        vec!["first idea", "second idea", "third idea"]
    );
}

#[tokio::test]
async fn analysis_parses_json_or_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({ "messages": [{ "role": "system" }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_body(
            "```json\n{\"score\": 88, \"strengths\": [\"light\"], \"improvements\": [\"angle\"], \"keywords\": [\"desk\"]}\n```",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let service = service(&server, AiProvider::OpenAi);
    let outcome = analyze_prompt(&service, "a desk").await;
    assert!(outcome.success);
    assert_eq!(outcome.value.score, 88);
    assert_eq!(outcome.value.keywords, vec!["desk"]);
    server.verify().await;

    let garbage = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_body("Nice prompt!")))
        .mount(&garbage)
        .await;
    let service = self::service(&garbage, AiProvider::OpenAi);
    let outcome = analyze_prompt(&service, "a desk").await;
    assert!(outcome.success);
    assert_eq!(outcome.value, PromptAnalysis::fallback());
}
