use std::time::Duration;
use stockprompt::ai::{AiConfig, AiProvider};
use stockprompt::tests::util::init_test_db;
use stockprompt::{schema, Config, SessionStore};
use teloxide::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MESSAGE_RESPONSE: &str =
    r#"{"ok":true,"result":{"message_id":1,"date":0,"chat":{"id":1,"type":"private"},"text":"ok"}}"#;

fn me() -> teloxide::types::Me {
    teloxide::types::Me {
        user: teloxide::types::User {
            id: teloxide::types::UserId(1),
            is_bot: true,
            first_name: "Test".into(),
            last_name: None,
            username: Some("testbot".into()),
            language_code: None,
            is_premium: false,
            added_to_attachment_menu: false,
        },
        can_join_groups: true,
        can_read_all_group_messages: true,
        supports_inline_queries: false,
        can_connect_to_business: false,
    }
}

fn text_update(id: i32, text: &str) -> Update {
    let entities = if text.starts_with('/') {
        let len = text.split_whitespace().next().unwrap_or("").len();
        format!(r#","entities":[{{"type":"bot_command","offset":0,"length":{len}}}]"#)
    } else {
        String::new()
    };
    let raw = format!(
        r#"{{"update_id":{id},"message":{{"message_id":{id},"date":0,"chat":{{"id":1,"type":"private"}},"text":{}{entities}}}}}"#,
        serde_json::to_string(text).unwrap()
    );
    serde_json::from_str(&raw).unwrap()
}

fn test_config() -> Config {
    Config {
        db_url: "sqlite::memory:".into(),
        db_max_connections: 1,
        generation_delay: Duration::ZERO,
        ai: None,
    }
}

async fn mount(server: &MockServer, endpoint: &str, body: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path(format!("/botTEST/{endpoint}")))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json"))
        .expect(times)
        .mount(server)
        .await;
}

#[tokio::test]
async fn category_generate_export_flow() {
    let server = MockServer::start().await;
    // category notice, batch, batch notice, export notice
    mount(&server, "SendMessage", MESSAGE_RESPONSE, 4).await;
    mount(&server, "SendChatAction", r#"{"ok":true,"result":true}"#, 1).await;
    mount(&server, "SendDocument", MESSAGE_RESPONSE, 1).await;

    let bot = Bot::new("TEST").set_api_url(reqwest::Url::parse(&server.uri()).unwrap());
    let db = init_test_db().await;
    let config = test_config();
    let sessions = SessionStore::new();
    let handler = schema();

    for (id, text) in [(1, "/category food"), (2, "/generate"), (3, "/export csv")] {
        let _ = handler
            .dispatch(dptree::deps![
                text_update(id, text),
                bot.clone(),
                me(),
                db.clone(),
                config.clone(),
                sessions.clone()
            ])
            .await;
    }

    let settings = sessions.settings(1).await;
    assert_eq!(settings.selected_category, "food");
    let batch = sessions.batch(1).await;
    assert_eq!(batch.prompts.len(), 5);
    assert!(batch.prompts.iter().all(|p| p.category == "food"));

    server.verify().await;
}

#[tokio::test]
async fn plain_text_sets_manual_keyword() {
    let server = MockServer::start().await;
    mount(&server, "SendMessage", MESSAGE_RESPONSE, 1).await;

    let bot = Bot::new("TEST").set_api_url(reqwest::Url::parse(&server.uri()).unwrap());
    let db = init_test_db().await;
    let sessions = SessionStore::new();

    let _ = schema()
        .dispatch(dptree::deps![
            text_update(1, "glass desk"),
            bot,
            me(),
            db,
            test_config(),
            sessions.clone()
        ])
        .await;

    assert_eq!(sessions.settings(1).await.manual_keyword, "glass desk");
    server.verify().await;
}

#[tokio::test]
async fn ai_commands_without_keys_report_disabled() {
    let server = MockServer::start().await;
    // enhance without a batch warns first; provider reports AI disabled
    mount(&server, "SendMessage", MESSAGE_RESPONSE, 2).await;

    let bot = Bot::new("TEST").set_api_url(reqwest::Url::parse(&server.uri()).unwrap());
    let db = init_test_db().await;
    let sessions = SessionStore::new();
    let handler = schema();

    for (id, text) in [(1, "/enhance 1"), (2, "/provider openai")] {
        let _ = handler
            .dispatch(dptree::deps![
                text_update(id, text),
                bot.clone(),
                me(),
                db.clone(),
                test_config(),
                sessions.clone()
            ])
            .await;
    }

    assert!(db.get_ai_preference(ChatId(1)).await.unwrap().is_none());
    server.verify().await;
}

#[tokio::test]
async fn enhance_replies_without_touching_the_batch() {
    let telegram = MockServer::start().await;
    // batch, batch notice, enhanced text, enhance notice
    mount(&telegram, "SendMessage", MESSAGE_RESPONSE, 4).await;
    mount(&telegram, "SendChatAction", r#"{"ok":true,"result":true}"#, 2).await;

    let ai = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{ "message": { "content": "a sunlit oak desk" } }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
        })))
        .expect(1)
        .mount(&ai)
        .await;

    let bot = Bot::new("TEST").set_api_url(reqwest::Url::parse(&telegram.uri()).unwrap());
    let db = init_test_db().await;
    let config = Config {
        ai: Some(AiConfig {
            gemini_api_key: None,
            openai_api_key: Some("o-key".into()),
            default_provider: AiProvider::OpenAi,
            gemini_model: "gemini-1.5-flash".into(),
            openai_model: "gpt-4o-mini".into(),
            gemini_api_url: None,
            openai_chat_url: Some(format!("{}/v1/chat/completions", ai.uri())),
        }),
        ..test_config()
    };
    let sessions = SessionStore::new();
    let handler = schema();

    let mut before = None;
    for (id, text) in [(1, "/generate"), (2, "/enhance 2")] {
        let _ = handler
            .dispatch(dptree::deps![
                text_update(id, text),
                bot.clone(),
                me(),
                db.clone(),
                config.clone(),
                sessions.clone()
            ])
            .await;
        if before.is_none() {
            before = Some(sessions.batch(1).await.prompts);
        }
    }

    assert_eq!(sessions.batch(1).await.prompts, before.unwrap());
    let usage = db.get_usage(ChatId(1), AiProvider::OpenAi).await.unwrap();
    assert_eq!(usage.requests, 1);
    assert_eq!(usage.tokens, 15);

    telegram.verify().await;
    ai.verify().await;
}
