use std::env;
use std::time::Duration;

use crate::ai::config::AiConfig;

pub const DEFAULT_DB_URL: &str = "sqlite:stockprompt.db";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_GENERATION_DELAY_MS: u64 = 800;

#[derive(Clone, Debug)]
pub struct Config {
    pub db_url: String,
    pub db_max_connections: u32,
    /// Pause with a typing indicator before a generated batch is sent.
    pub generation_delay: Duration,
    pub ai: Option<AiConfig>,
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(var = name, value = %raw, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let db_url = env::var("DB_URL").unwrap_or_else(|_| DEFAULT_DB_URL.to_string());
        let db_max_connections = parse_env("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS).max(1);
        let generation_delay =
            Duration::from_millis(parse_env("GENERATION_DELAY_MS", DEFAULT_GENERATION_DELAY_MS));
        let ai = AiConfig::from_env();
        Self {
            db_url,
            db_max_connections,
            generation_delay,
            ai,
        }
    }
}
