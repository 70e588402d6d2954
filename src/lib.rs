use anyhow::Result;
use dotenvy::dotenv;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

pub mod ai;
pub mod catalog;
pub mod command_handler;
pub mod commands;
pub mod config;
pub mod db;
pub mod export;
pub mod handlers;
pub mod keywords;
pub mod messages;
pub mod notify;
pub mod prompt;
pub mod random;
pub mod session;
pub mod system_info;
pub mod text_utils;


pub use commands::Command;
pub use config::Config;
pub use db::Database;
pub use session::SessionStore;

/// Update tree shared by [`run`] and the dispatcher tests. Expects
/// `Database`, `Config` and `SessionStore` among the dependencies.
pub fn schema() -> UpdateHandler<anyhow::Error> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(command_handler::handle_command),
        )
        .branch(dptree::endpoint(handlers::set_manual_keyword_from_text))
}

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();

    tracing::info!("Starting stock prompt bot...");
    if config.ai.is_none() {
        tracing::warn!("No AI provider key configured, AI commands are disabled");
    }

    let bot = Bot::from_env();
    let db = Database::open(&config.db_url, config.db_max_connections).await?;
    tracing::info!("Database ready.");

    if let Err(err) = bot.set_my_commands(Command::bot_commands()).await {
        tracing::warn!(error = %err, "Failed to register bot commands");
    }

    let sessions = SessionStore::new();
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![db, config, sessions])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
