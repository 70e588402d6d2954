use anyhow::Result;
use teloxide::prelude::*;

use crate::ai::AiService;
use crate::config::Config;
use crate::system_info::get_system_info;

fn ai_status(config: &Config) -> String {
    match &config.ai {
        None => "AI: disabled".to_string(),
        Some(ai) => {
            let providers: Vec<&str> = AiService::new(ai.clone())
                .available_providers()
                .into_iter()
                .map(|p| p.as_str())
                .collect();
            format!("AI: {} (default {})", providers.join(", "), ai.default_provider)
        }
    }
}

pub async fn show_system_info(bot: Bot, msg: Message, config: Config) -> Result<()> {
    tracing::debug!(chat_id = msg.chat.id.0, "Showing system info");
    let text = format!("{}\n{}", get_system_info(), ai_status(&config));
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}
