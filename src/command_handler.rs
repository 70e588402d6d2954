use anyhow::Result;
use teloxide::prelude::*;

use crate::commands::Command;
use crate::config::Config;
use crate::db::Database;
use crate::handlers::{
    analyze, enhance, export_batch, generate, help, select_provider, show_keywords,
    show_settings, show_system_info, show_title, show_usage, update_midjourney, update_setting,
    variations, SettingKind,
};
use crate::session::SessionStore;

pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    db: Database,
    config: Config,
    sessions: SessionStore,
) -> Result<()> {
    tracing::debug!(chat_id = msg.chat.id.0, command = ?cmd, "Handling command");
    match cmd {
        Command::Start | Command::Help => help(bot, msg).await?,
        Command::Generate => generate(bot, msg, sessions, config, false).await?,
        Command::Random => generate(bot, msg, sessions, config, true).await?,
        Command::Settings => show_settings(bot, msg, sessions).await?,
        Command::Category(arg) => {
            update_setting(bot, msg, sessions, SettingKind::Category, arg).await?
        }
        Command::Theme(arg) => update_setting(bot, msg, sessions, SettingKind::Theme, arg).await?,
        Command::Style(arg) => update_setting(bot, msg, sessions, SettingKind::Style, arg).await?,
        Command::Mood(arg) => update_setting(bot, msg, sessions, SettingKind::Mood, arg).await?,
        Command::Mode(arg) => update_setting(bot, msg, sessions, SettingKind::Mode, arg).await?,
        Command::Content(arg) => {
            update_setting(bot, msg, sessions, SettingKind::Content, arg).await?
        }
        Command::Count(arg) => update_setting(bot, msg, sessions, SettingKind::Count, arg).await?,
        Command::Lighting(arg) => {
            update_setting(bot, msg, sessions, SettingKind::Lighting, arg).await?
        }
        Command::Composition(arg) => {
            update_setting(bot, msg, sessions, SettingKind::Composition, arg).await?
        }
        Command::Color(arg) => update_setting(bot, msg, sessions, SettingKind::Color, arg).await?,
        Command::Camera(arg) => update_setting(bot, msg, sessions, SettingKind::Camera, arg).await?,
        Command::Locale(arg) => update_setting(bot, msg, sessions, SettingKind::Locale, arg).await?,
        Command::Mj(arg) => update_midjourney(bot, msg, sessions, arg).await?,
        Command::Keywords(arg) => show_keywords(bot, msg, sessions, arg).await?,
        Command::Title(arg) => show_title(bot, msg, sessions, arg).await?,
        Command::Export(arg) => export_batch(bot, msg, sessions, arg).await?,
        Command::Enhance(arg) => enhance(bot, msg, db, config, sessions, arg).await?,
        Command::Variations(arg) => variations(bot, msg, db, config, sessions, arg).await?,
        Command::Analyze(arg) => analyze(bot, msg, db, config, sessions, arg).await?,
        Command::Provider(arg) => select_provider(bot, msg, db, config, arg).await?,
        Command::Usage(arg) => show_usage(bot, msg, db, arg).await?,
        Command::Info => show_system_info(bot, msg, config).await?,
    }
    Ok(())
}
