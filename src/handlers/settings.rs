use anyhow::Result;
use teloxide::prelude::*;

use crate::catalog::styles::{CAMERA_KEYS, COLOR_KEYS, COMPOSITION_KEYS, LIGHTING_KEYS};
use crate::catalog::{category, CATEGORIES, MOODS, STYLES};
use crate::messages::setting_updated;
use crate::notify::NotificationQueue;
use crate::prompt::{midjourney_flags, Settings, SettingsError};
use crate::session::SessionStore;

use super::notify::flush_notifications;

/// Settings addressable by a single-argument command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Category,
    Theme,
    Style,
    Mood,
    Mode,
    Content,
    Count,
    Lighting,
    Composition,
    Color,
    Camera,
    Locale,
}

impl SettingKind {
    pub fn label(self) -> &'static str {
        match self {
            SettingKind::Category => "Category",
            SettingKind::Theme => "Theme",
            SettingKind::Style => "Style",
            SettingKind::Mood => "Mood",
            SettingKind::Mode => "Output mode",
            SettingKind::Content => "Content type",
            SettingKind::Count => "Prompt count",
            SettingKind::Lighting => "Lighting",
            SettingKind::Composition => "Composition",
            SettingKind::Color => "Color palette",
            SettingKind::Camera => "Camera",
            SettingKind::Locale => "Locale",
        }
    }

    pub fn apply(self, settings: &mut Settings, value: &str) -> Result<(), SettingsError> {
        match self {
            SettingKind::Category => settings.set_category(value),
            SettingKind::Theme => settings.set_theme(value),
            SettingKind::Style => settings.set_style(value),
            SettingKind::Mood => settings.set_mood(value),
            SettingKind::Mode => settings.set_output_mode(value),
            SettingKind::Content => settings.set_content_type(value),
            SettingKind::Count => settings.set_prompt_count(value),
            SettingKind::Lighting => settings.set_lighting(value),
            SettingKind::Composition => settings.set_composition(value),
            SettingKind::Color => settings.set_color(value),
            SettingKind::Camera => settings.set_camera(value),
            SettingKind::Locale => settings.set_locale(value),
        }
    }

    pub fn current(self, settings: &Settings) -> String {
        match self {
            SettingKind::Category => settings.selected_category.clone(),
            SettingKind::Theme => settings.theme.to_string(),
            SettingKind::Style => settings.style.clone(),
            SettingKind::Mood => settings.mood.clone(),
            SettingKind::Mode => settings.output_mode.to_string(),
            SettingKind::Content => settings.content_type.to_string(),
            SettingKind::Count => settings.prompt_count.to_string(),
            SettingKind::Lighting => settings.lighting.clone(),
            SettingKind::Composition => settings.composition.clone(),
            SettingKind::Color => settings.color.clone(),
            SettingKind::Camera => settings.camera.clone(),
            SettingKind::Locale => settings.locale.to_string(),
        }
    }

    /// Choices shown when the command is sent without an argument.
    pub fn options(self, settings: &Settings) -> String {
        let list = match self {
            SettingKind::Category => CATEGORIES
                .iter()
                .map(|c| format!("{} {} - {}", c.icon, c.key, c.display_name(settings.locale)))
                .collect::<Vec<_>>()
                .join("\n"),
            SettingKind::Theme => {
                let themes = category(&settings.selected_category)
                    .map(|c| c.themes)
                    .unwrap_or(&[]);
                let mut lines = vec!["auto".to_string(), "manual".to_string()];
                lines.extend(themes.iter().enumerate().map(|(i, t)| format!("{} - {t}", i + 1)));
                lines.join("\n")
            }
            SettingKind::Style => keys(STYLES.iter().map(|s| s.key)),
            SettingKind::Mood => keys(MOODS.iter().map(|m| m.key)),
            SettingKind::Mode => "standard, midjourney".to_string(),
            SettingKind::Content => "photo, video".to_string(),
            SettingKind::Count => "1 to 50".to_string(),
            SettingKind::Lighting => keys(LIGHTING_KEYS.iter().copied()),
            SettingKind::Composition => keys(COMPOSITION_KEYS.iter().copied()),
            SettingKind::Color => keys(COLOR_KEYS.iter().copied()),
            SettingKind::Camera => keys(CAMERA_KEYS.iter().copied()),
            SettingKind::Locale => "en, tr".to_string(),
        };
        format!(
            "{}: {}\n\nOptions:\n{}",
            self.label(),
            self.current(settings),
            list
        )
    }
}

fn keys<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

pub async fn show_settings(bot: Bot, msg: Message, sessions: SessionStore) -> Result<()> {
    let settings = sessions.settings(msg.chat.id.0).await;
    bot.send_message(msg.chat.id, settings.summary()).await?;
    Ok(())
}

pub async fn update_setting(
    bot: Bot,
    msg: Message,
    sessions: SessionStore,
    kind: SettingKind,
    arg: String,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let value = arg.trim();
    if value.is_empty() {
        let settings = sessions.settings(chat_id.0).await;
        bot.send_message(chat_id, kind.options(&settings)).await?;
        return Ok(());
    }

    let outcome = sessions
        .with(chat_id.0, |s| {
            kind.apply(&mut s.settings, value)
                .map(|()| kind.current(&s.settings))
        })
        .await;

    let mut queue = NotificationQueue::new();
    match outcome {
        Ok(current) => {
            tracing::debug!(chat_id = chat_id.0, setting = kind.label(), %current, "Setting updated");
            queue.success(setting_updated(kind.label(), &current));
        }
        Err(err) => {
            tracing::debug!(chat_id = chat_id.0, error = %err, "Rejected setting");
            queue.error(err.to_string());
        }
    }
    flush_notifications(&bot, chat_id, &mut queue).await
}

/// `/mj NAME VALUE`; without arguments shows the current flags.
pub async fn update_midjourney(
    bot: Bot,
    msg: Message,
    sessions: SessionStore,
    arg: String,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let arg = arg.trim();
    let mut queue = NotificationQueue::new();

    let Some((name, value)) = arg.split_once(char::is_whitespace) else {
        if arg.is_empty() {
            let settings = sessions.settings(chat_id.0).await;
            bot.send_message(chat_id, midjourney_flags(&settings.midjourney))
                .await?;
        } else {
            queue.error(format!("Usage: /mj {arg} VALUE"));
        }
        return flush_notifications(&bot, chat_id, &mut queue).await;
    };

    let outcome = sessions
        .with(chat_id.0, |s| {
            s.settings
                .midjourney
                .set(name, value.trim())
                .map(|()| midjourney_flags(&s.settings.midjourney))
        })
        .await;
    match outcome {
        Ok(flags) => queue.success(flags),
        Err(err) => queue.error(err.to_string()),
    }
    flush_notifications(&bot, chat_id, &mut queue).await
}
