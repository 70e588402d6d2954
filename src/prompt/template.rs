use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::midjourney::midjourney_flags;
use super::settings::{ContentType, OutputMode, Settings, ThemeChoice};
use crate::catalog::styles::{
    camera_for, color_for, composition_for, lighting_for, CAMERA, COLOR_PALETTE, COMPOSITION,
    DEFAULT_CAMERA, DEFAULT_COLOR, DEFAULT_COMPOSITION, DEFAULT_LIGHTING, DEFAULT_MOOD_CLAUSE,
    DEFAULT_STYLE_CLAUSE, LIGHTING, QUALITY,
};
use crate::catalog::{self, Category, CATEGORIES};
use crate::random::{random_suffix, RandomSource};

pub const MIDJOURNEY_PREFIX: &str = "/imagine prompt:";
pub const STANDARD_CLOSING_CLAUSE: &str =
    "high resolution, commercial stock quality, no people, no text, no logos";

/// One assembled prompt and the theme that went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartPrompt {
    pub prompt: String,
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPrompt {
    pub id: String,
    pub prompt: String,
    pub category: String,
    pub theme: String,
    pub content_type: ContentType,
    pub mode: OutputMode,
    pub created_at: DateTime<Utc>,
}

fn resolve_theme<R: RandomSource>(
    category: &Category,
    choice: &ThemeChoice,
    manual_keyword: &str,
    rng: &mut R,
) -> String {
    match choice {
        ThemeChoice::Predefined(theme) => theme.clone(),
        ThemeChoice::Manual if !manual_keyword.trim().is_empty() => {
            manual_keyword.trim().to_string()
        }
        ThemeChoice::Manual | ThemeChoice::Auto => rng
            .pick(category.themes)
            .map(|t| t.to_string())
            .unwrap_or_default(),
    }
}

fn content_lead(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Photo => "Professional stock photo of",
        ContentType::Video => "Stock video footage of",
    }
}

/// Builds one prompt for `category_key`. `None` when the category does not
/// exist.
pub fn generate_smart_prompt<R: RandomSource>(
    category_key: &str,
    full_random: bool,
    settings: &Settings,
    theme_override: Option<&ThemeChoice>,
    rng: &mut R,
) -> Option<SmartPrompt> {
    let Some(category) = catalog::category(category_key) else {
        warn!(category = category_key, "Unknown category, skipping prompt");
        return None;
    };

    let choice = theme_override.unwrap_or(&ThemeChoice::Auto);
    let theme = resolve_theme(category, choice, &settings.manual_keyword, rng);

    let (lighting, composition, color, camera) = if full_random {
        (
            *rng.pick(LIGHTING).unwrap_or(&DEFAULT_LIGHTING),
            *rng.pick(COMPOSITION).unwrap_or(&DEFAULT_COMPOSITION),
            *rng.pick(COLOR_PALETTE).unwrap_or(&DEFAULT_COLOR),
            *rng.pick(CAMERA).unwrap_or(&DEFAULT_CAMERA),
        )
    } else {
        (
            lighting_for(&settings.lighting),
            composition_for(&settings.composition),
            color_for(&settings.color),
            camera_for(&settings.camera),
        )
    };
    let quality = rng.pick(QUALITY).copied().unwrap_or("highly detailed");
    let style = catalog::style(&settings.style)
        .map(|s| s.clause)
        .unwrap_or(DEFAULT_STYLE_CLAUSE);
    let mood = catalog::mood(&settings.mood)
        .map(|m| m.clause)
        .unwrap_or(DEFAULT_MOOD_CLAUSE);

    let subject = format!("{} {}", content_lead(settings.content_type), theme);
    let body = [
        subject.as_str(),
        style,
        mood,
        lighting,
        composition,
        color,
        camera,
        quality,
    ]
    .join(", ");

    let prompt = match settings.output_mode {
        OutputMode::Midjourney => format!(
            "{MIDJOURNEY_PREFIX} {body} {}",
            midjourney_flags(&settings.midjourney)
        ),
        OutputMode::Standard => format!("{body}, {STANDARD_CLOSING_CLAUSE}"),
    };
    trace!(category = category_key, %theme, %prompt, "Assembled prompt");

    Some(SmartPrompt { prompt, theme })
}

fn prompt_id<R: RandomSource>(now: DateTime<Utc>, rng: &mut R) -> String {
    format!("{}-{}", now.timestamp_millis(), random_suffix(rng))
}

/// Builds a batch of `settings.prompt_count` prompts.
///
/// In full random mode every slot draws its own category and theme; otherwise
/// the whole batch uses the selected category and theme choice. Slots whose
/// category is unknown are skipped, so the batch may come out shorter.
pub fn generate_prompts<R: RandomSource>(
    settings: &Settings,
    full_random: bool,
    rng: &mut R,
) -> Vec<GeneratedPrompt> {
    let mut prompts = Vec::with_capacity(settings.prompt_count);
    for _ in 0..settings.prompt_count {
        let (category_key, choice) = if full_random {
            let key = rng.pick(CATEGORIES).map(|c| c.key).unwrap_or_default();
            (key, ThemeChoice::Auto)
        } else {
            (settings.selected_category.as_str(), settings.theme.clone())
        };

        let Some(smart) = generate_smart_prompt(category_key, full_random, settings, Some(&choice), rng)
        else {
            continue;
        };

        let now = Utc::now();
        prompts.push(GeneratedPrompt {
            id: prompt_id(now, rng),
            prompt: smart.prompt,
            category: category_key.to_string(),
            theme: smart.theme,
            content_type: settings.content_type,
            mode: settings.output_mode,
            created_at: now,
        });
    }
    debug!(
        requested = settings.prompt_count,
        generated = prompts.len(),
        full_random,
        "Generated prompt batch"
    );
    prompts
}
