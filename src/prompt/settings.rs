use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::catalog::styles::{CAMERA_KEYS, COLOR_KEYS, COMPOSITION_KEYS, LIGHTING_KEYS};
use crate::catalog::{self, Locale};

pub const MAX_PROMPT_COUNT: usize = 50;
pub const DEFAULT_PROMPT_COUNT: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("unknown style '{0}'")]
    UnknownStyle(String),
    #[error("unknown mood '{0}'")]
    UnknownMood(String),
    #[error("'{value}' is not a valid {field}")]
    InvalidValue { field: &'static str, value: String },
    #[error("unknown Midjourney parameter '{0}'")]
    UnknownParameter(String),
    #[error("theme {0} does not exist for this category")]
    ThemeOutOfRange(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Standard,
    Midjourney,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Standard => f.write_str("standard"),
            OutputMode::Midjourney => f.write_str("midjourney"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(OutputMode::Standard),
            "midjourney" | "mj" => Ok(OutputMode::Midjourney),
            other => Err(SettingsError::InvalidValue {
                field: "output mode",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Photo,
    Video,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Photo => f.write_str("photo"),
            ContentType::Video => f.write_str("video"),
        }
    }
}

impl FromStr for ContentType {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "photo" => Ok(ContentType::Photo),
            "video" => Ok(ContentType::Video),
            other => Err(SettingsError::InvalidValue {
                field: "content type",
                value: other.to_string(),
            }),
        }
    }
}

/// How the theme of each prompt is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    /// Random pick from the category's themes.
    #[default]
    Auto,
    /// Use the free-text manual keyword.
    Manual,
    /// A theme text used verbatim.
    Predefined(String),
}

impl ThemeChoice {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "auto" => ThemeChoice::Auto,
            "manual" => ThemeChoice::Manual,
            other => ThemeChoice::Predefined(other.to_string()),
        }
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeChoice::Auto => f.write_str("auto"),
            ThemeChoice::Manual => f.write_str("manual"),
            ThemeChoice::Predefined(theme) => f.write_str(theme),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MidjourneyParams {
    pub aspect_ratio: String,
    pub version: String,
    pub chaos: u8,
    pub stylize: u16,
    pub weird: u16,
    pub quality: String,
    pub raw: bool,
    pub tile: bool,
    pub niji: bool,
    /// Comma separated, user supplied.
    pub exclusions: String,
}

impl Default for MidjourneyParams {
    fn default() -> Self {
        Self {
            aspect_ratio: "1:1".to_string(),
            version: "6.1".to_string(),
            chaos: 0,
            stylize: 100,
            weird: 0,
            quality: "1".to_string(),
            raw: false,
            tile: false,
            niji: false,
            exclusions: String::new(),
        }
    }
}

const QUALITY_VALUES: &[&str] = &["0.25", "0.5", "1", "2"];

impl MidjourneyParams {
    /// Applies one `name value` pair. Numbers are clamped to their documented
    /// ranges.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), SettingsError> {
        let value = value.trim();
        match name.trim().to_lowercase().as_str() {
            "ar" | "aspect" | "aspect_ratio" => {
                if !is_aspect_ratio(value) {
                    return Err(invalid("aspect ratio", value));
                }
                self.aspect_ratio = value.to_string();
            }
            "v" | "version" => {
                if value.is_empty() || value.parse::<f32>().is_err() {
                    return Err(invalid("version", value));
                }
                self.version = value.to_string();
            }
            "chaos" => self.chaos = parse_clamped(value, "chaos", 100)? as u8,
            "stylize" | "s" => self.stylize = parse_clamped(value, "stylize", 1000)? as u16,
            "weird" => self.weird = parse_clamped(value, "weird", 3000)? as u16,
            "q" | "quality" => {
                if !QUALITY_VALUES.contains(&value) {
                    return Err(invalid("quality", value));
                }
                self.quality = value.to_string();
            }
            "raw" => self.raw = parse_flag(value, "raw")?,
            "tile" => self.tile = parse_flag(value, "tile")?,
            "niji" => self.niji = parse_flag(value, "niji")?,
            "no" | "exclude" => self.exclusions = value.to_string(),
            other => return Err(SettingsError::UnknownParameter(other.to_string())),
        }
        Ok(())
    }
}

fn known_key(value: &str, keys: &[&str], field: &'static str) -> Result<String, SettingsError> {
    let key = value.trim().to_lowercase();
    if keys.contains(&key.as_str()) {
        Ok(key)
    } else {
        Err(invalid(field, value))
    }
}

fn invalid(field: &'static str, value: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field,
        value: value.to_string(),
    }
}

fn is_aspect_ratio(value: &str) -> bool {
    match value.split_once(':') {
        Some((w, h)) => {
            matches!(w.parse::<u32>(), Ok(n) if n > 0) && matches!(h.parse::<u32>(), Ok(n) if n > 0)
        }
        None => false,
    }
}

fn parse_clamped(value: &str, field: &'static str, max: u32) -> Result<u32, SettingsError> {
    let n: i64 = value.parse().map_err(|_| invalid(field, value))?;
    Ok(n.clamp(0, max as i64) as u32)
}

fn parse_flag(value: &str, field: &'static str) -> Result<bool, SettingsError> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(invalid(field, value)),
    }
}

/// The user's current choices for one chat session.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub selected_category: String,
    pub theme: ThemeChoice,
    pub manual_keyword: String,
    pub style: String,
    pub mood: String,
    pub output_mode: OutputMode,
    pub content_type: ContentType,
    pub prompt_count: usize,
    pub lighting: String,
    pub composition: String,
    pub color: String,
    pub camera: String,
    pub locale: Locale,
    pub midjourney: MidjourneyParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selected_category: "business".to_string(),
            theme: ThemeChoice::Auto,
            manual_keyword: String::new(),
            style: "cinematic".to_string(),
            mood: "calm".to_string(),
            output_mode: OutputMode::Standard,
            content_type: ContentType::Photo,
            prompt_count: DEFAULT_PROMPT_COUNT,
            lighting: "natural".to_string(),
            composition: "rule_of_thirds".to_string(),
            color: "vibrant".to_string(),
            camera: "35mm".to_string(),
            locale: Locale::En,
            midjourney: MidjourneyParams::default(),
        }
    }
}

impl Settings {
    /// Selecting a new category resets a predefined theme, which belongs to
    /// the old category.
    pub fn set_category(&mut self, key: &str) -> Result<(), SettingsError> {
        let key = key.trim().to_lowercase();
        if catalog::category(&key).is_none() {
            return Err(SettingsError::UnknownCategory(key));
        }
        if matches!(self.theme, ThemeChoice::Predefined(_)) {
            self.theme = ThemeChoice::Auto;
        }
        self.selected_category = key;
        Ok(())
    }

    /// Accepts `auto`, `manual`, a 1-based index into the selected category's
    /// themes, or any other text used verbatim.
    pub fn set_theme(&mut self, value: &str) -> Result<(), SettingsError> {
        let value = value.trim();
        if let Ok(index) = value.parse::<usize>() {
            let themes = catalog::category(&self.selected_category)
                .map(|c| c.themes)
                .unwrap_or(&[]);
            let theme = index
                .checked_sub(1)
                .and_then(|i| themes.get(i))
                .ok_or(SettingsError::ThemeOutOfRange(index))?;
            self.theme = ThemeChoice::Predefined((*theme).to_string());
            return Ok(());
        }
        self.theme = ThemeChoice::parse(value);
        Ok(())
    }

    pub fn set_manual_keyword(&mut self, keyword: &str) {
        self.manual_keyword = keyword.trim().to_string();
        self.theme = ThemeChoice::Manual;
    }

    pub fn set_style(&mut self, key: &str) -> Result<(), SettingsError> {
        let key = key.trim().to_lowercase();
        if catalog::style(&key).is_none() {
            return Err(SettingsError::UnknownStyle(key));
        }
        self.style = key;
        Ok(())
    }

    pub fn set_mood(&mut self, key: &str) -> Result<(), SettingsError> {
        let key = key.trim().to_lowercase();
        if catalog::mood(&key).is_none() {
            return Err(SettingsError::UnknownMood(key));
        }
        self.mood = key;
        Ok(())
    }

    pub fn set_prompt_count(&mut self, value: &str) -> Result<(), SettingsError> {
        let n: usize = value
            .trim()
            .parse()
            .map_err(|_| invalid("prompt count", value))?;
        self.prompt_count = n.clamp(1, MAX_PROMPT_COUNT);
        Ok(())
    }

    pub fn set_output_mode(&mut self, value: &str) -> Result<(), SettingsError> {
        self.output_mode = value.parse()?;
        Ok(())
    }

    pub fn set_content_type(&mut self, value: &str) -> Result<(), SettingsError> {
        self.content_type = value.parse()?;
        Ok(())
    }

    pub fn set_lighting(&mut self, value: &str) -> Result<(), SettingsError> {
        self.lighting = known_key(value, LIGHTING_KEYS, "lighting")?;
        Ok(())
    }

    pub fn set_composition(&mut self, value: &str) -> Result<(), SettingsError> {
        self.composition = known_key(value, COMPOSITION_KEYS, "composition")?;
        Ok(())
    }

    pub fn set_color(&mut self, value: &str) -> Result<(), SettingsError> {
        self.color = known_key(value, COLOR_KEYS, "color palette")?;
        Ok(())
    }

    pub fn set_camera(&mut self, value: &str) -> Result<(), SettingsError> {
        self.camera = known_key(value, CAMERA_KEYS, "camera")?;
        Ok(())
    }

    pub fn set_locale(&mut self, value: &str) -> Result<(), SettingsError> {
        self.locale = value.parse().map_err(|_| invalid("locale", value))?;
        Ok(())
    }

    /// Human readable summary for the settings command.
    pub fn summary(&self) -> String {
        let mj = &self.midjourney;
        format!(
            "Category: {}\nTheme: {}\nManual keyword: {}\nStyle: {}\nMood: {}\nMode: {}\n\
             Content: {}\nCount: {}\nLighting: {}\nComposition: {}\nColor: {}\nCamera: {}\n\
             Locale: {}\nMidjourney: --ar {} --v {} chaos {} stylize {} weird {} q {} raw {} tile {} niji {}\n\
             Exclusions: {}",
            self.selected_category,
            self.theme,
            if self.manual_keyword.is_empty() { "-" } else { self.manual_keyword.as_str() },
            self.style,
            self.mood,
            self.output_mode,
            self.content_type,
            self.prompt_count,
            self.lighting,
            self.composition,
            self.color,
            self.camera,
            self.locale,
            mj.aspect_ratio,
            mj.version,
            mj.chaos,
            mj.stylize,
            mj.weird,
            mj.quality,
            mj.raw,
            mj.tile,
            mj.niji,
            if mj.exclusions.is_empty() { "-" } else { mj.exclusions.as_str() },
        )
    }
}
