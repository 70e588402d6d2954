//! Export and report formats for a generated batch.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

pub mod portfolio;
pub mod seo;

pub use portfolio::{analyze_portfolio, PortfolioAnalysis};
pub use seo::calculate_seo_score;

use crate::catalog::Locale;
use crate::keywords::{allocate_keywords, generate_seo_title, KeywordSet};
use crate::prompt::{ContentType, GeneratedPrompt};
use crate::text_utils::{capitalize_first, truncate_with_ellipsis};

/// Title and keywords attached to a prompt for stock submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMetadata {
    pub style: String,
    pub mood: String,
    pub title: String,
    pub keywords: KeywordSet,
}

impl PromptMetadata {
    pub fn for_prompt<S: AsRef<str>>(
        prompt: &GeneratedPrompt,
        style: &str,
        mood: &str,
        locale: Locale,
        extra_context: &[S],
    ) -> Self {
        Self {
            style: style.to_string(),
            mood: mood.to_string(),
            title: generate_seo_title(&prompt.category, &prompt.theme, style, mood, locale),
            keywords: allocate_keywords(&prompt.category, style, mood, &prompt.theme, extra_context),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    pub prompt: GeneratedPrompt,
    pub metadata: Option<PromptMetadata>,
}

impl ExportEntry {
    pub fn bare(prompt: GeneratedPrompt) -> Self {
        Self {
            prompt,
            metadata: None,
        }
    }

    fn title(&self) -> String {
        match &self.metadata {
            Some(meta) => meta.title.clone(),
            None => truncate_with_ellipsis(&capitalize_first(&self.prompt.theme), 200),
        }
    }

    fn seo_score(&self) -> u8 {
        self.metadata
            .as_ref()
            .map(|m| calculate_seo_score(&m.keywords))
            .unwrap_or(0)
    }
}

/// Every export is named `stock-prompts-<epoch>.<ext>`.
pub const EXPORT_FILE_STEM: &str = "stock-prompts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Txt,
    DetailedTxt,
    Csv,
    AdobeStockJson,
    PortfolioJson,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt | ExportFormat::DetailedTxt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::AdobeStockJson | ExportFormat::PortfolioJson => "json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Txt | ExportFormat::DetailedTxt => "text/plain",
            ExportFormat::Csv => "text/csv",
            ExportFormat::AdobeStockJson | ExportFormat::PortfolioJson => "application/json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "txt" | "text" => Ok(ExportFormat::Txt),
            "detailed" | "detailed_txt" => Ok(ExportFormat::DetailedTxt),
            "csv" => Ok(ExportFormat::Csv),
            "adobe" | "json" => Ok(ExportFormat::AdobeStockJson),
            "portfolio" | "analysis" => Ok(ExportFormat::PortfolioJson),
            other => Err(format!("unknown export format '{other}'")),
        }
    }
}

/// A rendered export ready to be sent as a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub contents: String,
}

pub fn export_txt(entries: &[ExportEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "=== PROMPT {} ===", i + 1);
        let _ = writeln!(out, "{}", entry.prompt.prompt);
        out.push('\n');
    }
    out
}

fn join_or_na(words: &[String]) -> String {
    if words.is_empty() {
        "n/a".to_string()
    } else {
        words.join(", ")
    }
}

pub fn export_detailed_txt(entries: &[ExportEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let p = &entry.prompt;
        let _ = writeln!(out, "=== PROMPT {} ===", i + 1);
        let _ = writeln!(out, "Category: {}", p.category);
        let _ = writeln!(out, "Theme: {}", p.theme);
        let _ = writeln!(out, "Content: {}", p.content_type);
        let _ = writeln!(out, "Mode: {}", p.mode);
        let _ = writeln!(out, "Prompt: {}", p.prompt);
        match &entry.metadata {
            Some(meta) => {
                let _ = writeln!(out, "Title: {}", meta.title);
                let _ = writeln!(out, "Primary: {}", join_or_na(&meta.keywords.primary));
                let _ = writeln!(out, "Secondary: {}", join_or_na(&meta.keywords.secondary));
                let _ = writeln!(out, "Tertiary: {}", join_or_na(&meta.keywords.tertiary));
                let _ = writeln!(out, "Keywords: {}", meta.keywords.count);
                let _ = writeln!(out, "SEO score: {}", calculate_seo_score(&meta.keywords));
            }
            None => {
                let _ = writeln!(out, "Title: n/a");
                let _ = writeln!(out, "Keywords: n/a");
            }
        }
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

const CSV_HEADER: &str = "Index,Prompt,Category,Theme,Content Type,Mode,Style,Mood,Title,\
Primary Keywords,Secondary Keywords,Tertiary Keywords,Keyword Count,SEO Score";

pub fn export_csv(entries: &[ExportEntry]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for (i, entry) in entries.iter().enumerate() {
        let p = &entry.prompt;
        let meta = entry.metadata.as_ref();
        let tier = |select: fn(&KeywordSet) -> &Vec<String>| {
            meta.map(|m| select(&m.keywords).join("; "))
                .unwrap_or_default()
        };
        let row = [
            (i + 1).to_string(),
            p.prompt.clone(),
            p.category.clone(),
            p.theme.clone(),
            p.content_type.to_string(),
            p.mode.to_string(),
            meta.map(|m| m.style.clone()).unwrap_or_default(),
            meta.map(|m| m.mood.clone()).unwrap_or_default(),
            entry.title(),
            tier(|k| &k.primary),
            tier(|k| &k.secondary),
            tier(|k| &k.tertiary),
            meta.map(|m| m.keywords.count).unwrap_or(0).to_string(),
            entry.seo_score().to_string(),
        ];
        let line: Vec<String> = row.iter().map(|f| csv_field(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AdobeStockSubmission {
    pub submission_date: DateTime<Utc>,
    pub total_items: usize,
    pub items: Vec<AdobeStockItem>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AdobeStockItem {
    pub filename: String,
    pub title: String,
    pub keywords: Vec<String>,
    pub category: String,
    pub prompt: String,
    pub content_type: ContentType,
}

pub fn adobe_stock_submission(entries: &[ExportEntry], now: DateTime<Utc>) -> AdobeStockSubmission {
    let items = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let ext = match entry.prompt.content_type {
                ContentType::Photo => "jpg",
                ContentType::Video => "mp4",
            };
            AdobeStockItem {
                filename: format!("{}_{:03}.{ext}", entry.prompt.category, i + 1),
                title: entry.title(),
                keywords: entry
                    .metadata
                    .as_ref()
                    .map(|m| m.keywords.all.clone())
                    .unwrap_or_default(),
                category: entry.prompt.category.clone(),
                prompt: entry.prompt.prompt.clone(),
                content_type: entry.prompt.content_type,
            }
        })
        .collect::<Vec<_>>();
    AdobeStockSubmission {
        submission_date: now,
        total_items: items.len(),
        items,
    }
}

pub fn export_adobe_stock_json(entries: &[ExportEntry], now: DateTime<Utc>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&adobe_stock_submission(
        entries, now,
    ))?)
}

pub fn export_portfolio_json(entries: &[ExportEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&analyze_portfolio(entries))?)
}

/// Renders `entries` in `format`. The filename carries the Unix timestamp of
/// `now`.
pub fn render(format: ExportFormat, entries: &[ExportEntry], now: DateTime<Utc>) -> Result<ExportFile> {
    let contents = match format {
        ExportFormat::Txt => export_txt(entries),
        ExportFormat::DetailedTxt => export_detailed_txt(entries),
        ExportFormat::Csv => export_csv(entries),
        ExportFormat::AdobeStockJson => export_adobe_stock_json(entries, now)?,
        ExportFormat::PortfolioJson => export_portfolio_json(entries)?,
    };
    tracing::debug!(?format, entries = entries.len(), bytes = contents.len(), "Rendered export");
    Ok(ExportFile {
        filename: format!(
            "{EXPORT_FILE_STEM}-{}.{}",
            now.timestamp(),
            format.extension()
        ),
        mime_type: format.mime_type(),
        contents,
    })
}
