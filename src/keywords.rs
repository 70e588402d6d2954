//! Adobe Stock keyword allocation and SEO title synthesis.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::catalog::keywords::{
    category_keywords, mood_keywords, style_keywords, QUALITY_KEYWORDS, TECHNICAL_KEYWORDS,
    TRENDING_KEYWORDS,
};
use crate::catalog::{self, Locale};
use crate::text_utils::truncate_with_ellipsis;

/// Adobe Stock accepts at most 49 keywords per asset.
pub const MAX_KEYWORDS: usize = 49;
pub const PRIMARY_SLOTS: usize = 10;
pub const SECONDARY_SLOTS: usize = 20;
pub const MAX_TITLE_LEN: usize = 200;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub tertiary: Vec<String>,
    pub all: Vec<String>,
    pub count: usize,
}

impl KeywordSet {
    /// Slices an ordered keyword list into tiers by position.
    fn from_ordered(all: Vec<String>) -> Self {
        let primary_end = all.len().min(PRIMARY_SLOTS);
        let secondary_end = all.len().min(PRIMARY_SLOTS + SECONDARY_SLOTS);
        Self {
            primary: all[..primary_end].to_vec(),
            secondary: all[primary_end..secondary_end].to_vec(),
            tertiary: all[secondary_end..].to_vec(),
            count: all.len(),
            all,
        }
    }
}

/// Insertion-ordered set capped at [`MAX_KEYWORDS`]. Duplicates are detected
/// case-insensitively; the first spelling wins and is kept as given.
struct KeywordBudget {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl KeywordBudget {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            ordered: Vec::with_capacity(MAX_KEYWORDS),
        }
    }

    fn is_full(&self) -> bool {
        self.ordered.len() >= MAX_KEYWORDS
    }

    fn insert(&mut self, keyword: &str) -> bool {
        if self.is_full() {
            return false;
        }
        let keyword = keyword.trim();
        if keyword.is_empty() || !self.seen.insert(keyword.to_lowercase()) {
            return false;
        }
        self.ordered.push(keyword.to_string());
        true
    }

    /// Takes at most `limit` items from `words`, counting only the ones that
    /// were new.
    fn extend<S: AsRef<str>>(&mut self, words: &[S], limit: usize) {
        let mut taken = 0;
        for word in words {
            if taken >= limit || self.is_full() {
                break;
            }
            if self.insert(word.as_ref()) {
                taken += 1;
            }
        }
    }
}

/// Builds the keyword set for one asset.
///
/// Keywords are added in priority order (category primary, style, mood,
/// category secondary, universal quality and technical, trending, caller
/// extras, category tertiary) until 49 are collected. The reported tiers are
/// positional slices of the final list, not the table a keyword came from.
pub fn allocate_keywords<S: AsRef<str>>(
    category: &str,
    style: &str,
    mood: &str,
    theme: &str,
    extra_context: &[S],
) -> KeywordSet {
    let mut budget = KeywordBudget::new();
    let tiers = category_keywords(category);
    if tiers.is_none() {
        warn!(category, "No keyword tables for category");
    }

    if let Some(tiers) = tiers {
        budget.extend(tiers.primary, 10);
    }
    budget.extend(style_keywords(style), 3);
    budget.extend(mood_keywords(mood), 3);
    if let Some(tiers) = tiers {
        budget.extend(tiers.secondary, 15);
    }
    budget.extend(QUALITY_KEYWORDS, 3);
    budget.extend(TECHNICAL_KEYWORDS, 4);
    budget.extend(TRENDING_KEYWORDS, 5);
    budget.extend(extra_context, usize::MAX);
    if let Some(tiers) = tiers {
        budget.extend(tiers.tertiary, usize::MAX);
    }

    let set = KeywordSet::from_ordered(budget.ordered);
    debug!(category, style, mood, theme, count = set.count, "Allocated keywords");
    set
}

/// Synthesizes an Adobe Stock title such as
/// `Cinematic modern workspace setup - Business Stock Image, Peaceful Atmosphere`.
pub fn generate_seo_title(
    category: &str,
    theme: &str,
    style: &str,
    mood: &str,
    locale: Locale,
) -> String {
    let style_adj = catalog::style(style)
        .map(|s| s.title_adjective)
        .unwrap_or("Professional");
    let mood_adj = catalog::mood(mood)
        .map(|m| m.title_adjective)
        .unwrap_or("Beautiful");
    let category_name = catalog::category(category)
        .map(|c| c.display_name(locale))
        .unwrap_or("Stock");
    let theme_words: Vec<&str> = theme.split_whitespace().take(3).collect();

    let title = format!(
        "{style_adj} {} - {category_name} Stock Image, {mood_adj} Atmosphere",
        theme_words.join(" ")
    );
    truncate_with_ellipsis(&title, MAX_TITLE_LEN)
}
