use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::seo::calculate_seo_score;
use super::ExportEntry;
use crate::prompt::ContentType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAnalysis {
    pub total_prompts: usize,
    pub categories: BTreeMap<String, usize>,
    pub styles: BTreeMap<String, usize>,
    pub moods: BTreeMap<String, usize>,
    pub content_types: BTreeMap<String, usize>,
    pub average_keyword_count: f64,
    pub average_seo_score: f64,
    pub recommendations: Vec<String>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Frequency and quality summary over a batch. Averages only consider
/// entries that carry keyword metadata.
pub fn analyze_portfolio(entries: &[ExportEntry]) -> PortfolioAnalysis {
    let mut categories = BTreeMap::new();
    let mut styles = BTreeMap::new();
    let mut moods = BTreeMap::new();
    let mut content_types = BTreeMap::new();
    let mut keyword_total = 0usize;
    let mut score_total = 0u32;
    let mut with_metadata = 0usize;

    for entry in entries {
        *categories.entry(entry.prompt.category.clone()).or_insert(0) += 1;
        *content_types
            .entry(entry.prompt.content_type.to_string())
            .or_insert(0) += 1;
        if let Some(meta) = &entry.metadata {
            *styles.entry(meta.style.clone()).or_insert(0) += 1;
            *moods.entry(meta.mood.clone()).or_insert(0) += 1;
            keyword_total += meta.keywords.count;
            score_total += u32::from(calculate_seo_score(&meta.keywords));
            with_metadata += 1;
        }
    }

    let (average_keyword_count, average_seo_score) = if with_metadata == 0 {
        (0.0, 0.0)
    } else {
        (
            round2(keyword_total as f64 / with_metadata as f64),
            round2(score_total as f64 / with_metadata as f64),
        )
    };

    let mut recommendations = Vec::new();
    if !entries.is_empty() && categories.len() < 3 {
        recommendations.push("Diversify the portfolio across at least three categories.".to_string());
    }
    if with_metadata < entries.len() {
        recommendations.push("Generate keywords for every prompt before submitting.".to_string());
    }
    if with_metadata > 0 && average_keyword_count < 40.0 {
        recommendations.push("Use more of the 49 keyword slots per asset.".to_string());
    }
    if with_metadata > 0 && average_seo_score < 70.0 {
        recommendations.push("Strengthen primary keywords and add commercial terms.".to_string());
    }
    if !entries.is_empty() && !content_types.contains_key(&ContentType::Video.to_string()) {
        recommendations.push("Consider adding video content; it sells at higher prices.".to_string());
    }

    PortfolioAnalysis {
        total_prompts: entries.len(),
        categories,
        styles,
        moods,
        content_types,
        average_keyword_count,
        average_seo_score,
        recommendations,
    }
}
