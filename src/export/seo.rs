use std::collections::HashSet;

use crate::keywords::KeywordSet;

/// Keywords buyers search for when licensing commercial imagery.
const COMMERCIAL_BUZZWORDS: &[&str] = &[
    "business", "commercial", "professional", "marketing", "corporate", "background",
    "copy space", "concept", "modern", "success",
];

/// Share of distinct words among all words used across the keywords.
pub fn lexical_diversity(keywords: &KeywordSet) -> f64 {
    let words: Vec<&str> = keywords
        .all
        .iter()
        .flat_map(|k| k.split_whitespace())
        .collect();
    if words.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = words.iter().copied().collect();
    unique.len() as f64 / words.len() as f64
}

/// Rough 0-100 score of how well a keyword set will rank.
pub fn calculate_seo_score(keywords: &KeywordSet) -> u8 {
    let mut score: u32 = 0;

    score += match keywords.count {
        n if n >= 40 => 30,
        n if n >= 25 => 20,
        n if n >= 10 => 10,
        _ => 0,
    };
    score += match keywords.primary.len() {
        n if n >= 10 => 20,
        n if n >= 5 => 10,
        _ => 0,
    };
    score += match keywords.secondary.len() {
        n if n >= 15 => 15,
        n if n >= 8 => 8,
        _ => 0,
    };
    score += match keywords.tertiary.len() {
        n if n >= 10 => 10,
        n if n >= 5 => 5,
        _ => 0,
    };

    let diversity = lexical_diversity(keywords);
    score += if diversity >= 0.7 {
        15
    } else if diversity >= 0.5 {
        8
    } else {
        0
    };

    let buzzwords = COMMERCIAL_BUZZWORDS
        .iter()
        .filter(|b| keywords.all.iter().any(|k| k == *b))
        .count();
    score += match buzzwords {
        0 => 0,
        1 => 5,
        _ => 10,
    };

    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::allocate_keywords;

    #[test]
    fn empty_set_scores_zero() {
        assert_eq!(calculate_seo_score(&KeywordSet::default()), 0);
    }

    #[test]
    fn full_business_set_scores_high() {
        let set = allocate_keywords("business", "cinematic", "calm", "desk", &[] as &[&str]);
        assert_eq!(calculate_seo_score(&set), 100);
    }

    #[test]
    fn repeated_words_lower_diversity() {
        let set = KeywordSet {
            all: vec!["red car".into(), "red bike".into(), "red bus".into()],
            ..KeywordSet::default()
        };
        assert!((lexical_diversity(&set) - 4.0 / 6.0).abs() < f64::EPSILON);
    }
}
