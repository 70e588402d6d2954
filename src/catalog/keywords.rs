//! Tiered keyword tables for Adobe Stock submissions.

#[derive(Debug)]
pub struct CategoryKeywords {
    pub category: &'static str,
    pub primary: &'static [&'static str],
    pub secondary: &'static [&'static str],
    pub tertiary: &'static [&'static str],
}

pub static CATEGORY_KEYWORDS: &[CategoryKeywords] = &[
    CategoryKeywords {
        category: "business",
        primary: &[
            "business", "office", "workspace", "corporate", "professional", "desk",
            "laptop", "meeting", "finance", "workplace", "strategy", "startup",
        ],
        secondary: &[
            "entrepreneur", "success", "productivity", "teamwork", "planning",
            "management", "career", "commerce", "investment", "growth", "company",
            "organization", "work", "modern office", "interior", "technology",
            "documents", "analysis",
        ],
        tertiary: &[
            "notebook", "pen", "coffee", "chair", "table", "window", "paperwork",
            "deadline", "contract", "economy", "marketing", "presentation", "agenda",
        ],
    },
    CategoryKeywords {
        category: "technology",
        primary: &[
            "technology", "digital", "computer", "innovation", "data", "network",
            "electronics", "futuristic", "cyber", "tech", "hardware",
        ],
        secondary: &[
            "server", "circuit", "internet", "cloud computing", "artificial intelligence",
            "connection", "software", "device", "engineering", "science", "information",
            "communication", "processor", "automation", "security", "database",
        ],
        tertiary: &[
            "chip", "cable", "led", "screen", "code", "binary", "microchip", "robotics",
            "smart", "wireless", "virtual", "innovation concept", "blockchain",
        ],
    },
    CategoryKeywords {
        category: "food",
        primary: &[
            "food", "delicious", "fresh", "gourmet", "meal", "cuisine", "tasty",
            "homemade", "healthy", "dish", "restaurant",
        ],
        secondary: &[
            "cooking", "kitchen", "ingredients", "nutrition", "breakfast", "lunch",
            "dinner", "dessert", "bakery", "coffee", "drink", "plate", "culinary",
            "organic", "traditional", "snack",
        ],
        tertiary: &[
            "table", "wooden board", "bowl", "recipe", "appetizer", "sweet", "savory",
            "menu", "cafe", "served", "rustic", "close-up food", "flavor",
        ],
    },
    CategoryKeywords {
        category: "architecture",
        primary: &[
            "architecture", "building", "structure", "design", "interior", "exterior",
            "urban", "construction", "facade", "modern architecture",
        ],
        secondary: &[
            "city", "skyscraper", "staircase", "geometry", "concrete", "glass", "steel",
            "landmark", "perspective", "real estate", "historic", "tower", "hallway",
            "ceiling", "arch", "downtown",
        ],
        tertiary: &[
            "window", "wall", "floor", "column", "symmetry", "lines", "pattern",
            "urban landscape", "skyline", "cathedral", "museum", "bridge", "property",
        ],
    },
    CategoryKeywords {
        category: "abstract",
        primary: &[
            "abstract", "background", "texture", "pattern", "gradient", "art", "shape",
            "wallpaper", "creative", "artistic",
        ],
        secondary: &[
            "color", "flow", "wave", "liquid", "geometric", "fluid", "smooth", "motion",
            "dynamic", "surreal", "contemporary art", "backdrop", "decoration",
            "graphic", "illustration", "minimal",
        ],
        tertiary: &[
            "swirl", "ink", "smoke", "foil", "holographic", "paper", "layers", "glow",
            "shiny", "curve", "blend", "rainbow", "spectrum",
        ],
    },
    CategoryKeywords {
        category: "lifestyle",
        primary: &[
            "lifestyle", "home", "cozy", "living room", "comfort", "relaxation",
            "leisure", "interior design", "daily life", "wellbeing",
        ],
        secondary: &[
            "apartment", "decor", "furniture", "morning", "weekend", "hygge", "travel",
            "wellness", "routine", "scandinavian", "house", "domestic", "calm",
            "self care", "hobby", "reading",
        ],
        tertiary: &[
            "blanket", "pillow", "candle", "book", "mug", "window light", "sofa",
            "shelf", "suitcase", "passport", "map", "yoga mat", "bottle",
        ],
    },
    CategoryKeywords {
        category: "industrial",
        primary: &[
            "industrial", "industry", "factory", "manufacturing", "production",
            "machinery", "engineering", "logistics", "energy", "heavy industry",
        ],
        secondary: &[
            "steel", "metal", "pipes", "warehouse", "shipping", "container", "port",
            "welding", "workshop", "equipment", "infrastructure", "power", "renewable",
            "solar", "wind turbine", "transport",
        ],
        tertiary: &[
            "sparks", "boxes", "shelves", "crane", "cargo", "export", "import",
            "storage", "supply chain", "electricity", "sustainable", "plant", "site",
        ],
    },
];

pub static STYLE_KEYWORDS: &[(&str, &[&str])] = &[
    ("cinematic", &["cinematic", "film look", "widescreen"]),
    ("minimalist", &["minimalist", "simple", "clean"]),
    ("vintage", &["vintage", "retro", "nostalgic"]),
    ("modern", &["modern", "contemporary", "sleek"]),
    ("dramatic", &["dramatic", "contrast", "bold"]),
    ("bright", &["bright", "airy", "light"]),
];

pub static MOOD_KEYWORDS: &[(&str, &[&str])] = &[
    ("calm", &["calm", "peaceful", "serene"]),
    ("energetic", &["energetic", "vibrant", "lively"]),
    ("mysterious", &["mysterious", "moody", "dark"]),
    ("warm", &["warm", "inviting", "cozy"]),
    ("professional", &["professional", "trustworthy", "reliable"]),
    ("joyful", &["joyful", "optimistic", "happy"]),
];

pub static QUALITY_KEYWORDS: &[&str] = &[
    "high quality", "high resolution", "detailed", "sharp", "premium",
];

pub static TECHNICAL_KEYWORDS: &[&str] = &[
    "nobody", "no people", "copy space", "horizontal", "indoors", "studio shot",
];

/// Curated trend list as of 2024. Not refreshed at runtime.
pub static TRENDING_KEYWORDS: &[&str] = &[
    "sustainability", "remote work", "digital transformation", "wellness",
    "authentic", "ai generated", "eco friendly",
];

pub fn category_keywords(key: &str) -> Option<&'static CategoryKeywords> {
    CATEGORY_KEYWORDS.iter().find(|k| k.category == key)
}

pub fn style_keywords(key: &str) -> &'static [&'static str] {
    STYLE_KEYWORDS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

pub fn mood_keywords(key: &str) -> &'static [&'static str] {
    MOOD_KEYWORDS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATEGORIES;

    #[test]
    fn every_category_has_keyword_tiers() {
        for c in CATEGORIES {
            let kw = category_keywords(c.key).expect("keywords for category");
            assert!(kw.primary.len() >= 10);
            assert!(kw.secondary.len() >= 15);
            assert!(!kw.tertiary.is_empty());
        }
    }

    #[test]
    fn unknown_style_has_no_keywords() {
        assert!(style_keywords("baroque").is_empty());
        assert_eq!(mood_keywords("calm"), &["calm", "peaceful", "serene"]);
    }
}
