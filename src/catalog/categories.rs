use std::fmt;
use std::str::FromStr;

/// Locales the category names are translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "tr" | "turkish" => Ok(Locale::Tr),
            _ => Err(()),
        }
    }
}

#[derive(Debug)]
pub struct Category {
    pub key: &'static str,
    pub name_en: &'static str,
    pub name_tr: &'static str,
    pub icon: &'static str,
    /// Never empty.
    pub themes: &'static [&'static str],
}

impl Category {
    pub fn display_name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.name_en,
            Locale::Tr => self.name_tr,
        }
    }
}

pub static CATEGORIES: &[Category] = &[
    Category {
        key: "business",
        name_en: "Business",
        name_tr: "İş Dünyası",
        icon: "💼",
        themes: &[
            "modern workspace setup",
            "empty conference room with glass walls",
            "minimalist desk with laptop and notebook",
            "financial charts on a monitor",
            "stack of documents and a fountain pen",
            "coworking space interior at dawn",
            "corporate building lobby",
            "briefcase and coffee cup on a wooden table",
        ],
    },
    Category {
        key: "technology",
        name_en: "Technology",
        name_tr: "Teknoloji",
        icon: "💻",
        themes: &[
            "server room with glowing racks",
            "circuit board macro detail",
            "smartphone on a reflective surface",
            "futuristic data center corridor",
            "robotic arm in a clean lab",
            "virtual reality headset on a desk",
            "fiber optic cables with light trails",
        ],
    },
    Category {
        key: "food",
        name_en: "Food & Drink",
        name_tr: "Yiyecek ve İçecek",
        icon: "🍽️",
        themes: &[
            "freshly baked bread on a rustic board",
            "espresso cup with latte art",
            "colorful pasta dish in a ceramic bowl",
            "breakfast table with pastries",
            "chocolate dessert with powdered sugar",
            "spices arranged in wooden spoons",
            "cold brew coffee in a glass jar",
        ],
    },
    Category {
        key: "architecture",
        name_en: "Architecture",
        name_tr: "Mimari",
        icon: "🏛️",
        themes: &[
            "spiral staircase from below",
            "modern glass skyscraper facade",
            "brutalist concrete building",
            "empty museum hallway",
            "bridge at night with city lights",
            "minimalist white interior with arches",
            "historic stone cathedral ceiling",
        ],
    },
    Category {
        key: "abstract",
        name_en: "Abstract",
        name_tr: "Soyut",
        icon: "🎨",
        themes: &[
            "flowing liquid gradients",
            "geometric shapes in balance",
            "ink swirling in water",
            "holographic foil texture",
            "layered paper cut shapes",
            "smoke waves on dark background",
        ],
    },
    Category {
        key: "lifestyle",
        name_en: "Lifestyle",
        name_tr: "Yaşam Tarzı",
        icon: "🏡",
        themes: &[
            "cozy reading nook with blanket",
            "scandinavian living room interior",
            "morning coffee by the window",
            "yoga mat and water bottle in a bright studio",
            "travel suitcase with passport and map",
            "candles and books on a side table",
        ],
    },
    Category {
        key: "industrial",
        name_en: "Industrial",
        name_tr: "Endüstriyel",
        icon: "🏭",
        themes: &[
            "steel pipes in a factory",
            "shipping containers at a port",
            "welding sparks in a workshop",
            "warehouse shelves with boxes",
            "wind turbines on a hill",
            "solar panel array under clear sky",
        ],
    },
];

/// Looks a category up by key.
pub fn category(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.key == key)
}
