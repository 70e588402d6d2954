//! Static lookup tables the prompt and keyword pipelines draw from.

pub mod categories;
pub mod keywords;
pub mod styles;

pub use categories::{category, Category, Locale, CATEGORIES};
pub use styles::{mood, style, Mood, Style, MOODS, STYLES};
