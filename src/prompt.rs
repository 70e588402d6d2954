//! Prompt assembly: settings, the template engine and Midjourney flags.

pub mod midjourney;
pub mod settings;
pub mod template;

pub use midjourney::{exclusion_list, midjourney_flags, NEGATIVE_KEYWORDS};
pub use settings::{
    ContentType, MidjourneyParams, OutputMode, Settings, SettingsError, ThemeChoice,
};
pub use template::{
    generate_prompts, generate_smart_prompt, GeneratedPrompt, SmartPrompt,
    MIDJOURNEY_PREFIX, STANDARD_CLOSING_CLAUSE,
};
