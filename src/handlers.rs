pub mod ai;
pub mod export;
pub mod generate;
pub mod info;
pub mod notify;
pub mod settings;
pub mod text;

pub use ai::{analyze, enhance, select_provider, show_usage, variations};
pub use export::export_batch;
pub use generate::{generate, show_keywords, show_title};
pub use info::show_system_info;
pub use notify::flush_notifications;
pub use settings::{show_settings, update_midjourney, update_setting, SettingKind};
pub use text::{help, set_manual_keyword_from_text};
