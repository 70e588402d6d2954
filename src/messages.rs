//! Shared text sent by the bot.
//!
//! Keep all user-facing strings in this module so they stay in one place and are
//! easy to update or translate.

pub const HELP_TEXT: &str =
    "Send me any text to use it as the manual keyword for the next batch.\n\n\
             <b>Generate:</b>\n\
             /generate - Generate a batch with the current settings.\n\
             /random - Generate a batch across random categories.\n\
             /keywords N - Show the 49 keywords for prompt N.\n\
             /title N - Show the SEO title for prompt N.\n\
             /export FORMAT [keywords] - Export the batch (txt, detailed, csv, adobe, portfolio).\n\n\
             <b>Settings:</b>\n\
             /settings - Show the current settings.\n\
             /category KEY - Choose a category.\n\
             /theme auto|manual|N|text - Choose the theme.\n\
             /style KEY, /mood KEY - Choose style and mood.\n\
             /mode standard|midjourney, /content photo|video, /count N\n\
             /lighting, /composition, /color, /camera KEY\n\
             /locale en|tr - Language for category names in titles.\n\
             /mj NAME VALUE - Set a Midjourney parameter (ar, v, chaos, stylize, weird, q, raw, tile, niji, no).\n\n\
             <b>AI:</b>\n\
             /enhance N, /variations N [count], /analyze N\n\
             /provider gemini|openai [model] - Choose the AI provider.\n\
             /usage [reset] - Show AI usage for this chat.\n\
             /info - Show system information.";

pub const AI_DISABLED: &str = "AI features are disabled. Set GEMINI_API_KEY or OPENAI_API_KEY.";
pub const AI_NOT_READY: &str = "No API key is configured for the selected AI provider.";
pub const NO_BATCH: &str = "Nothing generated yet. Use /generate first.";
pub const EMPTY_BATCH: &str = "No prompts could be generated with these settings.";
pub const USAGE_RESET: &str = "AI usage counters reset.";

pub fn batch_generated(count: usize) -> String {
    format!("{count} prompts generated.")
}

pub fn prompt_not_found(number: usize, total: usize) -> String {
    format!("Prompt {number} does not exist. Choose 1 to {total}.")
}

pub fn invalid_prompt_number(arg: &str) -> String {
    format!("'{arg}' is not a prompt number.")
}

pub fn unknown_export_format(arg: &str) -> String {
    format!("Unknown export format '{arg}'. Use txt, detailed, csv, adobe or portfolio.")
}

pub fn exported(filename: &str) -> String {
    format!("Exported {filename}.")
}

pub fn setting_updated(name: &str, value: &str) -> String {
    format!("{name} set to {value}.")
}

pub fn manual_keyword_set(keyword: &str) -> String {
    format!("Manual keyword set to \"{keyword}\". Use /generate to build prompts.")
}

pub fn provider_selected(provider: &str, model: &str) -> String {
    format!("AI provider set to {provider} ({model}).")
}

pub fn prompt_enhanced(number: &str) -> String {
    format!("Prompt {number} enhanced. The batch keeps the original text.")
}

pub fn ai_failed(error: &str) -> String {
    format!("AI request failed: {error}")
}
