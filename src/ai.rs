pub mod common;
pub mod config;
pub mod features;
pub mod gemini;
pub mod openai;
pub mod prompts;
pub mod service;

pub use common::{AiCompletion, AiProvider, AiUsage, CallOptions};
pub use config::AiConfig;
pub use features::{analyze_prompt, enhance_prompt, generate_variations, AiOutcome, PromptAnalysis};
pub use service::AiService;
