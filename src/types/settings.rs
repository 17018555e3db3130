use serde::{Deserialize, Serialize};

use super::ai::AIProviderName;

/// Environment variable that holds the summarizer API key by default.
pub const DEFAULT_API_KEY_ENV: &str = "MARKSHELF_AI_KEY";

/// Top-level settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShelfSettings {
    pub library: LibrarySettings,
    pub summarizer: SummarizerSettings,
}

/// Settings for the in-memory bookmark collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibrarySettings {
    /// Start with the built-in seed bookmarks instead of an empty collection.
    pub seed_on_start: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            seed_on_start: true,
        }
    }
}

/// Settings for the page summarization call-out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarizerSettings {
    pub enabled: bool,
    pub provider: AIProviderName,
    pub model: String,
    pub api_endpoint: String,
    /// Name of the environment variable the API key is read from.
    pub api_key_env: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: AIProviderName::OpenRouter,
            model: "openai/gpt-4o-mini".to_string(),
            api_endpoint: "https://openrouter.ai/api/v1/chat/completions".to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            max_tokens: 256,
            timeout_secs: 30,
        }
    }
}
