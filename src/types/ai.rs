use serde::{Deserialize, Serialize};

/// Supported AI provider names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AIProviderName {
    OpenRouter,
    OpenAI,
    Anthropic,
    DeepSeek,
}

/// Static configuration for an AI provider including available models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIProviderConfig {
    pub name: AIProviderName,
    pub display_name: String,
    pub api_endpoint: String,
    pub models: Vec<String>,
}

/// Result of a summarization request as handed to the UI.
///
/// Serializes to either `{"summary": "..."}` or `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SummaryOutcome {
    Summary { summary: String },
    Error { error: String },
}

impl SummaryOutcome {
    pub fn error(&self) -> Option<&str> {
        match self {
            SummaryOutcome::Summary { .. } => None,
            SummaryOutcome::Error { error } => Some(error),
        }
    }
}

/// Role of a participant in a chat completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    System,
}

/// A single message sent to a chat completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// OpenAI-compatible chat completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}
