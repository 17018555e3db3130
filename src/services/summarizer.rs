//! Page summarization through an external AI provider.
//!
//! The summarizer checks the target URL with [`validate_summary_target`],
//! then asks the configured chat-completion endpoint for a short summary.
//! Failures reach the UI as fixed messages; upstream diagnostics are only
//! logged.

use std::time::Duration;

use serde_json::{json, Value};

use crate::services::url_guard::validate_summary_target;
use crate::types::ai::{
    AIProviderConfig, AIProviderName, ChatCompletionRequest, ChatMessage, ChatRole, SummaryOutcome,
};
use crate::types::errors::SummaryError;
use crate::types::settings::SummarizerSettings;

const SYSTEM_PROMPT: &str = "You are an expert summarizer. Your job is to summarize the content \
of a web page given its URL. Keep the summary concise and to the point.";

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Summarizer backed by an HTTP chat-completion provider.
pub struct Summarizer {
    client: reqwest::Client,
    settings: SummarizerSettings,
    api_key: Option<String>,
}

impl Summarizer {
    /// Creates a summarizer, reading the API key from the environment
    /// variable named in `settings.api_key_env`.
    pub fn new(settings: SummarizerSettings) -> Self {
        let api_key = std::env::var(&settings.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::with_api_key(settings, api_key)
    }

    /// Creates a summarizer with an explicit API key.
    pub fn with_api_key(settings: SummarizerSettings, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs.max(1)))
            .build()
            .unwrap_or_default();
        Self {
            client,
            settings,
            api_key,
        }
    }

    pub fn settings(&self) -> &SummarizerSettings {
        &self.settings
    }

    /// Returns `true` if a request could be attempted at all.
    pub fn is_configured(&self) -> bool {
        self.settings.enabled && self.api_key.is_some() && !self.settings.api_endpoint.is_empty()
    }

    /// Summarizes the page at `url`.
    pub async fn summarize(&self, url: &str) -> Result<String, SummaryError> {
        let target = validate_summary_target(url)?;
        let api_key = match (&self.api_key, self.is_configured()) {
            (Some(key), true) => key,
            _ => return Err(SummaryError::NoProvider),
        };

        let user_message = format!("URL: {}", target);
        let request = match self.settings.provider {
            AIProviderName::Anthropic => self
                .client
                .post(&self.settings.api_endpoint)
                .header("x-api-key", api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .json(&json!({
                    "model": self.settings.model,
                    "max_tokens": self.settings.max_tokens,
                    "system": SYSTEM_PROMPT,
                    "messages": [{"role": "user", "content": user_message}],
                })),
            _ => self
                .client
                .post(&self.settings.api_endpoint)
                .bearer_auth(api_key)
                .json(&ChatCompletionRequest {
                    model: self.settings.model.clone(),
                    messages: vec![
                        ChatMessage {
                            role: ChatRole::System,
                            content: SYSTEM_PROMPT.to_string(),
                        },
                        ChatMessage {
                            role: ChatRole::User,
                            content: user_message,
                        },
                    ],
                    max_tokens: self.settings.max_tokens,
                }),
        };

        log::debug!("requesting summary for {}", target);
        let response = request
            .send()
            .await
            .map_err(|e| SummaryError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::BAD_REQUEST {
            let body = response.text().await.unwrap_or_default();
            return Err(SummaryError::BadRequest(format!("400 Bad Request: {}", body)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummaryError::Unavailable(format!("HTTP {}: {}", status, body)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SummaryError::Unavailable(format!("invalid provider response: {}", e)))?;
        extract_summary(&body).ok_or(SummaryError::EmptySummary)
    }

    /// Summarizes the page at `url`, folding every failure into a
    /// user-facing message.
    pub async fn summarize_action(&self, url: &str) -> SummaryOutcome {
        match self.summarize(url).await {
            Ok(summary) => SummaryOutcome::Summary { summary },
            Err(e) => {
                log::warn!("summarization failed for {}: {}", url, e);
                SummaryOutcome::Error {
                    error: e.user_message().to_string(),
                }
            }
        }
    }

    /// Providers the settings UI can offer.
    pub fn available_providers() -> Vec<AIProviderConfig> {
        vec![
            AIProviderConfig {
                name: AIProviderName::OpenRouter,
                display_name: "OpenRouter".to_string(),
                api_endpoint: "https://openrouter.ai/api/v1/chat/completions".to_string(),
                models: vec!["openai/gpt-4o-mini".to_string(), "anthropic/claude-3.5-haiku".to_string()],
            },
            AIProviderConfig {
                name: AIProviderName::OpenAI,
                display_name: "OpenAI".to_string(),
                api_endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
                models: vec!["gpt-4o-mini".to_string(), "gpt-4o".to_string()],
            },
            AIProviderConfig {
                name: AIProviderName::Anthropic,
                display_name: "Anthropic".to_string(),
                api_endpoint: "https://api.anthropic.com/v1/messages".to_string(),
                models: vec!["claude-3-5-haiku-latest".to_string(), "claude-3-5-sonnet-latest".to_string()],
            },
            AIProviderConfig {
                name: AIProviderName::DeepSeek,
                display_name: "DeepSeek".to_string(),
                api_endpoint: "https://api.deepseek.com/v1/chat/completions".to_string(),
                models: vec!["deepseek-chat".to_string()],
            },
        ]
    }
}

/// Pulls the summary text out of an OpenAI- or Anthropic-style response.
fn extract_summary(body: &Value) -> Option<String> {
    body.pointer("/choices/0/message/content")
        .or_else(|| body.pointer("/content/0/text"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
