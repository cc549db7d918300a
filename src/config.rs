use anyhow::{bail, Context, Result};
use std::time::Duration;

/// Models localized against when `LOCALIZATION_MODELS` is not set, in run order.
const DEFAULT_MODELS: &[(&str, &str)] = &[
    ("1-gemini flash 1.5 8B", "google/gemini-flash-1.5-8b"),
    ("2-gemini flash 2.0", "google/gemini-2.0-flash-001"),
    ("3-GPT 4-o mini", "openai/gpt-4o-mini"),
    ("4-GPT 4.1", "openai/gpt-4.1-mini"),
    ("5-Claude 3.7 Sonnet", "anthropic/claude-3-7-sonnet"),
    ("6-Grok 3", "x-ai/grok-3-beta"),
];

/// A text model to localize with: a display label and the provider's model id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    pub label: String,
    pub id: String,
}

impl ModelSpec {
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
        }
    }

    /// File-name-safe form of the label, used to name this model's output files
    pub fn file_stem(&self) -> String {
        self.label
            .chars()
            .map(|c| match c {
                '/' | ' ' | '-' | '.' => '_',
                other => other,
            })
            .collect()
    }

    /// The built-in model list
    pub fn defaults() -> Vec<ModelSpec> {
        DEFAULT_MODELS
            .iter()
            .map(|(label, id)| ModelSpec::new(*label, *id))
            .collect()
    }

    /// Parse a comma-separated list of `label=model-id` or bare `model-id` entries
    pub fn parse_list(value: &str) -> Result<Vec<ModelSpec>> {
        let models: Vec<ModelSpec> = value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once('=') {
                Some((label, id)) => ModelSpec::new(label.trim(), id.trim()),
                None => ModelSpec::new(entry, entry),
            })
            .collect();

        if let Some(bad) = models.iter().find(|m| m.label.is_empty() || m.id.is_empty()) {
            bail!("Invalid model entry: '{}={}'", bad.label, bad.id);
        }
        if models.is_empty() {
            bail!("LOCALIZATION_MODELS is set but lists no models");
        }

        Ok(models)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // OpenRouter
    pub api_key: String,
    pub api_url: String,
    pub vision_model: String,

    // Attribution headers
    pub http_referer: String,
    pub app_title: String,

    // Localization
    pub models: Vec<ModelSpec>,
    pub localization_timeout: Duration,

    // Pacing
    pub row_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let models = match std::env::var("LOCALIZATION_MODELS") {
            Ok(value) => ModelSpec::parse_list(&value)?,
            Err(_) => ModelSpec::defaults(),
        };

        Ok(Self {
            // OpenRouter
            api_key: std::env::var("OPENROUTER_API_KEY")
                .context("OPENROUTER_API_KEY not set")?,
            api_url: std::env::var("OPENROUTER_API_URL")
                .unwrap_or_else(|_| "https://openrouter.ai/api/v1/chat/completions".to_string()),
            vision_model: std::env::var("VISION_MODEL")
                .unwrap_or_else(|_| "google/gemini-pro-vision".to_string()),

            // Attribution headers
            http_referer: std::env::var("HTTP_REFERER")
                .unwrap_or_else(|_| "https://cascade.ai".to_string()),
            app_title: std::env::var("APP_TITLE")
                .unwrap_or_else(|_| "Game Localization Tool".to_string()),

            // Localization
            models,
            localization_timeout: Duration::from_secs(
                std::env::var("LOCALIZATION_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60),
            ),

            // Pacing
            row_delay: Duration::from_millis(
                std::env::var("ROW_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1000),
            ),
        })
    }
}
