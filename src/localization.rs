//! Localization results and parsing of model replies.

use crate::config::ModelSpec;
use crate::language::TargetLanguage;
use serde_json::Value;
use tracing::warn;

/// Outcome for a single target language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Localized(String),
    Failed { reason: String },
}

impl Translation {
    pub fn failed(reason: impl Into<String>) -> Self {
        Translation::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Translation::Failed { .. })
    }

    /// Text written to the output: the localization itself, or the source text
    /// tagged with `[ERROR: <reason>]`
    pub fn render(&self, source_text: &str) -> String {
        match self {
            Translation::Localized(text) => text.clone(),
            Translation::Failed { reason } => format!("[ERROR: {}] {}", reason, source_text),
        }
    }
}

/// One translation per target language; every language is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationResult {
    pub turkish: Translation,
    pub french: Translation,
    pub german: Translation,
}

impl LocalizationResult {
    /// The same failure for every language
    pub fn failure(reason: &str) -> Self {
        Self {
            turkish: Translation::failed(reason),
            french: Translation::failed(reason),
            german: Translation::failed(reason),
        }
    }

    pub fn get(&self, language: TargetLanguage) -> &Translation {
        match language {
            TargetLanguage::Turkish => &self.turkish,
            TargetLanguage::French => &self.french,
            TargetLanguage::German => &self.german,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TargetLanguage, &Translation)> {
        TargetLanguage::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }

    pub fn all_failed(&self) -> bool {
        self.iter().all(|(_, t)| t.is_failed())
    }
}

/// Interpret a model reply expected to look like
/// `{"localization": {"turkish": "...", "french": "...", "german": "..."}}`.
///
/// A reply that isn't JSON, or has no `localization` object, fails every
/// language. A reply missing only some languages fails just those.
pub fn parse_localization_reply(reply: &str) -> LocalizationResult {
    let value: Value = match serde_json::from_str(strip_code_fence(reply)) {
        Ok(value) => value,
        Err(e) => {
            let preview: String = reply.chars().take(200).collect();
            warn!("Reply is not valid JSON ({}): {}...", e, preview);
            return LocalizationResult::failure("Invalid JSON");
        }
    };

    let Some(container) = value.get("localization").and_then(Value::as_object) else {
        warn!("Reply JSON has no 'localization' object: {}", value);
        return LocalizationResult::failure("Missing localization data");
    };

    let mut missing = Vec::new();
    let mut extract = |language: TargetLanguage| match container.get(language.key()) {
        Some(Value::String(text)) => Translation::Localized(text.clone()),
        Some(other) if !other.is_null() => Translation::Localized(other.to_string()),
        _ => {
            missing.push(language.key());
            Translation::failed(format!("Missing {} translation", language.key()))
        }
    };

    let result = LocalizationResult {
        turkish: extract(TargetLanguage::Turkish),
        french: extract(TargetLanguage::French),
        german: extract(TargetLanguage::German),
    };

    if !missing.is_empty() {
        warn!("Reply is missing translations for: {}", missing.join(", "));
    }

    result
}

/// Some models wrap JSON replies in a markdown code fence even when asked not to
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

/// Produces localizations for one source string with one model.
///
/// Implementations never fail: problems are reported as
/// [`Translation::Failed`] entries in the result.
#[allow(async_fn_in_trait)]
pub trait LocalizationProvider {
    async fn localize(
        &self,
        description: &str,
        source_text: &str,
        model: &ModelSpec,
    ) -> LocalizationResult;
}
