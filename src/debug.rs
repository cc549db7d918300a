use crate::config::ModelSpec;
use crate::description::DescriptionProvider;
use crate::images::display_name;
use crate::language::TargetLanguage;
use crate::localization::{LocalizationProvider, LocalizationResult, Translation};
use std::path::Path;
use tracing::info;

/// Deterministic stand-in for both model calls, used by `--debug` runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugProvider;

impl DebugProvider {
    /// `[TR] <text>`, `[FR] <text>`, `[DE] <text>`
    pub fn placeholder(language: TargetLanguage, source_text: &str) -> String {
        format!("[{}] {}", language.code().to_uppercase(), source_text)
    }
}

impl DescriptionProvider for DebugProvider {
    async fn describe(&self, image_path: &Path) -> anyhow::Result<String> {
        info!("DEBUG MODE: returning mock description");
        Ok(format!(
            "This is a debug description for image {}",
            display_name(image_path)
        ))
    }
}

impl LocalizationProvider for DebugProvider {
    async fn localize(
        &self,
        _description: &str,
        source_text: &str,
        model: &ModelSpec,
    ) -> LocalizationResult {
        info!("DEBUG MODE: returning mock translations for {}", model.label);
        let placeholder = |language: TargetLanguage| {
            Translation::Localized(DebugProvider::placeholder(language, source_text))
        };

        LocalizationResult {
            turkish: placeholder(TargetLanguage::Turkish),
            french: placeholder(TargetLanguage::French),
            german: placeholder(TargetLanguage::German),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_debug_description_uses_file_name() {
        let description = DebugProvider
            .describe(Path::new("/imgs/007.png"))
            .await
            .unwrap();
        assert_eq!(description, "This is a debug description for image 007.png");
    }

    #[tokio::test]
    async fn test_debug_localization_tags_source_text() {
        let model = ModelSpec::new("m", "m");
        let result = DebugProvider.localize("desc", "Try to find his tattoo.", &model).await;

        assert_eq!(
            result.turkish,
            Translation::Localized("[TR] Try to find his tattoo.".to_string())
        );
        assert_eq!(
            result.french,
            Translation::Localized("[FR] Try to find his tattoo.".to_string())
        );
        assert_eq!(
            result.german,
            Translation::Localized("[DE] Try to find his tattoo.".to_string())
        );
    }
}
