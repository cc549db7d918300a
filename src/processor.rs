use crate::config::ModelSpec;
use crate::description::{DescriptionCache, DescriptionProvider};
use crate::images::resolve_image;
use crate::localization::{LocalizationProvider, LocalizationResult};
use crate::table::Row;
use anyhow::Result;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

/// Why a row was passed through untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `image_id` or `en` is blank
    MissingFields,
    /// No file in the images directory matches `image_id`
    ImageNotFound,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingFields => write!(f, "missing image_id or English text"),
            SkipReason::ImageNotFound => write!(f, "image not found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row's language columns were overwritten
    Processed {
        description: String,
        localization: LocalizationResult,
    },
    Skipped(SkipReason),
}

/// Localize one row with one model.
///
/// The description for the row's image comes from `cache` when present and is
/// added to it otherwise. `row` is only modified once every fallible step has
/// succeeded, so on `Err` it is unchanged and nothing is cached.
pub async fn process_row<P>(
    row: &mut Row,
    images_dir: &Path,
    cache: &mut DescriptionCache,
    provider: &P,
    model: &ModelSpec,
) -> Result<RowOutcome>
where
    P: DescriptionProvider + LocalizationProvider,
{
    let image_id = row.image_id.trim().to_string();
    let english_text = row.en.trim().to_string();

    if image_id.is_empty() || english_text.is_empty() {
        info!(
            "Skipping row KEY={}: {}",
            row.key.trim(),
            SkipReason::MissingFields
        );
        return Ok(RowOutcome::Skipped(SkipReason::MissingFields));
    }

    info!(
        "Processing {} for level {}, text {}, image {}",
        row.key.trim(),
        row.level_id.trim(),
        row.text_id.trim(),
        image_id
    );

    let cached = cache.get(&image_id).map(str::to_string);
    let description = match cached {
        Some(description) => description,
        None => {
            let Some(image_path) = resolve_image(images_dir, &image_id)? else {
                warn!("Image not found for image_id={}", image_id);
                return Ok(RowOutcome::Skipped(SkipReason::ImageNotFound));
            };
            let description = provider.describe(&image_path).await?;
            cache.insert(image_id.as_str(), description).to_string()
        }
    };

    let localization = provider
        .localize(&description, &english_text, model)
        .await;

    for (language, translation) in localization.iter() {
        *row.language_field_mut(language) = translation.render(&english_text);
    }

    Ok(RowOutcome::Processed {
        description,
        localization,
    })
}
