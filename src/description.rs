use std::collections::HashMap;
use std::path::Path;

/// Text used in place of a description when the vision call fails
pub const DESCRIPTION_FAILURE: &str = "Error: Could not generate image description";

/// Describes a screenshot in prose for the localization prompt.
///
/// A failed model call is not an error: it yields [`DESCRIPTION_FAILURE`].
/// `Err` is reserved for local failures such as an unreadable image file.
#[allow(async_fn_in_trait)]
pub trait DescriptionProvider {
    async fn describe(&self, image_path: &Path) -> anyhow::Result<String>;
}

/// Image descriptions by image id, kept for the length of one run and shared
/// by every model and row.
#[derive(Debug, Clone, Default)]
pub struct DescriptionCache {
    entries: HashMap<String, String>,
}

impl DescriptionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, image_id: &str) -> Option<&str> {
        self.entries.get(image_id).map(String::as_str)
    }

    /// Store the description for `image_id`. An existing entry is kept, so an
    /// id is described at most once per run.
    pub fn insert(&mut self, image_id: impl Into<String>, description: String) -> &str {
        self.entries.entry(image_id.into()).or_insert(description)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
