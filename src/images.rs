use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Find the screenshot for `image_id` inside `dir`.
///
/// Two passes over the directory listing, first match wins in each:
/// 1. the id with optional leading zeros plus an extension (`7` matches `007.png`)
/// 2. any name containing the id followed by a non-digit (`7` matches `level7_bg.png`)
///
/// The second pass is loose: `1` also matches `level1_intro.png`. Listing order
/// is whatever the filesystem returns.
pub fn resolve_image(dir: &Path, image_id: &str) -> Result<Option<PathBuf>> {
    let image_id = image_id.trim();
    if image_id.is_empty() {
        return Ok(None);
    }

    let id = regex::escape(image_id);
    let exact = Regex::new(&format!(r"^0*{}\.\w+$", id))
        .context("Failed to build image name pattern")?;
    let loose = Regex::new(&format!(r"{}[^0-9]", id))
        .context("Failed to build image name pattern")?;

    let names = list_file_names(dir)?;

    let found = names
        .iter()
        .find(|name| exact.is_match(name))
        .or_else(|| names.iter().find(|name| loose.is_match(name)));

    Ok(found.map(|name| dir.join(name)))
}

fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list images directory {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read images directory entry")?;
        // Names that are not valid UTF-8 can't match an id
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    Ok(names)
}

/// Base name of a path, for log lines and debug descriptions
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// File count and up to `limit` file names, for startup diagnostics
pub fn sample_directory(dir: &Path, limit: usize) -> Result<(usize, Vec<String>)> {
    let names = list_file_names(dir)?;
    let sample = names.iter().take(limit).cloned().collect();
    Ok((names.len(), sample))
}
