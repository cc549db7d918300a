//! Semicolon-delimited text table codec.
//!
//! The column set is fixed: the header line of an input file is skipped and
//! [`HEADERS`] is used instead. Values are not escaped in either direction,
//! so a field containing `;` or a line break does not survive a round trip.

use crate::language::TargetLanguage;
use anyhow::{Context, Result};
use std::path::Path;

/// Column names, in file order
pub const HEADERS: [&str; 8] = [
    "KEY", "LEVEL_ID", "Text_ID", "image_id", "en", "tr", "de", "fr",
];

const DELIMITER: char = ';';
const BOM: char = '\u{feff}';

/// One line of the localization table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub level_id: String,
    pub text_id: String,
    pub image_id: String,
    pub en: String,
    pub tr: String,
    pub de: String,
    pub fr: String,
}

impl Row {
    /// Build a row from positional values; values past the eighth are ignored
    /// and missing ones are left empty.
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut row = Row::default();
        for (slot, value) in row.fields_mut().into_iter().zip(values) {
            *slot = value.to_string();
        }
        row
    }

    /// Values in [`HEADERS`] order
    pub fn fields(&self) -> [&str; 8] {
        [
            self.key.as_str(),
            self.level_id.as_str(),
            self.text_id.as_str(),
            self.image_id.as_str(),
            self.en.as_str(),
            self.tr.as_str(),
            self.de.as_str(),
            self.fr.as_str(),
        ]
    }

    fn fields_mut(&mut self) -> [&mut String; 8] {
        [
            &mut self.key,
            &mut self.level_id,
            &mut self.text_id,
            &mut self.image_id,
            &mut self.en,
            &mut self.tr,
            &mut self.de,
            &mut self.fr,
        ]
    }

    /// The table column holding `language`
    pub fn language_field(&self, language: TargetLanguage) -> &str {
        match language {
            TargetLanguage::Turkish => &self.tr,
            TargetLanguage::German => &self.de,
            TargetLanguage::French => &self.fr,
        }
    }

    pub fn language_field_mut(&mut self, language: TargetLanguage) -> &mut String {
        match language {
            TargetLanguage::Turkish => &mut self.tr,
            TargetLanguage::German => &mut self.de,
            TargetLanguage::French => &mut self.fr,
        }
    }
}

/// Parse table text into rows.
///
/// A leading byte-order mark is stripped and the first line is discarded.
/// Blank lines are skipped, and lines with fewer than [`HEADERS`] fields are
/// dropped without error.
pub fn decode(text: &str) -> Vec<Row> {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    text.lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let values: Vec<&str> = line.split(DELIMITER).collect();
            if values.len() < HEADERS.len() {
                return None;
            }
            Some(Row::from_values(values))
        })
        .collect()
}

/// Serialize rows into table text, header line first. No byte-order mark is
/// added here; see [`write_table`].
pub fn encode(rows: &[Row]) -> String {
    let mut out = HEADERS.join(";");
    out.push('\n');

    for row in rows {
        out.push_str(&row.fields().join(";"));
        out.push('\n');
    }

    out
}

/// Read and decode a table file
pub fn read_table(path: &Path) -> Result<Vec<Row>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read table file {}", path.display()))?;
    Ok(decode(&text))
}

/// Encode rows and write them as UTF-8 with a byte-order mark, so spreadsheet
/// tools pick the right encoding for accented characters.
pub fn write_table(path: &Path, rows: &[Row]) -> Result<()> {
    let mut contents = String::from(BOM);
    contents.push_str(&encode(rows));

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write table file {}", path.display()))
}
