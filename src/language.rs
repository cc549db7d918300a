//! Target languages of a localization run.

/// One of the fixed localization targets.
///
/// Each language has two spellings: the key used in model replies
/// (`turkish`) and the table column code (`tr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    Turkish,
    French,
    German,
}

impl TargetLanguage {
    /// All targets, in the order they are requested and reported
    pub const ALL: [TargetLanguage; 3] = [
        TargetLanguage::Turkish,
        TargetLanguage::French,
        TargetLanguage::German,
    ];

    /// Key of this language inside the model's `localization` object
    pub fn key(&self) -> &'static str {
        match self {
            TargetLanguage::Turkish => "turkish",
            TargetLanguage::French => "french",
            TargetLanguage::German => "german",
        }
    }

    /// Table column code
    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::Turkish => "tr",
            TargetLanguage::French => "fr",
            TargetLanguage::German => "de",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_table_columns() {
        assert_eq!(TargetLanguage::Turkish.code(), "tr");
        assert_eq!(TargetLanguage::French.code(), "fr");
        assert_eq!(TargetLanguage::German.code(), "de");
    }

    #[test]
    fn test_all_keys_are_distinct() {
        let keys: Vec<&str> = TargetLanguage::ALL.iter().map(|l| l.key()).collect();
        assert_eq!(keys, vec!["turkish", "french", "german"]);
    }
}
