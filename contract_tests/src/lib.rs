//! # Vocabulary Contract Tests
//!
//! This crate provides "golden" tests for the vocabulary to ensure exported
//! literals don't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: every literal a consumer depends on is
//!   written out here
//! - **Testability first**: contract tests fail when a phrase, a setting, or
//!   the document schema changes
//!
//! ## Structure
//!
//! - `settings`: zoom bounds and endpoint URLs
//! - `phrases`: phrase texts per category
//! - `document`: JSON document shape and version

pub mod document;
pub mod phrases;
pub mod settings;

/// Common test helpers for contract validation
pub mod test_helpers {
    use services_vocabulary::{global, VocabularyTable};
    use vox_types::{Category, SettingValue};

    /// The embedded vocabulary
    pub fn table() -> &'static VocabularyTable {
        global().expect("embedded vocabulary must load")
    }

    /// Verifies a URL setting has exactly the expected value
    pub fn verify_url_setting(name: &str, expected: &str) {
        let value = table()
            .get_setting(name)
            .unwrap_or_else(|e| panic!("{}", e));
        assert_eq!(
            value,
            &SettingValue::Url(expected.to_string()),
            "Setting {} changed",
            name
        );
    }

    /// Verifies a number setting has exactly the expected value
    pub fn verify_number_setting(name: &str, expected: f64) {
        let value = table()
            .get_setting(name)
            .unwrap_or_else(|e| panic!("{}", e))
            .as_number()
            .unwrap_or_else(|| panic!("Setting {} is no longer a number", name));
        assert_eq!(
            value.to_bits(),
            expected.to_bits(),
            "Setting {} changed: expected {}, got {}",
            name,
            expected,
            value
        );
    }

    /// Verifies a phrase keeps its text and category
    pub fn verify_phrase(name: &str, text: &str, category: Category) {
        let phrase = table().get_phrase(name).unwrap_or_else(|e| panic!("{}", e));
        assert_eq!(phrase.text, text, "Phrase {} text changed", name);
        assert_eq!(phrase.category, category, "Phrase {} category changed", name);
    }
}
