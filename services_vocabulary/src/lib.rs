//! # Command Vocabulary Service
//!
//! An immutable catalog of voice-command phrases and scalar settings, built
//! once from a single vocabulary document and shared read-only afterwards.
//!
//! ## Philosophy
//!
//! - **Longest match first**: every phrase sequence handed out is sorted by
//!   descending text length, so a longer phrase is never shadowed by a shorter
//!   one that is a prefix of it
//! - **Data-driven**: the vocabulary lives in one JSON document, not in code
//! - **Read-only**: the table has exactly one state and no mutation API
//! - **Explicit failures**: unknown names are NotFound, never defaulted
//!
//! ## Example
//!
//! ```ignore
//! use services_vocabulary::{global, keys};
//!
//! let table = global()?;
//!
//! // Edit commands, longest first
//! let edit = table.get_group("edit")?;
//!
//! // Scalar settings
//! let zoom_max = table.get_setting(keys::ZOOM_MAX)?.as_number();
//! ```

pub mod document;
pub mod source;
pub mod validator;

use std::collections::HashMap;
use tracing::info;
use vox_types::{
    longest_first, Category, CommandPhrase, PhraseName, Setting, SettingName, SettingValue,
    VocabularyError, VocabularyResult,
};

pub use document::{deserialize_document, serialize_document, VocabularyDocument};
pub use source::{global, VocabularySource, EMBEDDED_DOCUMENT, VOCABULARY_ENV_VAR};
pub use validator::validate_document;

/// Command vocabulary table
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyTable {
    /// All phrases, longest first
    phrases: Vec<CommandPhrase>,
    /// Phrase name to index in `phrases`
    phrase_index: HashMap<PhraseName, usize>,
    /// Settings in declaration order
    settings: Vec<Setting>,
    /// Setting name to index in `settings`
    setting_index: HashMap<SettingName, usize>,
}

impl VocabularyTable {
    /// Builds a table from a document after validating it
    pub fn from_document(document: VocabularyDocument) -> VocabularyResult<Self> {
        validate_document(&document)?;

        let VocabularyDocument {
            mut phrases,
            settings,
            ..
        } = document;
        longest_first(&mut phrases);

        let phrase_index = phrases
            .iter()
            .enumerate()
            .map(|(i, phrase)| (phrase.name.clone(), i))
            .collect();
        let setting_index = settings
            .iter()
            .enumerate()
            .map(|(i, setting)| (setting.name.clone(), i))
            .collect();

        info!(
            phrases = phrases.len(),
            settings = settings.len(),
            "vocabulary loaded"
        );

        Ok(Self {
            phrases,
            phrase_index,
            settings,
            setting_index,
        })
    }

    /// Parses, validates, and builds a table from JSON bytes
    pub fn from_json_bytes(bytes: &[u8]) -> VocabularyResult<Self> {
        Self::from_document(deserialize_document(bytes)?)
    }

    /// Loads a table from the given source
    pub fn load(source: &VocabularySource) -> VocabularyResult<Self> {
        Self::from_json_bytes(&source.read()?)
    }

    /// Returns every phrase, longest first, ties in declaration order
    pub fn get_all_phrases(&self) -> &[CommandPhrase] {
        &self.phrases
    }

    /// Returns the phrases of a named category, longest first
    ///
    /// Fails with NotFound when `category` is not a known category name.
    pub fn get_group(&self, category: &str) -> VocabularyResult<Vec<&CommandPhrase>> {
        let category: Category = category.parse()?;
        Ok(self.group(category))
    }

    /// Returns the phrases of a category, longest first
    pub fn group(&self, category: Category) -> Vec<&CommandPhrase> {
        // `phrases` is already sorted, filtering keeps that order
        self.phrases
            .iter()
            .filter(|phrase| phrase.category == category)
            .collect()
    }

    /// Returns a setting value by name
    pub fn get_setting(&self, name: &str) -> VocabularyResult<&SettingValue> {
        self.setting_index
            .get(&SettingName::new(name))
            .map(|&i| &self.settings[i].value)
            .ok_or_else(|| VocabularyError::SettingNotFound(name.to_string()))
    }

    /// Returns a phrase by symbolic name
    pub fn get_phrase(&self, name: &str) -> VocabularyResult<&CommandPhrase> {
        self.phrase_index
            .get(&PhraseName::new(name))
            .map(|&i| &self.phrases[i])
            .ok_or_else(|| VocabularyError::PhraseNotFound(name.to_string()))
    }

    /// Follows a phrase alias setting (e.g. `LINK_MODE_DEFAULT`) to its phrase
    pub fn resolve_phrase_setting(&self, name: &str) -> VocabularyResult<&CommandPhrase> {
        let target = self
            .get_setting(name)?
            .as_phrase()
            .ok_or_else(|| VocabularyError::NotAPhraseAlias(name.to_string()))?;
        self.get_phrase(target.as_str())
    }

    /// Returns the categories that have at least one phrase, in canonical order
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&category| self.phrases.iter().any(|p| p.category == category))
            .collect()
    }

    /// Returns all settings in declaration order
    pub fn settings(&self) -> &[Setting] {
        &self.settings
    }

    /// Number of phrases
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// True if the table has no phrases
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Converts the table back to a document, phrases longest first
    pub fn to_document(&self) -> VocabularyDocument {
        VocabularyDocument {
            version: VocabularyDocument::CURRENT_VERSION,
            phrases: self.phrases.clone(),
            settings: self.settings.clone(),
        }
    }
}

/// Exports a table as JSON bytes that preserve longest-first order
pub fn export_document(table: &VocabularyTable) -> VocabularyResult<Vec<u8>> {
    serialize_document(&table.to_document())
}

/// Well-known setting names
pub mod keys {
    pub const ZOOM_INCREMENT: &str = "ZOOM_INCREMENT";
    pub const ZOOM_MIN: &str = "ZOOM_MIN";
    pub const ZOOM_MAX: &str = "ZOOM_MAX";
    pub const ZOOM_DEFAULT: &str = "ZOOM_DEFAULT";
    pub const TTS_SERVER_ADDRESS: &str = "TTS_SERVER_ADDRESS";
    pub const GIB_SERVER_ADDRESS: &str = "GIB_SERVER_ADDRESS";
    pub const EDITOR_URL: &str = "EDITOR_URL";
    pub const BUCKET_URL: &str = "BUCKET_URL";
    pub const CONSTANTS_URL: &str = "CONSTANTS_URL";
    pub const SEARCH_URL_GOOGLE: &str = "SEARCH_URL_GOOGLE";
    pub const SEARCH_URL_GOOGLE_SCHOLAR: &str = "SEARCH_URL_GOOGLE_SCHOLAR";
    pub const SEARCH_URL_DDG: &str = "SEARCH_URL_DDG";
    pub const SEARCH_URL_PHIND: &str = "SEARCH_URL_PHIND";
    pub const SEARCH_URL_PERPLEXITY: &str = "SEARCH_URL_PERPLEXITY";
    pub const LINK_MODE_DEFAULT: &str = "LINK_MODE_DEFAULT";
    pub const PROMPT_MODE_DEFAULT: &str = "PROMPT_MODE_DEFAULT";
}
