//! Vocabulary document format
//!
//! A vocabulary is loaded from a single versioned JSON document. Phrases keep
//! their declaration order in the document; that order is the tie-breaker for
//! longest-match sorting.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vox_types::{CommandPhrase, Setting, VocabularyError, VocabularyResult};

/// Serializable container for a vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyDocument {
    /// Version of the document format
    pub version: u32,
    /// Phrases in declaration order
    pub phrases: Vec<CommandPhrase>,
    /// Scalar settings in declaration order
    #[serde(default)]
    pub settings: Vec<Setting>,
}

impl VocabularyDocument {
    /// Current version of the document format
    pub const CURRENT_VERSION: u32 = 1;

    /// Creates a new empty document
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            phrases: Vec::new(),
            settings: Vec::new(),
        }
    }

    /// Adds a phrase at the end of the declaration order
    pub fn with_phrase(mut self, phrase: CommandPhrase) -> Self {
        self.phrases.push(phrase);
        self
    }

    /// Adds a setting at the end of the declaration order
    pub fn with_setting(mut self, setting: Setting) -> Self {
        self.settings.push(setting);
        self
    }
}

impl Default for VocabularyDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes a document to pretty JSON bytes
pub fn serialize_document(document: &VocabularyDocument) -> VocabularyResult<Vec<u8>> {
    serde_json::to_vec_pretty(document).map_err(|e| VocabularyError::Serialization(e.to_string()))
}

/// Deserializes a document from JSON bytes
pub fn deserialize_document(bytes: &[u8]) -> VocabularyResult<VocabularyDocument> {
    let document: VocabularyDocument = serde_json::from_slice(bytes)
        .map_err(|e| VocabularyError::Deserialization(e.to_string()))?;

    if document.version != VocabularyDocument::CURRENT_VERSION {
        return Err(VocabularyError::UnsupportedVersion(document.version));
    }

    debug!(
        phrases = document.phrases.len(),
        settings = document.settings.len(),
        "parsed vocabulary document"
    );
    Ok(document)
}
