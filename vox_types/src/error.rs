//! Vocabulary errors

use std::fmt;
use thiserror::Error;

/// Result type for vocabulary operations
pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// A single problem found while validating a vocabulary document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Entry the problem belongs to (phrase or setting name, or `version`)
    pub subject: String,
    /// What is wrong with it
    pub message: String,
}

impl ValidationIssue {
    /// Creates a new validation issue
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}

/// Errors reported by the vocabulary
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VocabularyError {
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Phrase not found: {0}")]
    PhraseNotFound(String),

    #[error("Setting not found: {0}")]
    SettingNotFound(String),

    #[error("Setting is not a phrase alias: {0}")]
    NotAPhraseAlias(String),

    #[error("Failed to serialize vocabulary: {0}")]
    Serialization(String),

    #[error("Failed to deserialize vocabulary: {0}")]
    Deserialization(String),

    #[error("Unsupported vocabulary version: {0}")]
    UnsupportedVersion(u32),

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid vocabulary ({} issue(s)): {}", .0.len(), join_issues(.0))]
    Invalid(Vec<ValidationIssue>),
}

impl VocabularyError {
    /// True for lookups of an unknown category, phrase, or setting
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            VocabularyError::CategoryNotFound(_)
                | VocabularyError::PhraseNotFound(_)
                | VocabularyError::SettingNotFound(_)
        )
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ValidationIssue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
