//! Phrase categories

use crate::error::VocabularyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Functional grouping of a phrase
///
/// The string form (`edit`, `multimodal-marker`, ...) is what documents and
/// callers use; anything else is rejected with a NotFound error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Clipboard and selection editing
    Edit,
    /// Browser tab navigation
    Tab,
    /// Search-engine queries
    Search,
    /// Mode switches and mode values
    Mode,
    /// Multimodal transcription markers
    MultimodalMarker,
    /// Trailing modifiers of a prompt command
    PromptSuffix,
    /// Everything else
    Misc,
}

impl Category {
    /// Every category, in canonical order
    pub const ALL: [Category; 7] = [
        Category::Edit,
        Category::Tab,
        Category::Search,
        Category::Mode,
        Category::MultimodalMarker,
        Category::PromptSuffix,
        Category::Misc,
    ];

    /// Returns the canonical string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Edit => "edit",
            Category::Tab => "tab",
            Category::Search => "search",
            Category::Mode => "mode",
            Category::MultimodalMarker => "multimodal-marker",
            Category::PromptSuffix => "prompt-suffix",
            Category::Misc => "misc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| VocabularyError::CategoryNotFound(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category_is_not_found() {
        let err = "nonexistent-category".parse::<Category>().unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err,
            VocabularyError::CategoryNotFound("nonexistent-category".to_string())
        );
    }

    #[test]
    fn test_category_parse_is_case_sensitive() {
        assert!("Edit".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Category::MultimodalMarker).unwrap();
        assert_eq!(json, "\"multimodal-marker\"");

        let category: Category = serde_json::from_str("\"prompt-suffix\"").unwrap();
        assert_eq!(category, Category::PromptSuffix);
    }
}
