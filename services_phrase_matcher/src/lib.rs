//! # Phrase Matcher
//!
//! Longest-match recognition of vocabulary phrases in transcribed speech.
//!
//! ## Philosophy
//!
//! - **Longest first**: candidates are tried longest text first, so
//!   "search google scholar new tab" is never read as "search google new tab"
//! - **Prefix matching**: stems such as "proof" or "view constan" match the
//!   start of longer spoken words
//! - **Borrowing**: a matcher borrows phrases from a table and never copies
//!   the vocabulary
//!
//! ## Example
//!
//! ```ignore
//! use services_phrase_matcher::PhraseMatcher;
//!
//! let table = services_vocabulary::global()?;
//! let matcher = PhraseMatcher::from_table(table);
//!
//! let hit = matcher.recognize("Search Google Scholar new tab: rust lifetimes").unwrap();
//! assert_eq!(hit.phrase.name.as_str(), "VOX_CMD_SEARCH_GOOGLE_SCHOLAR_NEW_TAB");
//! assert_eq!(hit.remainder, "rust lifetimes");
//! ```

pub mod modes;
pub mod normalize;

pub use modes::{resolve_mode, ModeResolution, TranscriptionMode};
pub use normalize::{cleanup_prefix, normalize};

use services_vocabulary::VocabularyTable;
use std::cmp::Reverse;
use tracing::{debug, warn};
use vox_types::{longest_first, Category, CommandPhrase};

/// A recognized phrase and the text that followed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch<'a> {
    /// Matched phrase
    pub phrase: &'a CommandPhrase,
    /// Normalized text after the phrase, trimmed
    pub remainder: String,
}

struct Candidate<'a> {
    phrase: &'a CommandPhrase,
    normalized: String,
}

/// Matches text against a set of phrases, longest first
pub struct PhraseMatcher<'a> {
    candidates: Vec<Candidate<'a>>,
}

impl<'a> PhraseMatcher<'a> {
    /// Creates a matcher over the given phrases
    ///
    /// Candidates are ordered by normalized length, longest first, since that
    /// is the text they are compared by. Ties keep the longest-first order of
    /// the phrase texts. Phrases that normalize to nothing are skipped.
    pub fn new(phrases: impl IntoIterator<Item = &'a CommandPhrase>) -> Self {
        let mut phrases: Vec<&'a CommandPhrase> = phrases.into_iter().collect();
        longest_first(&mut phrases);

        let mut candidates: Vec<Candidate<'a>> = phrases
            .into_iter()
            .filter_map(|phrase| {
                let normalized = normalize(&phrase.text);
                if normalized.is_empty() {
                    warn!(name = %phrase.name, "phrase normalizes to nothing, skipped");
                    return None;
                }
                Some(Candidate { phrase, normalized })
            })
            .collect();
        candidates.sort_by_key(|candidate| Reverse(candidate.normalized.len()));

        Self { candidates }
    }

    /// Creates a matcher over every phrase of a table
    pub fn from_table(table: &'a VocabularyTable) -> Self {
        Self::new(table.get_all_phrases())
    }

    /// Creates a matcher over one category of a table
    pub fn for_category(table: &'a VocabularyTable, category: Category) -> Self {
        Self::new(table.group(category))
    }

    /// Number of candidate phrases
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True if there are no candidates
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Finds the longest phrase the text starts with
    pub fn recognize(&self, text: &str) -> Option<PhraseMatch<'a>> {
        let normalized = normalize(text);

        let found = self
            .candidates
            .iter()
            .find(|candidate| normalized.starts_with(candidate.normalized.as_str()))?;

        let remainder = normalized[found.normalized.len()..].trim().to_string();
        debug!(name = %found.phrase.name, %remainder, "phrase recognized");

        Some(PhraseMatch {
            phrase: found.phrase,
            remainder,
        })
    }

    /// Finds a phrase equal to the whole text
    pub fn recognize_exact(&self, text: &str) -> Option<&'a CommandPhrase> {
        let normalized = normalize(text);
        self.candidates
            .iter()
            .find(|candidate| candidate.normalized == normalized)
            .map(|candidate| candidate.phrase)
    }

    /// Splits a trailing phrase off the text
    ///
    /// Used with the prompt-suffix category: "run prompt summarize from
    /// clipboard" becomes ("run prompt summarize", "from clipboard").
    pub fn split_suffix(&self, text: &str) -> Option<(String, &'a CommandPhrase)> {
        let normalized = normalize(text);

        self.candidates.iter().find_map(|candidate| {
            let head = normalized.strip_suffix(candidate.normalized.as_str())?;
            if !head.is_empty() && !head.ends_with(' ') {
                return None;
            }
            Some((head.trim_end().to_string(), candidate.phrase))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_phrases() -> Vec<CommandPhrase> {
        vec![
            CommandPhrase::new("VOX_CMD_SEARCH_DDG_NEW_TAB", "search new tab", Category::Search),
            CommandPhrase::new("VOX_CMD_SEARCH_GOOGLE_NEW_TAB", "search google new tab", Category::Search),
            CommandPhrase::new(
                "VOX_CMD_SEARCH_GOOGLE_SCHOLAR_NEW_TAB",
                "search google scholar new tab",
                Category::Search,
            ),
        ]
    }

    #[test]
    fn test_longest_phrase_wins() {
        let phrases = search_phrases();
        let matcher = PhraseMatcher::new(&phrases);

        let hit = matcher
            .recognize("search google scholar new tab borrow checker")
            .unwrap();

        assert_eq!(hit.phrase.name.as_str(), "VOX_CMD_SEARCH_GOOGLE_SCHOLAR_NEW_TAB");
        assert_eq!(hit.remainder, "borrow checker");
    }

    #[test]
    fn test_shorter_phrase_still_matches() {
        let phrases = search_phrases();
        let matcher = PhraseMatcher::new(&phrases);

        let hit = matcher.recognize("Search Google, new tab: lifetimes").unwrap();

        assert_eq!(hit.phrase.name.as_str(), "VOX_CMD_SEARCH_GOOGLE_NEW_TAB");
        assert_eq!(hit.remainder, "lifetimes");
    }

    #[test]
    fn test_no_match() {
        let phrases = search_phrases();
        let matcher = PhraseMatcher::new(&phrases);
        assert!(matcher.recognize("open the pod bay doors").is_none());
        assert!(matcher.recognize("").is_none());
    }

    #[test]
    fn test_stems_match_word_prefixes() {
        let phrases = vec![
            CommandPhrase::new("VOX_CMD_PROOFREAD", "proofread", Category::Misc),
            CommandPhrase::new("VOX_CMD_PROOFREAD_STEM", "proof", Category::Misc),
            CommandPhrase::new("VOX_CMD_VIEW_CONSTANTS", "view constan", Category::Misc),
        ];
        let matcher = PhraseMatcher::new(&phrases);

        assert_eq!(
            matcher.recognize("proofread this").unwrap().phrase.name.as_str(),
            "VOX_CMD_PROOFREAD"
        );
        assert_eq!(
            matcher.recognize("proofing this").unwrap().phrase.name.as_str(),
            "VOX_CMD_PROOFREAD_STEM"
        );
        assert_eq!(
            matcher.recognize("view constants").unwrap().phrase.name.as_str(),
            "VOX_CMD_VIEW_CONSTANTS"
        );
    }

    #[test]
    fn test_hyphenated_phrase_matches_spoken_form() {
        let phrases = vec![CommandPhrase::new("MODE_COMMAND", "command-mode", Category::Mode)];
        let matcher = PhraseMatcher::new(&phrases);

        assert!(matcher.recognize_exact("Command mode.").is_some());
    }

    #[test]
    fn test_recognize_exact_rejects_trailing_text() {
        let phrases = search_phrases();
        let matcher = PhraseMatcher::new(&phrases);

        assert!(matcher.recognize_exact("search new tab").is_some());
        assert!(matcher.recognize_exact("search new tab cats").is_none());
    }

    #[test]
    fn test_split_suffix() {
        let phrases = vec![
            CommandPhrase::new("VOX_CMD_SUFFIX_FROM_FILE", "from file", Category::PromptSuffix),
            CommandPhrase::new(
                "VOX_CMD_SUFFIX_FROM_CLIPBOARD",
                "from clipboard",
                Category::PromptSuffix,
            ),
        ];
        let matcher = PhraseMatcher::new(&phrases);

        let (head, suffix) = matcher.split_suffix("Run prompt summarize from clipboard.").unwrap();
        assert_eq!(head, "run prompt summarize");
        assert_eq!(suffix.name.as_str(), "VOX_CMD_SUFFIX_FROM_CLIPBOARD");

        assert!(matcher.split_suffix("run prompt summarize").is_none());
        // suffix must start on a word boundary
        assert!(matcher.split_suffix("reload xfrom file").is_none());
    }

    #[test]
    fn test_empty_after_normalization_is_skipped() {
        let phrases = vec![
            CommandPhrase::new("DIGITS", "123", Category::Misc),
            CommandPhrase::new("VOX_CMD_CUT", "cut", Category::Edit),
        ];
        let matcher = PhraseMatcher::new(&phrases);

        assert_eq!(matcher.len(), 1);
        let hit = matcher.recognize("123 cut").unwrap();
        assert_eq!(hit.phrase.name.as_str(), "VOX_CMD_CUT");
    }

    #[test]
    fn test_order_follows_normalized_length() {
        // "zoom......" is longer as written but normalizes to "zoom"
        let phrases = vec![
            CommandPhrase::new("ZOOM_STEM", "zoom......", Category::Misc),
            CommandPhrase::new("VOX_CMD_ZOOM_IN", "zoom in", Category::Misc),
        ];
        let matcher = PhraseMatcher::new(&phrases);

        let hit = matcher.recognize("zoom in").unwrap();
        assert_eq!(hit.phrase.name.as_str(), "VOX_CMD_ZOOM_IN");
        assert_eq!(hit.remainder, "");

        let hit = matcher.recognize("zoom out").unwrap();
        assert_eq!(hit.phrase.name.as_str(), "ZOOM_STEM");
        assert_eq!(hit.remainder, "out");
    }
}
