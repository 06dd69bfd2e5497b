//! Multimodal transcription modes
//!
//! A transcription may open with a three-word descriptor such as
//! "multimodal text email" that selects how the rest of it is processed.

use crate::normalize::{cleanup_prefix, normalize};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// How a transcription should be processed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptionMode {
    TextRaw,
    TextEmail,
    TextPunctuation,
    TextProofread,
    ContactInformation,
    PythonPunctuation,
    PythonProofread,
    ServerSearch,
    RunPrompt,
}

impl TranscriptionMode {
    /// Every mode, in descriptor order
    pub const ALL: [TranscriptionMode; 9] = [
        TranscriptionMode::TextRaw,
        TranscriptionMode::TextEmail,
        TranscriptionMode::TextPunctuation,
        TranscriptionMode::TextProofread,
        TranscriptionMode::ContactInformation,
        TranscriptionMode::PythonPunctuation,
        TranscriptionMode::PythonProofread,
        TranscriptionMode::ServerSearch,
        TranscriptionMode::RunPrompt,
    ];

    /// Mode used when no descriptor or prefix applies
    pub const DEFAULT: TranscriptionMode = TranscriptionMode::TextPunctuation;

    /// Number of words in every descriptor
    pub const DESCRIPTOR_WORDS: usize = 3;

    /// Spoken descriptor that selects this mode
    pub fn descriptor(&self) -> &'static str {
        match self {
            TranscriptionMode::TextRaw => "multimodal text raw",
            TranscriptionMode::TextEmail => "multimodal text email",
            TranscriptionMode::TextPunctuation => "multimodal text punctuation",
            TranscriptionMode::TextProofread => "multimodal text proofread",
            TranscriptionMode::ContactInformation => "multimodal contact information",
            TranscriptionMode::PythonPunctuation => "multimodal python punctuation",
            TranscriptionMode::PythonProofread => "multimodal python proofread",
            TranscriptionMode::ServerSearch => "multimodal server search",
            TranscriptionMode::RunPrompt => "multimodal run prompt",
        }
    }

    /// Looks up a mode by its normalized descriptor
    pub fn from_descriptor(descriptor: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.descriptor() == descriptor)
    }
}

impl Default for TranscriptionMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TranscriptionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.descriptor())
    }
}

/// Outcome of mode resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeResolution {
    /// Selected mode
    pub mode: TranscriptionMode,
    /// Transcription with the descriptor removed, if one was spoken
    pub text: String,
}

/// Determines the transcription mode of a raw transcription
///
/// The first three normalized words select the mode and are removed from
/// the returned text. Otherwise `prefix` (a descriptor supplied by the
/// caller, e.g. from a UI toggle) selects it, and failing that the default
/// mode applies. The returned text keeps its original casing and punctuation.
pub fn resolve_mode(raw: &str, prefix: Option<&str>) -> ModeResolution {
    let raw = cleanup_prefix(raw);
    let normalized = normalize(&raw);
    let words: Vec<&str> = normalized.split_whitespace().collect();

    let prefix_mode = prefix.and_then(|p| TranscriptionMode::from_descriptor(&normalize(p)));

    if words.len() >= TranscriptionMode::DESCRIPTOR_WORDS {
        let first_words = words[..TranscriptionMode::DESCRIPTOR_WORDS].join(" ");
        if let Some(mode) = TranscriptionMode::from_descriptor(&first_words) {
            let text = skip_words(&raw, TranscriptionMode::DESCRIPTOR_WORDS).to_string();
            debug!(%mode, "descriptor selected transcription mode");
            return ModeResolution { mode, text };
        }
    }

    let mode = prefix_mode.unwrap_or_default();
    debug!(%mode, from_prefix = prefix_mode.is_some(), "transcription mode resolved");
    ModeResolution { mode, text: raw }
}

/// Returns the raw text after its first `count` normalized words
///
/// Words are split the way `normalize` splits them: on whitespace and `-`,
/// with runs holding no ASCII letter not counted as words.
fn skip_words(raw: &str, count: usize) -> &str {
    let mut seen = 0;
    let mut has_letter = false;

    for (i, c) in raw.char_indices() {
        if c.is_whitespace() || c == '-' {
            if has_letter {
                seen += 1;
                if seen == count {
                    return raw[i..].trim_start();
                }
            }
            has_letter = false;
        } else if c.is_ascii_alphabetic() {
            has_letter = true;
        }
    }
    ""
}
