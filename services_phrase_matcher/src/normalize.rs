//! Transcription normalization
//!
//! Speech-to-text output is noisy: "multi-modal", "Multi Model", stray
//! punctuation and digits. Phrases and input are both reduced to lowercase
//! ASCII words separated by single spaces before they are compared.

use once_cell::sync::Lazy;
use regex::Regex;

static MULTIMODAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)multi[ -]?mod[ae]l").expect("multimodal regex must compile"));

static TOGGLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)t[ao]ggle").expect("toggle regex must compile"));

/// Repairs the first common mis-transcription of "multimodal" and "toggle"
///
/// Everything else in the input, including case and punctuation, is kept.
pub fn cleanup_prefix(raw: &str) -> String {
    let text = MULTIMODAL_RE.replacen(raw, 1, "multimodal");
    TOGGLE_RE.replacen(&text, 1, "toggle").into_owned()
}

/// Reduces text to lowercase ASCII words separated by single spaces
pub fn normalize(raw: &str) -> String {
    let cleaned = cleanup_prefix(raw);
    let letters: String = cleaned
        .chars()
        .map(|c| if c == '-' { ' ' } else { c })
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    letters
        .to_ascii_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
