//! Document validation
//!
//! Every problem in a document is collected before the document is rejected,
//! so a broken vocabulary file can be fixed in one pass.

use crate::document::VocabularyDocument;
use crate::keys;
use std::collections::HashSet;
use tracing::warn;
use url::Url;
use vox_types::{SettingValue, ValidationIssue, VocabularyError, VocabularyResult};

/// Validates a document, returning every issue found
pub fn validate_document(document: &VocabularyDocument) -> VocabularyResult<()> {
    let mut issues = Vec::new();

    check_phrases(document, &mut issues);
    check_settings(document, &mut issues);
    check_zoom_bounds(document, &mut issues);

    if issues.is_empty() {
        return Ok(());
    }

    for issue in &issues {
        warn!(subject = %issue.subject, "{}", issue.message);
    }
    Err(VocabularyError::Invalid(issues))
}

fn check_phrases(document: &VocabularyDocument, issues: &mut Vec<ValidationIssue>) {
    let mut names = HashSet::new();
    let mut texts = HashSet::new();

    for phrase in &document.phrases {
        let name = phrase.name.as_str();

        if name.trim().is_empty() {
            issues.push(ValidationIssue::new(name, "phrase name is empty"));
        }
        if !names.insert(name) {
            issues.push(ValidationIssue::new(name, "duplicate phrase name"));
        }

        if phrase.text.trim().is_empty() {
            issues.push(ValidationIssue::new(name, "phrase text is empty"));
        } else if !texts.insert(phrase.text.as_str()) {
            issues.push(ValidationIssue::new(
                name,
                format!("duplicate phrase text \"{}\"", phrase.text),
            ));
        }
    }
}

fn check_settings(document: &VocabularyDocument, issues: &mut Vec<ValidationIssue>) {
    let phrase_names: HashSet<&str> = document
        .phrases
        .iter()
        .map(|phrase| phrase.name.as_str())
        .collect();
    let mut names = HashSet::new();

    for setting in &document.settings {
        let name = setting.name.as_str();

        if !names.insert(name) {
            issues.push(ValidationIssue::new(name, "duplicate setting name"));
        }

        match &setting.value {
            SettingValue::Number(value) => {
                if !value.is_finite() {
                    issues.push(ValidationIssue::new(name, "number must be finite"));
                }
            }
            SettingValue::Url(value) => {
                if let Err(e) = Url::parse(value) {
                    issues.push(ValidationIssue::new(
                        name,
                        format!("invalid URL \"{}\": {}", value, e),
                    ));
                }
            }
            SettingValue::Phrase(target) => {
                if !phrase_names.contains(target.as_str()) {
                    issues.push(ValidationIssue::new(
                        name,
                        format!("aliases unknown phrase {}", target),
                    ));
                }
            }
        }
    }
}

const ZOOM_KEYS: [&str; 4] = [
    keys::ZOOM_INCREMENT,
    keys::ZOOM_MIN,
    keys::ZOOM_MAX,
    keys::ZOOM_DEFAULT,
];

fn check_zoom_bounds(document: &VocabularyDocument, issues: &mut Vec<ValidationIssue>) {
    for setting in &document.settings {
        let name = setting.name.as_str();
        if ZOOM_KEYS.contains(&name) && !setting.value.is_number() {
            issues.push(ValidationIssue::new(
                name,
                format!("must be a number, got {}", setting.value),
            ));
        }
    }

    let number = |key: &str| {
        document
            .settings
            .iter()
            .find(|setting| setting.name.as_str() == key)
            .and_then(|setting| setting.value.as_number())
    };

    if let Some(increment) = number(keys::ZOOM_INCREMENT) {
        if increment <= 0.0 {
            issues.push(ValidationIssue::new(
                keys::ZOOM_INCREMENT,
                "must be greater than zero",
            ));
        }
    }

    let min = number(keys::ZOOM_MIN);
    let max = number(keys::ZOOM_MAX);
    let default = number(keys::ZOOM_DEFAULT);

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            issues.push(ValidationIssue::new(
                keys::ZOOM_MIN,
                format!("{} exceeds {} {}", min, keys::ZOOM_MAX, max),
            ));
        }
    }
    if let (Some(min), Some(default)) = (min, default) {
        if default < min {
            issues.push(ValidationIssue::new(
                keys::ZOOM_DEFAULT,
                format!("{} is below {} {}", default, keys::ZOOM_MIN, min),
            ));
        }
    }
    if let (Some(max), Some(default)) = (max, default) {
        if default > max {
            issues.push(ValidationIssue::new(
                keys::ZOOM_DEFAULT,
                format!("{} is above {} {}", default, keys::ZOOM_MAX, max),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vox_types::{Category, CommandPhrase, Setting};

    fn issues_of(document: &VocabularyDocument) -> Vec<ValidationIssue> {
        match validate_document(document) {
            Err(VocabularyError::Invalid(issues)) => issues,
            other => panic!("Expected Invalid error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_document() {
        let document = VocabularyDocument::new()
            .with_phrase(CommandPhrase::new("LINK_MODE_DRILL_DOWN", "drill down", Category::Mode))
            .with_setting(Setting::new(
                "LINK_MODE_DEFAULT",
                SettingValue::Phrase("LINK_MODE_DRILL_DOWN".into()),
            ))
            .with_setting(Setting::new(
                "SEARCH_URL_DDG",
                SettingValue::Url("https://www.duckduckgo.com/".to_string()),
            ));

        assert!(validate_document(&document).is_ok());
    }

    #[test]
    fn test_duplicate_names_and_texts() {
        let document = VocabularyDocument::new()
            .with_phrase(CommandPhrase::new("VOX_CMD_CUT", "cut", Category::Edit))
            .with_phrase(CommandPhrase::new("VOX_CMD_CUT", "copy", Category::Edit))
            .with_phrase(CommandPhrase::new("VOX_CMD_SNIP", "cut", Category::Edit));

        let issues = issues_of(&document);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0], ValidationIssue::new("VOX_CMD_CUT", "duplicate phrase name"));
        assert_eq!(issues[1].subject, "VOX_CMD_SNIP");
        assert!(issues[1].message.contains("duplicate phrase text"));
    }

    #[test]
    fn test_empty_text() {
        let document = VocabularyDocument::new()
            .with_phrase(CommandPhrase::new("VOX_CMD_BLANK", "   ", Category::Misc));

        let issues = issues_of(&document);
        assert_eq!(issues, vec![ValidationIssue::new("VOX_CMD_BLANK", "phrase text is empty")]);
    }

    #[test]
    fn test_bad_url_and_dangling_alias() {
        let document = VocabularyDocument::new()
            .with_setting(Setting::new(
                "TTS_SERVER_ADDRESS",
                SettingValue::Url("127.0.0.1:5002/no-scheme".to_string()),
            ))
            .with_setting(Setting::new(
                "PROMPT_MODE_DEFAULT",
                SettingValue::Phrase("PROMPT_MODE_LOUD".into()),
            ));

        let issues = issues_of(&document);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].subject, "TTS_SERVER_ADDRESS");
        assert!(issues[0].message.starts_with("invalid URL"));
        assert_eq!(issues[1].subject, "PROMPT_MODE_DEFAULT");
        assert_eq!(issues[1].message, "aliases unknown phrase PROMPT_MODE_LOUD");
    }

    #[test]
    fn test_duplicate_setting_name() {
        let document = VocabularyDocument::new()
            .with_setting(Setting::new(keys::ZOOM_MAX, SettingValue::Number(5.0)))
            .with_setting(Setting::new(keys::ZOOM_MAX, SettingValue::Number(6.0)));

        let issues = issues_of(&document);
        assert_eq!(issues, vec![ValidationIssue::new(keys::ZOOM_MAX, "duplicate setting name")]);
    }

    #[test]
    fn test_zoom_default_out_of_bounds() {
        let document = VocabularyDocument::new()
            .with_setting(Setting::new(keys::ZOOM_MIN, SettingValue::Number(0.3)))
            .with_setting(Setting::new(keys::ZOOM_MAX, SettingValue::Number(5.0)))
            .with_setting(Setting::new(keys::ZOOM_DEFAULT, SettingValue::Number(7.0)));

        let issues = issues_of(&document);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].subject, keys::ZOOM_DEFAULT);
        assert_eq!(issues[0].message, "7 is above ZOOM_MAX 5");
    }

    #[test]
    fn test_zoom_inverted_bounds_and_bad_increment() {
        let document = VocabularyDocument::new()
            .with_setting(Setting::new(keys::ZOOM_INCREMENT, SettingValue::Number(0.0)))
            .with_setting(Setting::new(keys::ZOOM_MIN, SettingValue::Number(5.0)))
            .with_setting(Setting::new(keys::ZOOM_MAX, SettingValue::Number(0.3)));

        let subjects: Vec<_> = issues_of(&document)
            .into_iter()
            .map(|issue| issue.subject)
            .collect();
        assert_eq!(subjects, vec![keys::ZOOM_INCREMENT, keys::ZOOM_MIN]);
    }

    #[test]
    fn test_non_finite_number() {
        let document = VocabularyDocument::new()
            .with_setting(Setting::new("ZOOM_STEP", SettingValue::Number(f64::NAN)));

        let issues = issues_of(&document);
        assert_eq!(issues, vec![ValidationIssue::new("ZOOM_STEP", "number must be finite")]);
    }

    #[test]
    fn test_zoom_key_must_be_a_number() {
        let document = VocabularyDocument::new()
            .with_setting(Setting::new(
                keys::ZOOM_MIN,
                SettingValue::Url("http://127.0.0.1:5002".to_string()),
            ))
            .with_setting(Setting::new(keys::ZOOM_MAX, SettingValue::Number(5.0)))
            .with_setting(Setting::new(keys::ZOOM_DEFAULT, SettingValue::Number(1.0)));

        let issues = issues_of(&document);
        assert_eq!(
            issues,
            vec![ValidationIssue::new(
                keys::ZOOM_MIN,
                "must be a number, got http://127.0.0.1:5002"
            )]
        );
    }
}
