//! Recognition against the embedded vocabulary

use services_phrase_matcher::PhraseMatcher;
use services_vocabulary::global;
use vox_types::Category;

#[test]
fn test_every_phrase_recognizes_itself() {
    let table = global().unwrap();
    let matcher = PhraseMatcher::from_table(table);

    assert_eq!(matcher.len(), table.len());
    for phrase in table.get_all_phrases() {
        let hit = matcher
            .recognize(&phrase.text)
            .unwrap_or_else(|| panic!("\"{}\" not recognized", phrase.text));
        assert_eq!(hit.phrase.name, phrase.name, "\"{}\" shadowed", phrase.text);
        assert_eq!(hit.remainder, "");
    }
}

#[test]
fn test_search_with_query() {
    let table = global().unwrap();
    let matcher = PhraseMatcher::for_category(table, Category::Search);

    let hit = matcher
        .recognize("Search Google Scholar using clipboard, new tab")
        .unwrap();
    assert_eq!(
        hit.phrase.name.as_str(),
        "VOX_CMD_SEARCH_CLIPBOARD_GOOGLE_SCHOLAR_NEW_TAB"
    );

    let hit = matcher
        .recognize("search perplexity current tab what is a monad")
        .unwrap();
    assert_eq!(hit.phrase.name.as_str(), "VOX_CMD_SEARCH_PERPLEXITY_CURRENT_TAB");
    assert_eq!(hit.remainder, "what is a monad");
}

#[test]
fn test_multimodal_marker_from_noisy_transcription() {
    let table = global().unwrap();
    let matcher = PhraseMatcher::for_category(table, Category::MultimodalMarker);

    let hit = matcher.recognize("Multi-Model python punctuation x equals y").unwrap();
    assert_eq!(hit.phrase.name.as_str(), "MULTIMODAL_PYTHON_PUNCTUATION");
    assert_eq!(hit.remainder, "x equals y");
}

#[test]
fn test_run_prompt_with_suffix() {
    let table = global().unwrap();
    let commands = PhraseMatcher::from_table(table);
    let suffixes = PhraseMatcher::for_category(table, Category::PromptSuffix);

    let hit = commands.recognize("Run prompt summarize from clipboard").unwrap();
    assert_eq!(hit.phrase.name.as_str(), "VOX_CMD_RUN_PROMPT");

    let (argument, suffix) = suffixes.split_suffix(&hit.remainder).unwrap();
    assert_eq!(argument, "summarize");
    assert_eq!(suffix.name.as_str(), "VOX_CMD_SUFFIX_FROM_CLIPBOARD");
}
