//! Phrase contract tests
//!
//! Every phrase, in declaration order, with the text and category that
//! recognizers and dispatchers match on.

use vox_types::Category;

// ===== Phrase Table =====
pub const PHRASES: &[(&str, &str, Category)] = &[
    ("VOX_CMD_CUT", "cut", Category::Edit),
    ("VOX_CMD_COPY", "copy", Category::Edit),
    ("VOX_CMD_PASTE", "paste from clipboard", Category::Edit),
    ("VOX_CMD_DELETE", "delete", Category::Edit),
    ("VOX_CMD_SELECT_ALL", "select all", Category::Edit),
    ("VOX_CMD_TAB_CLOSE", "close current tab", Category::Tab),
    ("VOX_CMD_TAB_BACK", "go backwards", Category::Tab),
    ("VOX_CMD_TAB_FORWARD", "go forwards", Category::Tab),
    ("VOX_CMD_TAB_REFRESH", "refresh current tab", Category::Tab),
    ("VOX_CMD_LOAD_NEW_TAB", "go to new tab", Category::Tab),
    ("VOX_CMD_LOAD_CURRENT_TAB", "go to current tab", Category::Tab),
    ("VOX_CMD_OPEN_EDITOR", "open editor", Category::Misc),
    ("VOX_CMD_OPEN_FILE", "open file", Category::Misc),
    ("VOX_CMD_OPEN_URL_BUCKET", "open url bucket", Category::Misc),
    ("VOX_CMD_PROOFREAD_SQL", "translate to sequel", Category::Misc),
    ("VOX_CMD_PROOFREAD_PYTHON", "translate to python", Category::Misc),
    ("VOX_CMD_PROOFREAD", "proofread", Category::Misc),
    ("VOX_CMD_PROOFREAD_STEM", "proof", Category::Misc),
    ("VOX_CMD_VIEW_CONSTANTS", "view constan", Category::Misc),
    ("VOX_CMD_VIEW_JOB_QUEUE", "view running jobs", Category::Misc),
    ("VOX_CMD_ZOOM_IN", "zoom in", Category::Misc),
    ("VOX_CMD_ZOOM_OUT", "zoom out", Category::Misc),
    ("VOX_CMD_ZOOM_RESET", "zoom reset", Category::Misc),
    ("VOX_CMD_MODE_RESET", "reset", Category::Mode),
    ("VOX_CMD_MODE_EXIT", "exit", Category::Mode),
    ("VOX_CMD_SET_LINK_MODE", "set link mode", Category::Mode),
    ("LINK_MODE_DRILL_DOWN", "drill down", Category::Mode),
    ("LINK_MODE_NEW_TAB", "new tab", Category::Mode),
    ("LINK_MODE_CURRENT_TAB", "current tab", Category::Mode),
    ("VOX_CMD_SET_PROMPT_MODE", "set prompt mode", Category::Mode),
    ("PROMPT_MODE_VERBOSE", "verbose", Category::Mode),
    ("PROMPT_MODE_QUIET", "quiet", Category::Mode),
    ("VOX_CMD_SEARCH_DDG_NEW_TAB", "search new tab", Category::Search),
    ("VOX_CMD_SEARCH_DDG_CURRENT_TAB", "search current tab", Category::Search),
    ("VOX_CMD_SEARCH_GOOGLE_NEW_TAB", "search google new tab", Category::Search),
    ("VOX_CMD_SEARCH_GOOGLE_CURRENT_TAB", "search google current tab", Category::Search),
    ("VOX_CMD_SEARCH_PHIND_NEW_TAB", "search phind new tab", Category::Search),
    ("VOX_CMD_SEARCH_PHIND_CURRENT_TAB", "search phind current tab", Category::Search),
    ("VOX_CMD_SEARCH_PERPLEXITY_NEW_TAB", "search perplexity new tab", Category::Search),
    ("VOX_CMD_SEARCH_PERPLEXITY_CURRENT_TAB", "search perplexity current tab", Category::Search),
    ("VOX_CMD_SEARCH_GOOGLE_SCHOLAR_NEW_TAB", "search google scholar new tab", Category::Search),
    ("VOX_CMD_SEARCH_GOOGLE_SCHOLAR_CURRENT_TAB", "search google scholar current tab", Category::Search),
    ("VOX_CMD_SEARCH_CLIPBOARD_DDG_NEW_TAB", "search using clipboard new tab", Category::Search),
    ("VOX_CMD_SEARCH_CLIPBOARD_DDG_CURRENT_TAB", "search using clipboard current tab", Category::Search),
    ("VOX_CMD_SEARCH_CLIPBOARD_GOOGLE_NEW_TAB", "search google using clipboard new tab", Category::Search),
    ("VOX_CMD_SEARCH_CLIPBOARD_GOOGLE_CURRENT_TAB", "search google using clipboard current tab", Category::Search),
    ("VOX_CMD_SEARCH_CLIPBOARD_PHIND_NEW_TAB", "search phind using clipboard new tab", Category::Search),
    ("VOX_CMD_SEARCH_CLIPBOARD_PHIND_CURRENT_TAB", "search phind using clipboard current tab", Category::Search),
    ("VOX_CMD_SEARCH_CLIPBOARD_PERPLEXITY_NEW_TAB", "search perplexity using clipboard new tab", Category::Search),
    ("VOX_CMD_SEARCH_CLIPBOARD_PERPLEXITY_CURRENT_TAB", "search perplexity using clipboard current tab", Category::Search),
    ("VOX_CMD_SEARCH_CLIPBOARD_GOOGLE_SCHOLAR_NEW_TAB", "search google scholar using clipboard new tab", Category::Search),
    ("VOX_CMD_SEARCH_CLIPBOARD_GOOGLE_SCHOLAR_CURRENT_TAB", "search google scholar using clipboard current tab", Category::Search),
    ("MULTIMODAL_CONTACT_INFO", "multimodal contact information", Category::MultimodalMarker),
    ("MULTIMODAL_PYTHON_PUNCTUATION", "multimodal python punctuation", Category::MultimodalMarker),
    ("MULTIMODAL_PYTHON_PROOFREAD", "multimodal python proofread", Category::MultimodalMarker),
    ("MULTIMODAL_TEXT_EMAIL", "multimodal text email", Category::MultimodalMarker),
    ("STEM_MULTIMODAL_BROWSER", "multimodal browser", Category::MultimodalMarker),
    ("STEM_MULTIMODAL_AGENT", "multimodal agent", Category::MultimodalMarker),
    ("STEM_MULTIMODAL_SERVER_SEARCH", "multimodal server search", Category::MultimodalMarker),
    ("VOX_CMD_RUN_PROMPT", "run prompt", Category::Misc),
    ("VOX_CMD_SUFFIX_FROM_FILE", "from file", Category::PromptSuffix),
    ("VOX_CMD_SUFFIX_FROM_CLIPBOARD", "from clipboard", Category::PromptSuffix),
    ("VOX_CMD_SAVE_FROM_CLIPBOARD", "save from clipboard", Category::Misc),
    ("MODE_TRANSCRIPTION", "transcription mode", Category::Mode),
    ("MODE_COMMAND", "command-mode", Category::Mode),
    ("MODE_AGENT", "agent mode", Category::Mode),
];
