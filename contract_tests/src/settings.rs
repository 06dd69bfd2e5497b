//! Setting contract tests
//!
//! Consumers rely on these values bit-for-bit.

// ===== Zoom =====
pub const ZOOM_INCREMENT: f64 = 0.075;
pub const ZOOM_MIN: f64 = 0.3;
pub const ZOOM_MAX: f64 = 5.0;
pub const ZOOM_DEFAULT: f64 = 1.0;

// ===== Local services =====
pub const TTS_SERVER_ADDRESS: &str = "http://127.0.0.1:5002";
pub const GIB_SERVER_ADDRESS: &str = "http://127.0.0.1:7999";
pub const EDITOR_URL: &str = "http://127.0.0.1:8080/genie-plugin-firefox/html/editor-quill.html";
pub const BUCKET_URL: &str = "http://127.0.0.1:8080/genie-plugin-firefox/html/blank.html";
pub const CONSTANTS_URL: &str = "http://127.0.0.1:8080/genie-plugin-firefox/js/constants.js";

// ===== Search engines =====
pub const SEARCH_URL_GOOGLE: &str = "https://www.google.com/search";
pub const SEARCH_URL_GOOGLE_SCHOLAR: &str = "https://scholar.google.com/scholar";
pub const SEARCH_URL_DDG: &str = "https://www.duckduckgo.com/";
pub const SEARCH_URL_PHIND: &str = "https://www.phind.com/search";
pub const SEARCH_URL_PERPLEXITY: &str = "https://www.perplexity.ai/search";
