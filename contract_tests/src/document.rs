//! Vocabulary document contract tests
//!
//! These tests define the stable JSON shape that external loaders read.

pub const DOCUMENT_VERSION: u32 = 1;
