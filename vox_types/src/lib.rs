//! # Vox Types
//!
//! This crate defines the data model shared by the vocabulary table, the
//! phrase matcher, and the command-line front end.
//!
//! ## Philosophy
//!
//! - **Names are typed**: phrase names and setting names cannot be confused.
//! - **Closed categories**: a category is an enum, never a free-form string.
//! - **Immutable data**: phrases and settings are plain values with no
//!   mutation API.
//!
//! ## Key Types
//!
//! - [`CommandPhrase`]: a literal phrase with its symbolic name and category
//! - [`Category`]: the functional grouping of a phrase
//! - [`SettingValue`]: a scalar setting (number, URL, or phrase alias)
//! - [`VocabularyError`]: every failure the vocabulary can report

pub mod category;
pub mod error;
pub mod names;
pub mod phrase;
pub mod setting;

pub use category::Category;
pub use error::{ValidationIssue, VocabularyError, VocabularyResult};
pub use names::{PhraseName, SettingName};
pub use phrase::{longest_first, CommandPhrase};
pub use setting::{Setting, SettingValue};
