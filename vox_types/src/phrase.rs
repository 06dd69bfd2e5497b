//! Command phrases and longest-match ordering

use crate::category::Category;
use crate::names::PhraseName;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A literal phrase matched against transcribed speech
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandPhrase {
    /// Stable symbolic identifier
    pub name: PhraseName,
    /// Literal phrase text
    pub text: String,
    /// Functional grouping
    pub category: Category,
}

impl CommandPhrase {
    /// Creates a new command phrase
    pub fn new(name: impl Into<String>, text: impl Into<String>, category: Category) -> Self {
        Self {
            name: PhraseName::new(name),
            text: text.into(),
            category,
        }
    }

    /// Length used for longest-match ordering, in characters
    pub fn match_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Sorts phrases longest text first
///
/// The sort is stable: phrases of equal length keep their relative order.
/// A phrase that is a prefix of another is always placed after it.
pub fn longest_first<P>(phrases: &mut [P])
where
    P: AsRef<CommandPhrase>,
{
    phrases.sort_by_key(|phrase| Reverse(phrase.as_ref().match_len()));
}

impl AsRef<CommandPhrase> for CommandPhrase {
    fn as_ref(&self) -> &CommandPhrase {
        self
    }
}
