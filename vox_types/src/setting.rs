//! Scalar settings

use crate::names::{PhraseName, SettingName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Setting value (strongly typed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingValue {
    /// Numeric bound or increment
    Number(f64),
    /// Absolute endpoint URL
    Url(String),
    /// Alias to a phrase by symbolic name
    Phrase(PhraseName),
}

impl SettingValue {
    /// Returns true if this is a number
    pub fn is_number(&self) -> bool {
        matches!(self, SettingValue::Number(_))
    }

    /// Returns true if this is a URL
    pub fn is_url(&self) -> bool {
        matches!(self, SettingValue::Url(_))
    }

    /// Returns true if this is a phrase alias
    pub fn is_phrase(&self) -> bool {
        matches!(self, SettingValue::Phrase(_))
    }

    /// Tries to get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SettingValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Tries to get as URL
    pub fn as_url(&self) -> Option<&str> {
        match self {
            SettingValue::Url(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Tries to get as phrase alias
    pub fn as_phrase(&self) -> Option<&PhraseName> {
        match self {
            SettingValue::Phrase(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Number(v) => write!(f, "{}", v),
            SettingValue::Url(v) => write!(f, "{}", v),
            SettingValue::Phrase(v) => write!(f, "@{}", v),
        }
    }
}

/// A named setting as declared in a vocabulary document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub name: SettingName,
    pub value: SettingValue,
}

impl Setting {
    /// Creates a new setting
    pub fn new(name: impl Into<String>, value: SettingValue) -> Self {
        Self {
            name: SettingName::new(name),
            value,
        }
    }
}
