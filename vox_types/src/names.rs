//! Symbolic identifiers for phrases and settings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable symbolic name of a phrase (e.g. `VOX_CMD_CUT`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhraseName(String);

impl PhraseName {
    /// Creates a new phrase name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhraseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PhraseName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for PhraseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Name of a scalar setting (e.g. `ZOOM_MAX`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingName(String);

impl SettingName {
    /// Creates a new setting name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SettingName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for SettingName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
