//! Where a vocabulary comes from
//!
//! The authoritative vocabulary is compiled into the crate. A file can replace
//! it without code changes, either explicitly or through `VOX_VOCABULARY`.

use crate::VocabularyTable;
use once_cell::sync::OnceCell;
use std::borrow::Cow;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use vox_types::{VocabularyError, VocabularyResult};

/// Environment variable naming a vocabulary file
pub const VOCABULARY_ENV_VAR: &str = "VOX_VOCABULARY";

/// The authoritative vocabulary document
pub const EMBEDDED_DOCUMENT: &str = include_str!("../data/vox-commands.json");

/// Location of a vocabulary document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VocabularySource {
    /// The document compiled into this crate
    #[default]
    Embedded,
    /// A JSON document on disk
    File(PathBuf),
}

impl VocabularySource {
    /// Uses `VOX_VOCABULARY` when set and non-empty, otherwise the embedded document
    pub fn from_env() -> Self {
        Self::from_path_var(env::var_os(VOCABULARY_ENV_VAR))
    }

    /// Interprets the value of a path variable; unset or empty means embedded
    pub fn from_path_var(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => VocabularySource::File(PathBuf::from(path)),
            _ => VocabularySource::Embedded,
        }
    }

    /// Loads the table, sharing the global one for the embedded document
    pub fn table(&self) -> VocabularyResult<Cow<'static, VocabularyTable>> {
        match self {
            VocabularySource::Embedded => global().map(Cow::Borrowed),
            VocabularySource::File(_) => VocabularyTable::load(self).map(Cow::Owned),
        }
    }

    /// Reads the raw document bytes
    pub fn read(&self) -> VocabularyResult<Vec<u8>> {
        match self {
            VocabularySource::Embedded => Ok(EMBEDDED_DOCUMENT.as_bytes().to_vec()),
            VocabularySource::File(path) => {
                debug!(path = %path.display(), "reading vocabulary file");
                fs::read(path).map_err(|e| VocabularyError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
            }
        }
    }
}

static GLOBAL: OnceCell<VocabularyTable> = OnceCell::new();

/// Returns the process-wide table built from the embedded document
///
/// The table is built on first use and shared by reference afterwards.
pub fn global() -> VocabularyResult<&'static VocabularyTable> {
    GLOBAL.get_or_try_init(|| {
        debug!("building global vocabulary table");
        VocabularyTable::load(&VocabularySource::Embedded)
    })
}
