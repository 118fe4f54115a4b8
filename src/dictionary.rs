//! Common-password dictionary.
//!
//! Loaded once at process start and treated as immutable for the process
//! lifetime; share it across callers with `Arc`. Reads need no locking.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Curated list shipped with the crate, used when no external file is given.
const BUILTIN_DICTIONARY: &str = include_str!("../assets/common-passwords.txt");

/// Environment variable naming an external dictionary file.
pub const DICT_PATH_ENV: &str = "PWD_DICT_PATH";

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Dictionary file is empty")]
    EmptyFile,
}

/// Immutable set of known weak passwords.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: HashSet<String>,
}

impl Dictionary {
    /// Builds the dictionary from the curated list embedded in the crate.
    pub fn builtin() -> Self {
        Dictionary {
            entries: parse_entries(BUILTIN_DICTIONARY),
        }
    }

    /// Loads the dictionary from an external file, one password per line.
    ///
    /// # Errors
    ///
    /// Returns error if the file does not exist, cannot be read, or
    /// contains no entries.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: FileNotFound {:?}", path);
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let entries = parse_entries(&content);

        if entries.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: Empty file {:?}", path);
            return Err(DictionaryError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Dictionary loaded: {} entries from {:?}", entries.len(), path);

        Ok(Dictionary { entries })
    }

    /// Loads from the file named by `PWD_DICT_PATH`, falling back to the
    /// builtin list when the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns error only when the variable is set and the file fails to
    /// load. The process must not serve requests in that state.
    pub fn from_env_or_builtin() -> Result<Self, DictionaryError> {
        match std::env::var(DICT_PATH_ENV) {
            Ok(path) => Self::from_path(PathBuf::from(path)),
            Err(_) => Ok(Self::builtin()),
        }
    }

    /// Checks whether a candidate matches a known weak password.
    ///
    /// Matching is case-insensitive; when the exact form is not found,
    /// trailing digits and symbols are stripped and the lookup retried,
    /// so "Password2024!" still hits "password".
    pub fn is_common(&self, candidate: &str) -> bool {
        let lowered = candidate.to_lowercase();
        if self.entries.contains(&lowered) {
            return true;
        }

        let stripped = lowered.trim_end_matches(|c: char| !c.is_alphabetic());
        !stripped.is_empty() && stripped != lowered && self.entries.contains(stripped)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

fn parse_entries(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect()
}
