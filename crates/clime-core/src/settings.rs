//! Plugin settings.
//!
//! Settings are a flat JSON object (the `Clime.sublime-settings` shape):
//!
//! ```json
//! {
//!     "file_extensions": [".c", ".cpp", ".h"],
//!     "libclang_path": "/usr/lib/llvm/lib"
//! }
//! ```
//!
//! Absent keys fall back to [`Settings::default`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading settings from {}: {source}", path.display())]
    /// Reading the settings file failed.
    Io {
        /// The settings file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings JSON: {0}")]
    /// The settings file is not valid JSON for [`Settings`].
    Json(#[from] serde_json::Error),
}

/// Configuration consulted by the checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Extensions of files that get checked (e.g. `".c"`). A leading dot is optional.
    pub file_extensions: Vec<String>,
    /// Directory containing the native compiler library, if it is not on the default path.
    pub libclang_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file_extensions: [".c", ".cc", ".cpp", ".cxx", ".h", ".hh", ".hpp", ".hxx"]
                .into_iter()
                .map(String::from)
                .collect(),
            libclang_path: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        log::debug!(
            "loaded settings from {}: {} file extension(s)",
            path.display(),
            settings.file_extensions.len()
        );
        Ok(settings)
    }

    /// Returns `true` if `path` has one of the configured extensions.
    ///
    /// Comparison is exact and case-sensitive, so `main.C` does not match `.c`.
    pub fn accepts(&self, path: &str) -> bool {
        let Some(extension) = Path::new(path).extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        self.file_extensions
            .iter()
            .any(|allowed| allowed.strip_prefix('.').unwrap_or(allowed) == extension)
    }
}
