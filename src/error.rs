//! Error types for loading decks and settings.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

use crate::diagnostics::ParseDiagnostic;

/// Why a deck could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read. The user has to pick another one.
    #[error("cannot read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{} is not UTF-8 text", path.display())]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },

    /// At least one line could not be salvaged under the strict policy.
    #[error("file refused: {rejected} line(s) could not be parsed")]
    Rejected {
        rejected: usize,
        diagnostics: Vec<ParseDiagnostic>,
    },

    /// Nothing in the file became a card.
    #[error("no flashcards found")]
    NoCards { diagnostics: Vec<ParseDiagnostic> },
}

impl LoadError {
    /// Every diagnostic gathered before the load failed
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        match self {
            LoadError::Rejected { diagnostics, .. } | LoadError::NoCards { diagnostics } => {
                diagnostics
            }
            LoadError::Io { .. } | LoadError::Decode { .. } => &[],
        }
    }
}

/// Errors reading a settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
