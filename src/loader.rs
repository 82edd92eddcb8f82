//! Deck Loader
//!
//! One blocking read of the whole file, then the parser and the load
//! policy. A failed load never exposes a partial deck.

use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::deck::Deck;
use crate::diagnostics::{Issue, ParseDiagnostic, RejectReason};
use crate::error::LoadError;
use crate::validation::validate_document;

/// What to do with a file that has rejected lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Refuse the whole file if any line is rejected
    #[default]
    Strict,
    /// Drop rejected lines and load the rest
    Partial,
}

/// A successfully loaded deck and the diagnostics of its load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDeck {
    pub deck: Deck,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl LoadedDeck {
    /// True when any line was fixed or dropped
    pub fn has_issues(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn rejections(&self) -> impl Iterator<Item = &ParseDiagnostic> {
        self.diagnostics.iter().filter(|d| d.is_rejection())
    }
}

/// Load a deck from text already in memory
pub fn load_str(content: &str, policy: LoadPolicy) -> Result<LoadedDeck, LoadError> {
    let result = validate_document(content);
    let rejected = result.rejection_count();
    // Conflicting numbering means the file structure is corrupt
    let corrupt = result
        .diagnostics
        .iter()
        .any(|d| d.issue == Issue::Rejected(RejectReason::MultipleNumbering));

    if corrupt || (rejected > 0 && policy == LoadPolicy::Strict) {
        log::warn!("refusing deck: {} line(s) rejected", rejected);
        return Err(LoadError::Rejected {
            rejected,
            diagnostics: result.diagnostics,
        });
    }

    if result.cards.is_empty() {
        log::warn!("refusing deck: no flashcards found");
        return Err(LoadError::NoCards {
            diagnostics: result.diagnostics,
        });
    }

    log::info!(
        "loaded {} flashcard(s), {} diagnostic(s)",
        result.cards.len(),
        result.diagnostics.len()
    );

    Ok(LoadedDeck {
        deck: Deck::new(result.cards),
        diagnostics: result.diagnostics,
    })
}

/// Read and load a deck file
pub fn load_path(path: impl AsRef<Path>, policy: LoadPolicy) -> Result<LoadedDeck, LoadError> {
    let path = path.as_ref();
    log::debug!("loading deck from {:?} ({:?})", path, policy);

    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    load_str(&content, policy)
}
