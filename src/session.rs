//! Study Session
//!
//! Everything a front end needs to drive a deck: the current deck, which
//! card is selected, and the diagnostics of the last load. A failed load
//! clears the deck so the display never shows a partial one.

use rand::Rng;
use std::path::{Path, PathBuf};

use crate::deck::{Deck, Flashcard};
use crate::diagnostics::ParseDiagnostic;
use crate::error::LoadError;
use crate::loader::{load_path, LoadPolicy};
use crate::report::plural;

#[derive(Debug, Clone, Default)]
pub struct Session {
    deck: Deck,
    selection: Option<usize>,
    last_path: Option<PathBuf>,
    diagnostics: Vec<ParseDiagnostic>,
    policy: LoadPolicy,
}

impl Session {
    pub fn new(policy: LoadPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Load `path`, replacing the current deck
    ///
    /// Returns the number of cards loaded. On failure the deck is cleared
    /// and the diagnostics of the failed load are kept for the debug console.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        self.last_path = Some(path.to_path_buf());
        self.selection = None;

        match load_path(path, self.policy) {
            Ok(loaded) => {
                self.deck = loaded.deck;
                self.diagnostics = loaded.diagnostics;
                Ok(self.deck.len())
            }
            Err(err) => {
                self.deck = Deck::default();
                self.diagnostics = err.diagnostics().to_vec();
                Err(err)
            }
        }
    }

    /// Re-open the last file, `None` if nothing was opened yet
    pub fn reload(&mut self) -> Option<Result<usize, LoadError>> {
        let path = self.last_path.clone()?;
        log::debug!("reloading {:?}", path);
        Some(self.open(path))
    }

    /// Select the card at `index`, returning it when it exists
    pub fn select(&mut self, index: usize) -> Option<&Flashcard> {
        let card = self.deck.get(index)?;
        self.selection = Some(index);
        Some(card)
    }

    /// The selected card, definition included
    pub fn reveal(&self) -> Option<&Flashcard> {
        self.deck.get(self.selection?)
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Replace the deck with a shuffled copy and clear the selection
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.deck.is_empty() {
            return;
        }
        self.deck = self.deck.shuffled(rng);
        self.selection = None;
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn terms(&self) -> Vec<&str> {
        self.deck.terms()
    }

    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }

    /// Status line for the display
    pub fn status(&self) -> String {
        if self.deck.is_empty() {
            "No flashcards loaded".to_string()
        } else {
            format!("Loaded {}", plural(self.deck.len(), "flashcard"))
        }
    }
}
