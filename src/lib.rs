//! Flashcard Deck
//!
//! Loads `term - definition` flashcard files, repairing the formatting
//! slips people make when typing them by hand.
//!
//! This library provides:
//! - Line normalization as an ordered list of named rules
//! - Accept/reject validation with per-line diagnostics
//! - Decks with uniform shuffling
//! - A study session and a terminal front end

pub mod cli;
pub mod config;
pub mod deck;
pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod parser;
pub mod report;
pub mod session;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use deck::{Deck, Flashcard};
pub use diagnostics::{Issue, ParseDiagnostic, RejectReason};
pub use error::{ConfigError, LoadError};
pub use loader::{load_path, load_str, LoadPolicy, LoadedDeck};
pub use parser::{parse_line, ParsedLine};
pub use session::Session;
pub use validation::{validate_document, ValidationResult};
