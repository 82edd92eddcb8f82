//! Validation Engine
//!
//! Splits normalized lines into flashcards and decides which lines are
//! rejected. Every line is checked; nothing returns on the first failure.

use crate::deck::Flashcard;
use crate::diagnostics::{Issue, ParseDiagnostic, RejectReason};
use crate::parser::rules::{separator_positions, starts_with_numbering};
use crate::parser::{Entry, ParsedLine};

/// Result of validating a document or line
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    /// Accepted cards in file order
    pub cards: Vec<Flashcard>,
    /// Soft fixes and rejections in file order
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_fix(&mut self, line: usize, raw: &str, issue: Issue, detail: &str) {
        self.diagnostics
            .push(ParseDiagnostic::new(line, raw, issue, detail));
    }

    pub fn add_rejection(&mut self, line: usize, raw: &str, reason: RejectReason) {
        self.diagnostics
            .push(ParseDiagnostic::rejected(line, raw, reason));
    }

    /// True when no line was rejected
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(ParseDiagnostic::is_rejection)
    }

    pub fn rejections(&self) -> impl Iterator<Item = &ParseDiagnostic> {
        self.diagnostics.iter().filter(|d| d.is_rejection())
    }

    pub fn rejection_count(&self) -> usize {
        self.rejections().count()
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.cards.extend(other.cards);
        self.diagnostics.extend(other.diagnostics);
    }
}

/// Validate a single parsed line
///
/// A card line yields either one card plus its soft fixes, or exactly one
/// rejection.
pub fn validate_line(line_num: usize, parsed: &ParsedLine) -> ValidationResult {
    let mut result = ValidationResult::new();

    match parsed {
        ParsedLine::Entry(entry) => match split_entry(entry) {
            Ok(card) => {
                for fix in &entry.fixes {
                    result.add_fix(line_num, &entry.raw, fix.issue, &fix.detail);
                }
                result.cards.push(card);
            }
            Err(reason) => {
                log::warn!("line {}: rejected ({}): {:?}", line_num, reason, entry.raw);
                result.add_rejection(line_num, &entry.raw, reason);
            }
        },
        ParsedLine::Comment(_) | ParsedLine::Empty => {
            // Comments and empty lines are always valid
        }
    }

    result
}

/// Validate an entire deck file
pub fn validate_document(content: &str) -> ValidationResult {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    let mut result = ValidationResult::new();

    for (line_num, line) in content.lines().enumerate() {
        let parsed = crate::parser::parse_line(line);
        result.merge(validate_line(line_num + 1, &parsed));
    }

    result
}

/// Split a normalized entry on its single ` - ` separator
fn split_entry(entry: &Entry) -> Result<Flashcard, RejectReason> {
    if entry.has_fix(Issue::NumberingStripped) && starts_with_numbering(&entry.text) {
        return Err(RejectReason::MultipleNumbering);
    }

    match separator_positions(&entry.text).as_slice() {
        [] => Err(RejectReason::MissingSeparator),
        [at] => {
            let (term, definition) = (&entry.text[..*at], &entry.text[*at + 1..]);
            Ok(Flashcard::new(term, definition))
        }
        _ => Err(RejectReason::TooManySeparators),
    }
}
