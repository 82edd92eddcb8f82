//! Deck Line Parser
//!
//! Classifies each line of a deck file and runs the normalization pipeline
//! over card lines. Splitting and accept/reject live in `validation`.

pub mod line;
pub mod rules;

pub use line::{Comment, Entry, ParsedLine};
pub use rules::{normalize, Fix, Normalized, NormalizationRule, RULES};

/// Parse a single line of a deck file
///
/// Blank lines and `#` comments are classified without touching the
/// pipeline. Lines made only of invisible characters count as blank.
pub fn parse_line(line: &str) -> ParsedLine {
    let visible = line.trim_matches(|c: char| c.is_whitespace() || rules::is_invisible(c));

    if visible.is_empty() {
        return ParsedLine::Empty;
    }

    if let Some(text) = visible.strip_prefix('#') {
        return ParsedLine::Comment(Comment {
            text: text.to_string(),
        });
    }

    let normalized = normalize(line);
    ParsedLine::Entry(Entry {
        raw: line.to_string(),
        text: normalized.text,
        fixes: normalized.fixes,
    })
}
