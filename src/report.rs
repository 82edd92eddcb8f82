//! Load Reports
//!
//! Text shown to the user after a load: the short summary, the debug
//! console listing keyed by line number, and the inventory of dash
//! variants found in a file.

use std::collections::BTreeMap;
use std::fmt;

use crate::deck::Deck;
use crate::diagnostics::{Issue, ParseDiagnostic};
use crate::error::LoadError;
use crate::parser::rules::DASH_VARIANTS;

const VALID_FORMAT_HINT: &str =
    "Valid format: 'term - definition' (with spaces around the hyphen)";

const SOFT_FIX_ORDER: [Issue; 4] = [
    Issue::UnicodeSpaceFixed,
    Issue::DashNormalized,
    Issue::NumberingStripped,
    Issue::SpacingFixed,
];

/// `1 flashcard`, `3 flashcards`
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Diagnostics grouped by line number for the debug console
#[derive(Debug, Clone, Copy)]
pub struct DebugConsole<'a> {
    diagnostics: &'a [ParseDiagnostic],
}

impl<'a> DebugConsole<'a> {
    pub fn new(diagnostics: &'a [ParseDiagnostic]) -> Self {
        Self { diagnostics }
    }

    pub fn by_line(&self) -> BTreeMap<usize, Vec<&'a ParseDiagnostic>> {
        let mut lines: BTreeMap<usize, Vec<&'a ParseDiagnostic>> = BTreeMap::new();
        for diag in self.diagnostics {
            lines.entry(diag.line_number).or_default().push(diag);
        }
        lines
    }
}

impl fmt::Display for DebugConsole<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.diagnostics.is_empty() {
            return writeln!(f, "No parsing issues.");
        }

        for (line, diags) in self.by_line() {
            writeln!(f, "Line {}: {:?}", line, diags[0].raw_text)?;
            for diag in diags {
                writeln!(f, "    [{}] {}", diag.issue, diag.detail)?;
            }
        }
        Ok(())
    }
}

/// The message shown once a load finishes
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSummary {
    pub title: String,
    pub lines: Vec<String>,
    /// Whether the user should be pointed at the debug console
    pub has_issues: bool,
}

impl LoadSummary {
    pub fn success(deck: &Deck, diagnostics: &[ParseDiagnostic], max_listed: usize) -> Self {
        let mut lines = Vec::new();

        let fixes: Vec<String> = SOFT_FIX_ORDER
            .iter()
            .filter_map(|issue| {
                let count = diagnostics
                    .iter()
                    .filter(|d| d.issue == *issue)
                    .count();
                (count > 0).then(|| format!("{}: {}", issue, plural(count, "line")))
            })
            .collect();
        if !fixes.is_empty() {
            lines.push("Auto-corrections applied:".to_string());
            lines.extend(fixes);
        }

        let skipped: Vec<&ParseDiagnostic> =
            diagnostics.iter().filter(|d| d.is_rejection()).collect();
        if !skipped.is_empty() {
            lines.push(format!(
                "Skipped {}:",
                plural(skipped.len(), "malformed line")
            ));
            list_rejections(&mut lines, &skipped, max_listed);
            lines.push(VALID_FORMAT_HINT.to_string());
        }

        let has_issues = !diagnostics.is_empty();
        if has_issues {
            lines.push("Check the debug console for detailed parsing information.".to_string());
        }

        Self {
            title: format!("Successfully loaded {}", plural(deck.len(), "flashcard")),
            lines,
            has_issues,
        }
    }

    pub fn failure(err: &LoadError, max_listed: usize) -> Self {
        let mut lines = Vec::new();

        match err {
            LoadError::Rejected { diagnostics, .. } => {
                let rejected: Vec<&ParseDiagnostic> =
                    diagnostics.iter().filter(|d| d.is_rejection()).collect();
                lines.push("File refused due to severe formatting issues:".to_string());
                list_rejections(&mut lines, &rejected, max_listed);
                lines.push("Please fix the formatting and try again.".to_string());
            }
            LoadError::NoCards { .. } => {
                lines.push(VALID_FORMAT_HINT.to_string());
            }
            LoadError::Io { .. } | LoadError::Decode { .. } => {
                lines.push(format!("Error loading file: {}", err));
            }
        }

        Self {
            title: "Failed to load flashcards.".to_string(),
            lines,
            has_issues: !err.diagnostics().is_empty(),
        }
    }
}

fn list_rejections(lines: &mut Vec<String>, rejected: &[&ParseDiagnostic], max_listed: usize) {
    for diag in rejected.iter().take(max_listed) {
        lines.push(format!(
            "Line {}: {} - '{}'",
            diag.line_number,
            diag.detail,
            diag.raw_text.trim()
        ));
    }
    if rejected.len() > max_listed {
        lines.push(format!("... and {} more", rejected.len() - max_listed));
    }
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Occurrences of one dash variant in a file
#[derive(Debug, Clone, PartialEq)]
pub struct DashVariantReport {
    pub character: char,
    pub name: &'static str,
    pub count: usize,
    /// Up to three `Line N: text` examples
    pub examples: Vec<String>,
}

impl fmt::Display for DashVariantReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} (U+{:04X}): {}",
            self.name,
            self.character as u32,
            plural(self.count, "occurrence")
        )?;
        for example in &self.examples {
            writeln!(f, "    {}", example)?;
        }
        Ok(())
    }
}

/// Every non-standard dash in `content`, in table order
pub fn dash_inventory(content: &str) -> Vec<DashVariantReport> {
    DASH_VARIANTS
        .iter()
        .filter_map(|&(character, name)| {
            let count = content.matches(character).count();
            if count == 0 {
                return None;
            }
            let examples = content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(character))
                .take(3)
                .map(|(i, line)| format!("Line {}: {}", i + 1, line.trim()))
                .collect();
            Some(DashVariantReport {
                character,
                name,
                count,
                examples,
            })
        })
        .collect()
}
