//! Parsed Line Types
//!
//! What a single line of a deck file turned into after classification and
//! normalization. No accept/reject decisions live here.

use crate::diagnostics::Issue;
use crate::parser::rules::Fix;

/// A classified line of a deck file
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// A candidate card, normalized but not yet validated
    Entry(Entry),
    /// A `#` comment line
    Comment(Comment),
    /// An empty or whitespace-only line
    Empty,
}

/// A card line after normalization
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The line as read from the file
    pub raw: String,
    /// The line after every normalization rule ran
    pub text: String,
    /// Fixes applied on the way, in rule order
    pub fixes: Vec<Fix>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Comment text without the leading `#`
    pub text: String,
}

impl Entry {
    pub fn has_fix(&self, issue: Issue) -> bool {
        self.fixes.iter().any(|fix| fix.issue == issue)
    }
}
