//! Parse Diagnostics
//!
//! Per-line records of what the loader fixed or refused. A load returns
//! them as a plain value; nothing here is global.

use serde::Serialize;
use std::fmt;

/// Why a line could not be turned into a flashcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Two leading numbering groups, e.g. `2. 2. term - definition`
    MultipleNumbering,
    /// More than one ` - ` separator remains after normalization
    TooManySeparators,
    /// No ` - ` separator and no single hyphen that could be promoted
    MissingSeparator,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::MultipleNumbering => "multiple numbering patterns",
            RejectReason::TooManySeparators => "too many separators",
            RejectReason::MissingSeparator => "missing separator",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of diagnostic attached to a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    NumberingStripped,
    SpacingFixed,
    DashNormalized,
    UnicodeSpaceFixed,
    Rejected(RejectReason),
}

impl Issue {
    /// Soft fixes never block a load
    pub fn is_soft_fix(self) -> bool {
        !matches!(self, Issue::Rejected(_))
    }

    pub fn label(self) -> &'static str {
        match self {
            Issue::NumberingStripped => "NumberingStripped",
            Issue::SpacingFixed => "SpacingFixed",
            Issue::DashNormalized => "DashNormalized",
            Issue::UnicodeSpaceFixed => "UnicodeSpaceFixed",
            Issue::Rejected(_) => "Rejected",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A diagnostic for one line of the source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseDiagnostic {
    /// 1-based physical line number
    pub line_number: usize,
    /// The line as it appeared in the file
    pub raw_text: String,
    pub issue: Issue,
    pub detail: String,
}

impl ParseDiagnostic {
    pub fn new(
        line_number: usize,
        raw_text: impl Into<String>,
        issue: Issue,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            raw_text: raw_text.into(),
            issue,
            detail: detail.into(),
        }
    }

    pub fn rejected(line_number: usize, raw_text: impl Into<String>, reason: RejectReason) -> Self {
        Self::new(
            line_number,
            raw_text,
            Issue::Rejected(reason),
            reason.as_str(),
        )
    }

    pub fn is_rejection(&self) -> bool {
        !self.issue.is_soft_fix()
    }

    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self.issue {
            Issue::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}: [{}] {}",
            self.line_number, self.issue, self.detail
        )
    }
}
