//! Normalization Rules
//!
//! An ordered list of named rewrites applied to every card line before it
//! is split. Each rule is a pure function from text to text plus an
//! optional diagnostic tag, so every step can be inspected and tested alone.

use regex::Regex;
use std::sync::LazyLock;

use crate::diagnostics::Issue;

/// Characters that look like a hyphen but are not `-`
pub const DASH_VARIANTS: &[(char, &str)] = &[
    ('\u{2010}', "hyphen"),
    ('\u{2011}', "non-breaking hyphen"),
    ('\u{2012}', "figure dash"),
    ('\u{2013}', "en dash"),
    ('\u{2014}', "em dash"),
    ('\u{2015}', "horizontal bar"),
    ('\u{2212}', "minus sign"),
    ('\u{2E3A}', "two-em dash"),
    ('\u{2E3B}', "three-em dash"),
    ('\u{FE58}', "small em dash"),
    ('\u{FE63}', "small hyphen-minus"),
    ('\u{FF0D}', "fullwidth hyphen-minus"),
];

/// `N.`, `N)`, `(N)` or a bare `N`, followed by whitespace
static NUMBERING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+[.)]|\([0-9]+\)|[0-9]+)\s+").expect("numbering pattern is valid")
});

/// `N - ` used as a numbering group
static DASHED_NUMBERING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\s+-\s+").expect("numbering pattern is valid"));

/// Punctuated numbering only. A bare number after a stripped group is content.
static PUNCTUATED_NUMBERING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+[.)]|\([0-9]+\))\s+").expect("numbering pattern is valid")
});

/// Output of a single rule
#[derive(Debug, Clone, PartialEq)]
pub struct Rewrite {
    pub text: String,
    pub fix: Option<(Issue, String)>,
}

impl Rewrite {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            fix: None,
        }
    }

    fn fixed(text: String, issue: Issue, detail: String) -> Self {
        Self {
            text,
            fix: Some((issue, detail)),
        }
    }
}

/// A named normalization step
#[derive(Clone, Copy)]
pub struct NormalizationRule {
    pub name: &'static str,
    pub apply: fn(&str) -> Rewrite,
}

/// The pipeline, in application order
pub const RULES: &[NormalizationRule] = &[
    NormalizationRule {
        name: "unicode_spaces",
        apply: unicode_spaces,
    },
    NormalizationRule {
        name: "dash_variants",
        apply: dash_variants,
    },
    NormalizationRule {
        name: "numbering",
        apply: numbering,
    },
    NormalizationRule {
        name: "separator_spacing",
        apply: separator_spacing,
    },
];

/// A fix applied by one rule
#[derive(Debug, Clone, PartialEq)]
pub struct Fix {
    pub rule: &'static str,
    pub issue: Issue,
    pub detail: String,
}

/// Result of running the whole pipeline over a line
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub text: String,
    pub fixes: Vec<Fix>,
}

/// Run every rule in order
pub fn normalize(line: &str) -> Normalized {
    let mut text = line.trim().to_string();
    let mut fixes = Vec::new();

    for rule in RULES {
        let rewrite = (rule.apply)(&text);
        if let Some((issue, detail)) = rewrite.fix {
            log::debug!(
                "{}: {:?} -> {:?} ({})",
                rule.name,
                text,
                rewrite.text,
                detail
            );
            fixes.push(Fix {
                rule: rule.name,
                issue,
                detail,
            });
        }
        text = rewrite.text;
    }

    Normalized { text, fixes }
}

/// Unicode space separators and tabs, everything except the plain space
pub fn is_space_variant(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Zero-width, formatting and control characters
pub fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}' | '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FEFF}'
    ) || (c.is_control() && !is_space_variant(c))
}

pub fn dash_variant_name(c: char) -> Option<&'static str> {
    DASH_VARIANTS
        .iter()
        .find(|(variant, _)| *variant == c)
        .map(|(_, name)| *name)
}

/// Byte offsets of every standalone ` - ` hyphen
pub fn separator_positions(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|&(i, &b)| {
            b == b'-' && i > 0 && bytes[i - 1] == b' ' && bytes.get(i + 1) == Some(&b' ')
        })
        .map(|(i, _)| i)
        .collect()
}

/// True when a punctuated numbering group leads the text
pub fn starts_with_numbering(text: &str) -> bool {
    PUNCTUATED_NUMBERING.is_match(text)
}

fn unicode_spaces(line: &str) -> Rewrite {
    let mut replaced = 0;
    let mut removed = 0;
    let mut out = String::with_capacity(line.len());

    for c in line.chars() {
        if is_space_variant(c) {
            replaced += 1;
            out.push(' ');
        } else if is_invisible(c) {
            removed += 1;
        } else {
            out.push(c);
        }
    }

    if replaced == 0 && removed == 0 {
        return Rewrite::unchanged(line);
    }

    let mut parts = Vec::new();
    if replaced > 0 {
        parts.push(format!("replaced {} unusual space character(s)", replaced));
    }
    if removed > 0 {
        parts.push(format!("removed {} invisible character(s)", removed));
    }

    Rewrite::fixed(
        out.trim().to_string(),
        Issue::UnicodeSpaceFixed,
        parts.join("; "),
    )
}

fn dash_variants(line: &str) -> Rewrite {
    let mut found: Vec<&str> = Vec::new();
    let mut out = String::with_capacity(line.len());

    for c in line.chars() {
        match dash_variant_name(c) {
            Some(name) => {
                if !found.contains(&name) {
                    found.push(name);
                }
                out.push('-');
            }
            None => out.push(c),
        }
    }

    if found.is_empty() {
        return Rewrite::unchanged(line);
    }

    Rewrite::fixed(
        out,
        Issue::DashNormalized,
        format!("replaced {} with '-'", found.join(", ")),
    )
}

fn numbering(line: &str) -> Rewrite {
    // `1 - bonjour - hello` still carries a full card after the number
    if let Some(m) = DASHED_NUMBERING.find(line) {
        let rest = &line[m.end()..];
        if separator_positions(rest).len() == 1 {
            return Rewrite::fixed(
                rest.to_string(),
                Issue::NumberingStripped,
                format!("removed leading '{}'", m.as_str().trim_end()),
            );
        }
    }

    if let Some(m) = NUMBERING.find(line) {
        let rest = &line[m.end()..];
        // `3 - three` is a card about the number three, not numbering
        if !rest.is_empty() && !rest.starts_with('-') {
            return Rewrite::fixed(
                rest.to_string(),
                Issue::NumberingStripped,
                format!("removed leading '{}'", m.as_str().trim_end()),
            );
        }
    }
    Rewrite::unchanged(line)
}

fn separator_spacing(line: &str) -> Rewrite {
    if !separator_positions(line).is_empty() {
        return Rewrite::unchanged(line);
    }

    let mut hyphens = line.match_indices('-');
    let (Some((at, _)), None) = (hyphens.next(), hyphens.next()) else {
        return Rewrite::unchanged(line);
    };

    let term = line[..at].trim_end();
    let definition = line[at + 1..].trim_start();
    if term.is_empty() || definition.is_empty() {
        return Rewrite::unchanged(line);
    }

    Rewrite::fixed(
        format!("{} - {}", term, definition),
        Issue::SpacingFixed,
        "inserted spaces around '-'".to_string(),
    )
}
