//! End-to-end checks of the normalization pipeline through `load_str`
use flashcard_deck::{load_str, Flashcard, Issue, LoadError, LoadPolicy, RejectReason};

fn load_one(line: &str) -> (Flashcard, Vec<Issue>) {
    let loaded = load_str(line, LoadPolicy::Strict).expect("line loads");
    assert_eq!(loaded.deck.len(), 1, "expected exactly one card from {:?}", line);
    let issues = loaded.diagnostics.iter().map(|d| d.issue).collect();
    (loaded.deck.cards()[0].clone(), issues)
}

fn reject_reason(line: &str) -> RejectReason {
    let err = load_str(line, LoadPolicy::Strict).expect_err("line is rejected");
    let diagnostics = match err {
        LoadError::Rejected { diagnostics, .. } => diagnostics,
        other => panic!("expected a rejection for {:?}, got {:?}", line, other),
    };
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line_number, 1);
    diagnostics[0].reject_reason().expect("diagnostic is a rejection")
}

#[test]
fn test_canonical_lines_have_no_diagnostics() {
    for (line, term, definition) in [
        ("bonjour - hello", "bonjour", "hello"),
        ("l'escalier (le) - the staircase", "l'escalier (le)", "the staircase"),
        ("well-known - famous", "well-known", "famous"),
        ("3 - three", "3", "three"),
    ] {
        let (card, issues) = load_one(line);
        assert_eq!(card, Flashcard::new(term, definition));
        assert!(issues.is_empty(), "{:?} produced {:?}", line, issues);
    }
}

#[test]
fn test_numbered_line() {
    let (card, issues) = load_one("1. bonjour - hello");
    assert_eq!(card, Flashcard::new("bonjour", "hello"));
    assert_eq!(issues, [Issue::NumberingStripped]);
}

#[test]
fn test_dash_numbered_line() {
    let (card, issues) = load_one("1 - bonjour - hello");
    assert_eq!(card, Flashcard::new("bonjour", "hello"));
    assert_eq!(issues, [Issue::NumberingStripped]);
}

#[test]
fn test_unspaced_hyphen() {
    let (card, issues) = load_one("bonjour-hello");
    assert_eq!(card, Flashcard::new("bonjour", "hello"));
    assert_eq!(issues, [Issue::SpacingFixed]);
}

#[test]
fn test_en_dash() {
    let (card, issues) = load_one("bonjour \u{2013} hello");
    assert_eq!(card, Flashcard::new("bonjour", "hello"));
    assert_eq!(issues, [Issue::DashNormalized]);
}

#[test]
fn test_em_dash_without_spaces() {
    let (card, issues) = load_one("bonjour\u{2014}hello");
    assert_eq!(card, Flashcard::new("bonjour", "hello"));
    assert_eq!(issues, [Issue::DashNormalized, Issue::SpacingFixed]);
}

#[test]
fn test_non_breaking_space() {
    let (card, issues) = load_one("bonjour\u{00A0}-\u{00A0}hello");
    assert_eq!(card, Flashcard::new("bonjour", "hello"));
    assert_eq!(issues, [Issue::UnicodeSpaceFixed]);
}

#[test]
fn test_too_many_separators() {
    assert_eq!(
        reject_reason("term - with - many - separators"),
        RejectReason::TooManySeparators
    );
}

#[test]
fn test_missing_separator() {
    assert_eq!(reject_reason("term definition"), RejectReason::MissingSeparator);
}

#[test]
fn test_double_numbering() {
    assert_eq!(
        reject_reason("2. 2. term - definition"),
        RejectReason::MultipleNumbering
    );
}

#[test]
fn test_renormalizing_is_idempotent() {
    let (card, _) = load_one("1.\u{00A0}bonjour\u{2013}hello");
    let canonical = format!("{} - {}", card.term, card.definition);

    let (again, issues) = load_one(&canonical);
    assert_eq!(again, card);
    assert!(issues.is_empty());
}

#[test]
fn test_comments_and_blank_lines_are_invisible() {
    let content = "# Lesson 1\n\n   \nbonjour - hello\n#merci - thanks\n\t\nau revoir - goodbye\n";
    let loaded = load_str(content, LoadPolicy::Strict).expect("deck loads");

    assert_eq!(loaded.deck.terms(), ["bonjour", "au revoir"]);
    assert!(loaded.diagnostics.is_empty());
}

#[test]
fn test_file_order_is_preserved() {
    let content = "c - 3\na - 1\nb - 2\n";
    let loaded = load_str(content, LoadPolicy::Strict).expect("deck loads");
    assert_eq!(loaded.deck.terms(), ["c", "a", "b"]);
}
