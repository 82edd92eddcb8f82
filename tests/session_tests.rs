//! Session and interactive loop behaviour against decks on disk
use flashcard_deck::cli::interactive;
use flashcard_deck::{LoadError, LoadPolicy, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn write_deck(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write deck");
    path
}

fn run_script(session: &mut Session, script: &str) -> String {
    let mut rng = StdRng::seed_from_u64(11);
    let mut out = Vec::new();
    interactive::run(session, &mut rng, 5, Cursor::new(script), &mut out).expect("run loop");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn test_open_select_reveal() {
    let dir = tempdir().expect("create temp dir");
    let path = write_deck(&dir, "deck.txt", "bonjour - hello\nmerci - thanks\n");

    let mut session = Session::new(LoadPolicy::Strict);
    assert_eq!(session.open(&path).expect("deck loads"), 2);
    assert_eq!(session.status(), "Loaded 2 flashcards");
    assert_eq!(session.terms(), ["bonjour", "merci"]);
    assert!(session.reveal().is_none());

    let card = session.select(1).expect("card 1 exists");
    assert_eq!(card.definition, "thanks");
    assert_eq!(session.reveal().map(|c| c.term.as_str()), Some("merci"));
    assert!(session.select(2).is_none());
    assert_eq!(session.selection(), Some(1));
}

#[test]
fn test_failed_open_clears_deck() {
    let dir = tempdir().expect("create temp dir");
    let good = write_deck(&dir, "good.txt", "bonjour - hello\n");
    let bad = write_deck(&dir, "bad.txt", "bonjour hello\n");

    let mut session = Session::new(LoadPolicy::Strict);
    session.open(&good).expect("good deck loads");
    session.select(0);

    let err = session.open(&bad).expect_err("bad deck is refused");
    assert!(matches!(err, LoadError::Rejected { .. }));
    assert!(session.deck().is_empty());
    assert!(session.reveal().is_none());
    assert_eq!(session.diagnostics().len(), 1);
    assert_eq!(session.last_path(), Some(bad.as_path()));
}

#[test]
fn test_shuffle_keeps_cards_and_clears_selection() {
    let dir = tempdir().expect("create temp dir");
    let content: String = (0..12).map(|i| format!("term {} - def {}\n", i, i)).collect();
    let path = write_deck(&dir, "deck.txt", &content);

    let mut session = Session::new(LoadPolicy::Strict);
    session.open(&path).expect("deck loads");
    session.select(3);

    let mut before: Vec<String> = session.terms().iter().map(|t| t.to_string()).collect();
    session.shuffle(&mut StdRng::seed_from_u64(5));
    let mut after: Vec<String> = session.terms().iter().map(|t| t.to_string()).collect();

    assert_eq!(session.selection(), None);
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn test_reload_picks_up_edits() {
    let dir = tempdir().expect("create temp dir");
    let path = write_deck(&dir, "deck.txt", "bonjour-hello\n");

    let mut session = Session::new(LoadPolicy::Strict);
    session.open(&path).expect("deck loads");
    assert_eq!(session.diagnostics().len(), 1);

    fs::write(&path, "bonjour - hello\nmerci - thanks\n").expect("rewrite deck");
    let reloaded = session.reload().expect("a file was opened");
    assert_eq!(reloaded.expect("reload succeeds"), 2);
    assert!(session.diagnostics().is_empty());
}

#[test]
fn test_interactive_open_list_reveal() {
    let dir = tempdir().expect("create temp dir");
    let path = write_deck(&dir, "deck.txt", "1. bonjour - hello\nmerci - thanks\n");

    let mut session = Session::new(LoadPolicy::Strict);
    let script = format!("o {}\nl\nr 2\nr 9\nd\nq\nl\n", path.display());
    let output = run_script(&mut session, &script);

    assert!(output.contains("Successfully loaded 2 flashcards"));
    assert!(output.contains("NumberingStripped: 1 line"));
    assert!(output.contains("   1. bonjour\n   2. merci\n"));
    assert!(output.contains("merci: thanks"));
    assert!(output.contains("No card 9"));
    assert!(output.contains("[NumberingStripped] removed leading '1.'"));
    // `q` stops the loop before the trailing `l`
    assert_eq!(output.matches("   1. bonjour").count(), 1);
}

#[test]
fn test_interactive_refused_file() {
    let dir = tempdir().expect("create temp dir");
    let path = write_deck(&dir, "bad.txt", "a - b - c\n");

    let mut session = Session::new(LoadPolicy::Strict);
    let output = run_script(&mut session, &format!("open {}\nl\n", path.display()));

    assert!(output.contains("Failed to load flashcards."));
    assert!(output.contains("Line 1: too many separators - 'a - b - c'"));
    assert!(output.contains("No flashcards loaded"));
}

#[test]
fn test_interactive_unknown_command() {
    let mut session = Session::default();
    let output = run_script(&mut session, "jump\nreload\n");
    assert!(output.contains("unknown command 'jump'"));
    assert!(output.contains("No file opened yet"));
}

#[test]
fn test_partial_session_keeps_good_cards() {
    let dir = tempdir().expect("create temp dir");
    let path = write_deck(&dir, "deck.txt", "a - b\nbroken\nc - d\n");

    let mut session = Session::new(LoadPolicy::Partial);
    assert_eq!(session.open(Path::new(&path)).expect("partial load"), 2);
    assert!(session.diagnostics()[0].is_rejection());
}

#[test]
fn test_interactive_dash_inventory() {
    let dir = tempdir().expect("create temp dir");
    let path = write_deck(&dir, "deck.txt", "a \u{2013} b\nc - d\n");

    let mut session = Session::default();
    let output = run_script(&mut session, &format!("dashes\no {}\ndashes\n", path.display()));

    assert!(output.contains("No file opened yet"));
    assert!(output.contains("en dash (U+2013): 1 occurrence"));
    assert!(output.contains("    Line 1: a \u{2013} b"));
}
