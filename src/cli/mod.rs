//! Command-line front end
//!
//! `--check` validates a file and prints its diagnostics; otherwise the
//! file (if any) is opened and the interactive loop starts.

pub mod interactive;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use crate::config::{Args, Config};
use crate::deck::Deck;
use crate::diagnostics::ParseDiagnostic;
use crate::loader::load_path;
use crate::report::{DebugConsole, LoadSummary};
use crate::session::Session;

/// JSON shape printed by `--check --json`
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<&'a Deck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub diagnostics: &'a [ParseDiagnostic],
}

/// Entry point of the `flashcards` binary
pub fn run() -> Result<ExitCode> {
    let args = Args::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.as_str()),
    )
    .init();

    let config = Config::from_args(args)?;
    if let Some(path) = &config.settings_path {
        log::info!("settings loaded from {:?}", path);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.check {
        let path = config
            .file
            .as_deref()
            .context("--check needs a deck file")?;
        return check(path, &config, &mut out);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(config.policy);

    if let Some(path) = &config.file {
        let result = session.open(path);
        interactive::write_load_result(&session, &result, config.max_listed_issues, &mut out)?;
        if result.is_ok() && config.shuffle {
            session.shuffle(&mut rng);
        }
    }

    let stdin = io::stdin();
    interactive::run(
        &mut session,
        &mut rng,
        config.max_listed_issues,
        stdin.lock(),
        &mut out,
    )?;

    Ok(ExitCode::SUCCESS)
}

/// Load `path` once and print the result
pub fn check<W: Write>(path: &Path, config: &Config, out: &mut W) -> Result<ExitCode> {
    let result = load_path(path, config.policy);

    if config.json {
        let report = match &result {
            Ok(loaded) => CheckReport {
                cards: Some(&loaded.deck),
                error: None,
                diagnostics: &loaded.diagnostics,
            },
            Err(err) => CheckReport {
                cards: None,
                error: Some(err.to_string()),
                diagnostics: err.diagnostics(),
            },
        };
        serde_json::to_writer_pretty(&mut *out, &report).context("writing JSON report")?;
        writeln!(out)?;
    } else {
        match &result {
            Ok(loaded) => {
                write!(
                    out,
                    "{}",
                    LoadSummary::success(&loaded.deck, &loaded.diagnostics, config.max_listed_issues)
                )?;
                if loaded.has_issues() {
                    write!(out, "{}", DebugConsole::new(&loaded.diagnostics))?;
                }
            }
            Err(err) => {
                write!(out, "{}", LoadSummary::failure(err, config.max_listed_issues))?;
                if !err.diagnostics().is_empty() {
                    write!(out, "{}", DebugConsole::new(err.diagnostics()))?;
                }
            }
        }
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
