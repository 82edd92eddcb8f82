//! Configuration management for the flashcard viewer.
//!
//! Handles:
//! - Command-line argument parsing
//! - Settings files (`--config`, `./.flashcards.toml`, user config dir)

use anyhow::Result;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::loader::LoadPolicy;

/// Settings file looked up in the working directory
pub const PROJECT_SETTINGS_FILE: &str = ".flashcards.toml";

/// Command-line arguments for the flashcard viewer
#[derive(Debug, Parser)]
#[command(name = "flashcards")]
#[command(about = "Study term - definition flashcards from a text file")]
#[command(version)]
pub struct Args {
    /// Deck file to open
    pub file: Option<PathBuf>,

    /// Validate the file, print diagnostics and exit
    #[arg(long)]
    pub check: bool,

    /// Print check results as JSON
    #[arg(long, requires = "check")]
    pub json: bool,

    /// What to do with lines that cannot be parsed
    #[arg(long, value_enum)]
    pub policy: Option<LoadPolicy>,

    /// Shuffle the deck right after loading
    #[arg(long)]
    pub shuffle: bool,

    /// Seed for reproducible shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Settings file to use instead of the default locations
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level for the viewer
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Values read from a settings file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub policy: LoadPolicy,
    pub shuffle_on_load: bool,
    /// Rejected lines listed in a load summary before "... and N more"
    pub max_listed_issues: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: LoadPolicy::Strict,
            shuffle_on_load: false,
            max_listed_issues: 5,
        }
    }
}

impl Settings {
    /// Parse a settings file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Candidate settings files, most specific first
    pub fn search_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
        if let Some(path) = explicit {
            return vec![path.to_path_buf()];
        }

        let mut paths = vec![PathBuf::from(PROJECT_SETTINGS_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("flashcards").join("config.toml"));
        }
        paths
    }

    /// Load the first settings file that exists
    ///
    /// An explicit path must exist. Default locations that are missing fall
    /// back to built-in settings.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }

        for path in Self::search_paths(None) {
            if path.is_file() {
                log::debug!("using settings file {:?}", path);
                return Ok((Self::from_file(&path)?, Some(path)));
            }
        }

        log::debug!("no settings file found, using defaults");
        Ok((Self::default(), None))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub file: Option<PathBuf>,
    pub check: bool,
    pub json: bool,
    pub policy: LoadPolicy,
    pub shuffle: bool,
    pub seed: Option<u64>,
    pub max_listed_issues: usize,
    pub log_level: String,
    /// Settings file the values came from, if any
    pub settings_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let (settings, settings_path) = Settings::discover(args.config.as_deref())?;
        Ok(Self::merge(args, settings, settings_path))
    }

    /// Command-line flags win over settings file values
    pub fn merge(args: Args, settings: Settings, settings_path: Option<PathBuf>) -> Self {
        Config {
            file: args.file,
            check: args.check,
            json: args.json,
            policy: args.policy.unwrap_or(settings.policy),
            shuffle: args.shuffle || settings.shuffle_on_load,
            seed: args.seed,
            max_listed_issues: settings.max_listed_issues,
            log_level: args.log_level,
            settings_path,
        }
    }
}
