use anyhow::Result;
use flashcard_deck::cli;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    cli::run()
}
