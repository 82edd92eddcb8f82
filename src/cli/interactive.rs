//! Interactive terminal loop
//!
//! A line-oriented stand-in for the list/reveal/shuffle window. Reads one
//! command per line and answers on the output stream.

use rand::Rng;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::LoadError;
use crate::report::{dash_inventory, DebugConsole, LoadSummary};
use crate::session::Session;

const HELP: &str = "\
Commands:
  l, list          list terms
  r, reveal <n>    show the definition of card n
  s, shuffle       shuffle the deck
  o, open <path>   open a deck file
  reload           reload the last file
  d, debug         show the debug console
  dashes           list unusual dashes in the last file
  status           show the status line
  h, help          show this help
  q, quit          exit";

/// One user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    /// 1-based card number
    Reveal(usize),
    Shuffle,
    Open(PathBuf),
    Reload,
    Debug,
    Dashes,
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (word, rest) = match input.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (input, ""),
        };

        match word {
            "l" | "list" => Ok(Command::List),
            "r" | "reveal" => {
                let n: usize = rest
                    .parse()
                    .map_err(|_| format!("expected a card number, got '{}'", rest))?;
                if n == 0 {
                    return Err("card numbers start at 1".to_string());
                }
                Ok(Command::Reveal(n))
            }
            "s" | "shuffle" => Ok(Command::Shuffle),
            "o" | "open" if !rest.is_empty() => Ok(Command::Open(PathBuf::from(rest))),
            "o" | "open" => Err("open needs a file path".to_string()),
            "reload" => Ok(Command::Reload),
            "d" | "debug" => Ok(Command::Debug),
            "dashes" => Ok(Command::Dashes),
            "status" => Ok(Command::Status),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command '{}', type 'h' for help", other)),
        }
    }
}

/// Print the outcome of a load the way the window's message boxes did
pub fn write_load_result<W: Write>(
    session: &Session,
    result: &Result<usize, LoadError>,
    max_listed: usize,
    out: &mut W,
) -> io::Result<()> {
    match result {
        Ok(_) => {
            let summary = LoadSummary::success(session.deck(), session.diagnostics(), max_listed);
            write!(out, "{}", summary)
        }
        Err(err) => {
            write!(out, "{}", LoadSummary::failure(err, max_listed))?;
            writeln!(out, "No cards loaded. Type 'd' to see the debug console.")
        }
    }
}

/// List the dash variants of a file before they get normalized
pub fn write_dash_inventory<W: Write>(path: &Path, out: &mut W) -> io::Result<()> {
    let bytes = fs::read(path)?;
    let inventory = dash_inventory(&String::from_utf8_lossy(&bytes));
    if inventory.is_empty() {
        return writeln!(out, "No unusual dashes in {}", path.display());
    }
    for report in inventory {
        write!(out, "{}", report)?;
    }
    Ok(())
}

/// Execute one command. Returns `false` when the loop should stop.
pub fn execute<G: Rng + ?Sized, W: Write>(
    command: Command,
    session: &mut Session,
    rng: &mut G,
    max_listed: usize,
    out: &mut W,
) -> io::Result<bool> {
    match command {
        Command::List => {
            if session.deck().is_empty() {
                writeln!(out, "{}", session.status())?;
            }
            for (i, term) in session.terms().iter().enumerate() {
                writeln!(out, "{:>4}. {}", i + 1, term)?;
            }
        }
        Command::Reveal(n) => match session.select(n - 1) {
            Some(card) => writeln!(out, "{}: {}", card.term, card.definition)?,
            None => writeln!(out, "No card {}", n)?,
        },
        Command::Shuffle => {
            session.shuffle(rng);
            writeln!(out, "Shuffled. {}", session.status())?;
        }
        Command::Open(path) => {
            let result = session.open(&path);
            write_load_result(session, &result, max_listed, out)?;
        }
        Command::Reload => match session.reload() {
            Some(result) => write_load_result(session, &result, max_listed, out)?,
            None => writeln!(out, "No file opened yet")?,
        },
        Command::Debug => {
            if let Some(path) = session.last_path() {
                writeln!(out, "Debug console for {}", path.display())?;
            }
            write!(out, "{}", DebugConsole::new(session.diagnostics()))?;
        }
        Command::Dashes => match session.last_path() {
            Some(path) => {
                if let Err(err) = write_dash_inventory(path, out) {
                    writeln!(out, "Cannot read {}: {}", path.display(), err)?;
                }
            }
            None => writeln!(out, "No file opened yet")?,
        },
        Command::Status => writeln!(out, "{}", session.status())?,
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Read commands until `quit` or end of input
pub fn run<G: Rng + ?Sized, R: BufRead, W: Write>(
    session: &mut Session,
    rng: &mut G,
    max_listed: usize,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if !execute(command, session, rng, max_listed, out)? {
                    return Ok(());
                }
            }
            Err(message) => writeln!(out, "{}", message)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("l".parse::<Command>(), Ok(Command::List));
        assert_eq!("reveal 3".parse::<Command>(), Ok(Command::Reveal(3)));
        assert_eq!(" s ".parse::<Command>(), Ok(Command::Shuffle));
        assert_eq!(
            "o my deck.txt".parse::<Command>(),
            Ok(Command::Open(PathBuf::from("my deck.txt")))
        );
        assert_eq!("dashes".parse::<Command>(), Ok(Command::Dashes));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_command_errors() {
        assert!("r".parse::<Command>().is_err());
        assert!("r 0".parse::<Command>().is_err());
        assert!("open".parse::<Command>().is_err());
        assert!("fly".parse::<Command>().is_err());
    }
}
