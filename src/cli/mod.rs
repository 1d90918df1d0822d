mod terminal;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::application::{AppError, Presenter, UiEvent};
use crate::domain::{EntryId, EntryKind};

pub use terminal::{OutputFormat, TerminalSurface};

/// Budgetbook - Personal Budget Tracker
#[derive(Parser)]
#[command(name = "budgetbook")]
#[command(about = "Track income and expenses for the current session")]
#[command(version)]
pub struct Cli {
    /// Read commands from a file instead of stdin
    #[arg(short, long, env = "BUDGETBOOK_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format: table, json
    #[arg(short, long, env = "BUDGETBOOK_FORMAT", default_value = "table")]
    pub format: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Don't print the interactive prompt
    #[arg(short, long)]
    pub quiet: bool,
}

const HELP: &str = "\
Commands:
  add <income|expense> <amount> <description...>   record an entry
  delete <income|expense> <id>                     remove an entry (alias: rm)
  show                                             print the current view
  help                                             this text
  quit                                             leave (alias: exit)";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Show,
    Help,
    Quit,
    Nothing,
}

/// Parse a single line of user input.
pub fn parse_command(line: &str) -> Result<Command, AppError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Command::Nothing);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "add" => {
            let (kind, rest) = split_word(rest);
            let kind = parse_kind(kind)?;
            let (amount, description) = split_word(rest);
            Ok(Command::Event(UiEvent::Submit {
                kind,
                description: description.to_string(),
                amount: amount.to_string(),
            }))
        }
        "delete" | "rm" => {
            let (kind, rest) = split_word(rest);
            let kind = parse_kind(kind)?;
            let id: EntryId = rest
                .trim()
                .parse()
                .map_err(|_| AppError::InvalidId(rest.trim().to_string()))?;
            Ok(Command::Event(UiEvent::Delete { kind, id }))
        }
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(AppError::UnknownCommand(other.to_string())),
    }
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn parse_kind(s: &str) -> Result<EntryKind, AppError> {
    EntryKind::from_str(s).ok_or_else(|| AppError::UnknownKind(s.to_string()))
}

/// Interactive loop driving a presenter from line input.
pub struct Session<W: Write> {
    presenter: Presenter<TerminalSurface>,
    out: W,
    prompt: bool,
}

impl<W: Write> Session<W> {
    pub fn new(format: OutputFormat, out: W, prompt: bool) -> Self {
        Self {
            presenter: Presenter::new(TerminalSurface::new(format)),
            out,
            prompt,
        }
    }

    pub fn presenter(&self) -> &Presenter<TerminalSurface> {
        &self.presenter
    }

    /// Render the initial view, then process lines until EOF or `quit`.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.presenter.bootstrap();
        self.presenter.surface_mut().flush_to(&mut self.out)?;

        let mut lines = input.lines();
        loop {
            self.write_prompt()?;
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read input")?;
            if !self.process_line(&line)? {
                break;
            }
        }
        Ok(())
    }

    /// Handle one line. Returns false once the user asks to quit.
    pub fn process_line(&mut self, line: &str) -> Result<bool> {
        match parse_command(line) {
            Ok(Command::Event(event)) => {
                // Validation failures reach the user as a notice on the surface
                if let Err(err) = self.presenter.handle(event) {
                    tracing::debug!(error = %err, "event rejected");
                }
            }
            Ok(Command::Show) => self.presenter.surface_mut().mark_dirty(),
            Ok(Command::Help) => writeln!(self.out, "{}", HELP)?,
            Ok(Command::Quit) => return Ok(false),
            Ok(Command::Nothing) => {}
            Err(err) => {
                tracing::warn!(line, error = %err, "unparseable command");
                writeln!(self.out, "! {}", err)?;
            }
        }

        self.presenter.surface_mut().flush_to(&mut self.out)?;
        Ok(true)
    }

    fn write_prompt(&mut self) -> io::Result<()> {
        if self.prompt {
            write!(self.out, "> ")?;
            self.out.flush()?;
        }
        Ok(())
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let Some(format) = OutputFormat::from_str(&self.format) else {
            bail!("Invalid format '{}'. Use table or json", self.format);
        };
        tracing::debug!(format = format.as_str(), input = ?self.input, "starting session");

        let stdout = io::stdout();
        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file {}", path.display()))?;
                let mut session = Session::new(format, stdout.lock(), false);
                session.run(BufReader::new(file))
            }
            None => {
                let mut session = Session::new(format, stdout.lock(), !self.quiet);
                session.run(io::stdin().lock())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(
            parse_command("add income 1000 Monthly salary").unwrap(),
            Command::Event(UiEvent::Submit {
                kind: EntryKind::Income,
                description: "Monthly salary".to_string(),
                amount: "1000".to_string(),
            })
        );
        assert_eq!(
            parse_command("ADD exp 4.50").unwrap(),
            Command::Event(UiEvent::Submit {
                kind: EntryKind::Expense,
                description: String::new(),
                amount: "4.50".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_delete() {
        assert_eq!(
            parse_command("rm expense 3").unwrap(),
            Command::Event(UiEvent::Delete {
                kind: EntryKind::Expense,
                id: 3,
            })
        );
        assert!(matches!(
            parse_command("delete income one"),
            Err(AppError::InvalidId(_))
        ));
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command("   ").unwrap(), Command::Nothing);
        assert_eq!(parse_command("# comment").unwrap(), Command::Nothing);
        assert_eq!(parse_command("show").unwrap(), Command::Show);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
        assert!(matches!(
            parse_command("add savings 10 jar"),
            Err(AppError::UnknownKind(_))
        ));
        assert!(matches!(
            parse_command("transfer 10"),
            Err(AppError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_cli_flags() {
        use clap::CommandFactory;

        Cli::command().debug_assert();

        let cli = Cli::try_parse_from(["budgetbook", "-v", "-q", "--format", "json"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.quiet);
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_session_stops_at_quit() {
        let input = "add income 1000 Salary\nquit\nadd expense 400 Rent\n";
        let mut out = Vec::new();
        let mut session = Session::new(OutputFormat::Table, &mut out, false);
        session.run(input.as_bytes()).unwrap();

        assert_eq!(session.presenter().ledger().incomes().len(), 1);
        assert!(session.presenter().ledger().expenses().is_empty());
    }
}
