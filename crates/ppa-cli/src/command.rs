//! Console command grammar
//!
//! Each input line is split into words ([`split_line`]) and parsed by a
//! multicall clap parser, so `help` and per-command `--help` come for free.

use clap::{value_parser, Parser, Subcommand};
use ppa_core::Phase;
use ppa_dashboard::ExportKind;
use std::path::PathBuf;

/// One parsed console line
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct ConsoleLine {
    /// The command
    #[command(subcommand)]
    pub command: ConsoleCommand,
}

/// Console commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ConsoleCommand {
    /// Switch to a phase (1-5) and show it
    Phase {
        /// Phase number
        #[arg(value_parser = value_parser!(u8).range(1..=5))]
        number: u8,
    },

    /// Show the active phase again
    Show,

    /// Phase 1: add a project ("I am currently trying to...")
    Add {
        /// Project name; words are joined with single spaces
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Phase 1: delete the project at a listed position
    Delete {
        /// Position as listed, starting at 1
        #[arg(value_parser = value_parser!(u64).range(1..))]
        position: u64,
    },

    /// Phase 2: choose the project to rate, by name or listed position
    Select {
        /// Project name or position
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        project: Vec<String>,
    },

    /// Phase 2: rate one dimension of the selected project (0-10)
    Rate {
        /// Dimension, e.g. "Time Adequacy" or time-adequacy
        dimension: String,
        /// Score
        #[arg(value_parser = value_parser!(u8).range(0..=10))]
        value: u8,
    },

    /// Phase 3: answer "why is this important to you?" for a listed project
    Why {
        /// Rank as listed, starting at 1
        #[arg(value_parser = value_parser!(u64).range(1..))]
        rank: u64,
        /// Core value
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Phase 4: set how the row project affects the column project
    Impact {
        /// Row position, starting at 1
        #[arg(value_parser = value_parser!(u64).range(1..))]
        row: u64,
        /// Column position, starting at 1
        #[arg(value_parser = value_parser!(u64).range(1..))]
        column: u64,
        /// -1 conflict, 0 neutral, 1 synergy
        #[arg(allow_negative_numbers = true, value_parser = value_parser!(i64).range(-1..=1))]
        value: i64,
    },

    /// Phase 5: write csv, dot or scatter output
    Export {
        /// What to write
        kind: ExportKind,
        /// Target file; defaults to the configured export path
        path: Option<PathBuf>,
    },

    /// Clear every project, rating, value and impact
    Reset,

    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

impl ConsoleCommand {
    /// Phase the command belongs to, if any
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        match self {
            ConsoleCommand::Phase { number } => Phase::from_number(*number),
            ConsoleCommand::Add { .. } | ConsoleCommand::Delete { .. } => Some(Phase::Elicitation),
            ConsoleCommand::Select { .. } | ConsoleCommand::Rate { .. } => Some(Phase::Appraisal),
            ConsoleCommand::Why { .. } => Some(Phase::Laddering),
            ConsoleCommand::Impact { .. } => Some(Phase::CrossImpact),
            ConsoleCommand::Export { .. } => Some(Phase::Dashboard),
            ConsoleCommand::Show | ConsoleCommand::Reset | ConsoleCommand::Quit => None,
        }
    }
}

/// Split a line into words, honouring single and double quotes
///
/// # Errors
/// Returns a message for an unterminated quote
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {q} quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Parse one line into a command
///
/// # Errors
/// Returns the clap error (which also carries `help` output) or a quoting error
pub fn parse_line(line: &str) -> Result<ConsoleCommand, ParseFailure> {
    let words = split_line(line).map_err(ParseFailure::Quote)?;
    ConsoleLine::try_parse_from(words)
        .map(|parsed| parsed.command)
        .map_err(ParseFailure::Clap)
}

/// Why a line did not parse
#[derive(Debug)]
pub enum ParseFailure {
    /// Unbalanced quotes
    Quote(String),
    /// Grammar error, or a help/version request
    Clap(clap::Error),
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseFailure::Quote(msg) => f.write_str(msg),
            ParseFailure::Clap(err) => write!(f, "{}", err.render()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_plain_and_quoted() {
        assert_eq!(
            split_line(r#"rate "Time Adequacy" 7"#).unwrap(),
            vec!["rate", "Time Adequacy", "7"]
        );
        assert_eq!(
            split_line("  add   Walk the dog ").unwrap(),
            vec!["add", "Walk", "the", "dog"]
        );
        assert_eq!(split_line(r#"add 'Say "no"'"#).unwrap(), vec!["add", r#"Say "no""#]);
        assert_eq!(split_line(r#"add """#).unwrap(), vec!["add", ""]);
        assert!(split_line("add \"open").is_err());
    }

    #[test]
    fn parse_add_joins_words() {
        let cmd = parse_line("add Pass Accounting").unwrap();
        assert_eq!(
            cmd,
            ConsoleCommand::Add {
                name: vec!["Pass".into(), "Accounting".into()]
            }
        );
        assert_eq!(cmd.phase(), Some(Phase::Elicitation));
    }

    #[test]
    fn parse_rate_bounds() {
        assert!(matches!(
            parse_line("rate importance 10").unwrap(),
            ConsoleCommand::Rate { value: 10, .. }
        ));
        assert!(parse_line("rate importance 11").is_err());
    }

    #[test]
    fn parse_negative_impact() {
        assert_eq!(
            parse_line("impact 1 2 -1").unwrap(),
            ConsoleCommand::Impact {
                row: 1,
                column: 2,
                value: -1
            }
        );
        assert!(parse_line("impact 1 2 2").is_err());
        assert!(parse_line("impact 0 2 1").is_err());
    }

    #[test]
    fn parse_export_kind() {
        assert!(matches!(
            parse_line("export csv").unwrap(),
            ConsoleCommand::Export {
                kind: ExportKind::Csv,
                path: None
            }
        ));
        assert!(parse_line("export pdf").is_err());
    }

    #[test]
    fn exit_alias() {
        assert_eq!(parse_line("exit").unwrap(), ConsoleCommand::Quit);
    }

    #[test]
    fn unknown_command() {
        assert!(matches!(parse_line("frobnicate"), Err(ParseFailure::Clap(_))));
    }
}
