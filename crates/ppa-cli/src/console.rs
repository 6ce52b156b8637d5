//! Interactive console
//!
//! A sequential fold over input lines: parse, apply at most one mutation
//! to the [`Session`], re-render the active phase.

use crate::command::{parse_line, ConsoleCommand, ParseFailure};
use crate::render::{guidance_view, phase_view};
use anyhow::{Context, Result};
use colored::Colorize;
use ppa_core::{AddOutcome, Dimension, Impact, Phase, Rating, Session, SessionError};
use ppa_dashboard::{Dashboard, ExportConfig};
use std::io::{BufRead, Write};

/// Whether to keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop
    Quit,
}

/// Console state: the session plus what the user is looking at
#[derive(Debug)]
pub struct Console {
    session: Session,
    export: ExportConfig,
    active: Phase,
    selected: Option<String>,
}

impl Console {
    /// Create console over a session
    #[must_use]
    pub fn new(session: Session, export: ExportConfig) -> Self {
        Self {
            session,
            export,
            active: Phase::default(),
            selected: None,
        }
    }

    /// The session
    #[inline]
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Active phase
    #[inline]
    #[must_use]
    pub fn active_phase(&self) -> Phase {
        self.active
    }

    /// Project selected for appraisal
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Read commands until end of input or `quit`
    ///
    /// Command errors are reported and the loop continues. With `echo`
    /// each command is printed before its output, as for scripts.
    ///
    /// # Errors
    /// Returns error if reading input or writing output fails
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W, echo: bool) -> Result<()> {
        self.render(&mut out)?;
        self.prompt(&mut out, echo)?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                self.prompt(&mut out, echo)?;
                continue;
            }
            if echo {
                writeln!(out, "> {trimmed}")?;
            }

            match self.execute_line(trimmed, &mut out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "Command failed");
                    writeln!(out, "{} {e:#}", "Error:".red().bold())?;
                }
            }
            self.prompt(&mut out, echo)?;
        }

        out.flush()?;
        Ok(())
    }

    fn prompt(&self, out: &mut dyn Write, echo: bool) -> Result<()> {
        if !echo {
            write!(out, "ppa [{}]> ", self.active.number())?;
            out.flush()?;
        }
        Ok(())
    }

    /// Parse and apply one line
    ///
    /// # Errors
    /// Returns error for session misuse or write failures. Grammar errors
    /// and help requests are printed, not returned.
    pub fn execute_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        let command = match parse_line(line) {
            Ok(command) => command,
            Err(failure) => {
                match &failure {
                    ParseFailure::Clap(err) if !err.use_stderr() => write!(out, "{failure}")?,
                    _ => write!(out, "{} {failure}", "Error:".red().bold())?,
                }
                writeln!(out)?;
                return Ok(Flow::Continue);
            }
        };
        self.execute(command, out)
    }

    /// Apply one command
    ///
    /// # Errors
    /// Returns error for session misuse or write failures
    pub fn execute(&mut self, command: ConsoleCommand, out: &mut dyn Write) -> Result<Flow> {
        if let Some(phase) = command.phase() {
            self.active = phase;
        }
        tracing::debug!(?command, phase = self.active.number(), "Executing command");

        match command {
            ConsoleCommand::Phase { .. } | ConsoleCommand::Show => {}
            ConsoleCommand::Add { name } => self.add(&name.join(" "), out)?,
            ConsoleCommand::Delete { position } => self.delete(position, out)?,
            ConsoleCommand::Select { project } => self.select(&project.join(" "))?,
            ConsoleCommand::Rate { dimension, value } => self.rate(&dimension, value)?,
            ConsoleCommand::Why { rank, text } => self.why(rank, &text.join(" "))?,
            ConsoleCommand::Impact { row, column, value } => self.impact(row, column, value)?,
            ConsoleCommand::Export { kind, path } => {
                let dashboard = match Dashboard::from_session(&self.session) {
                    Ok(dashboard) => dashboard,
                    Err(guidance) => {
                        guidance_view(out, guidance)?;
                        return Ok(Flow::Continue);
                    }
                };
                let target = path.unwrap_or_else(|| self.export.path_for(kind));
                let written = dashboard
                    .export_to(kind, &target)
                    .with_context(|| format!("failed to export to {}", target.display()))?;
                writeln!(
                    out,
                    "{} {} ({})",
                    "Wrote".green(),
                    written.display(),
                    kind.mime()
                )?;
                return Ok(Flow::Continue);
            }
            ConsoleCommand::Reset => {
                self.session.reset();
                self.selected = None;
                self.active = Phase::Elicitation;
                writeln!(out, "{}", "Simulation reset.".yellow())?;
            }
            ConsoleCommand::Quit => return Ok(Flow::Quit),
        }

        self.render(out)?;
        Ok(Flow::Continue)
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        phase_view(out, &self.session, self.active, self.selected.as_deref())
            .context("failed to render phase")
    }

    fn add(&mut self, name: &str, out: &mut dyn Write) -> Result<()> {
        match self.session.add_project(name) {
            AddOutcome::Added => writeln!(out, "{} {name}", "Added:".green())?,
            AddOutcome::Duplicate => {
                writeln!(out, "{}", format!("'{name}' is already in your portfolio.").yellow())?;
            }
            AddOutcome::Empty => {}
        }
        Ok(())
    }

    fn delete(&mut self, position: u64, out: &mut dyn Write) -> Result<()> {
        let index = to_index(position);
        let project = self.session.delete_project(index)?;
        if self.selected.as_deref() == Some(project.name()) {
            self.selected = None;
        }
        writeln!(out, "{} {}", "Deleted:".yellow(), project.name())?;
        Ok(())
    }

    fn select(&mut self, project: &str) -> Result<()> {
        let projects = self.session.projects();
        let name = match project.parse::<u64>() {
            Ok(0) if !projects.contains(project) => {
                anyhow::bail!("positions start at 1");
            }
            Ok(position) if !projects.contains(project) => projects
                .get(to_index(position))
                .map(|p| p.name().to_string())
                .ok_or(SessionError::IndexOutOfRange {
                    index: to_index(position),
                    len: projects.len(),
                })?,
            _ if projects.contains(project) => project.to_string(),
            _ => return Err(SessionError::UnknownProject(project.to_string()).into()),
        };
        self.selected = Some(name);
        Ok(())
    }

    fn rate(&mut self, dimension: &str, value: u8) -> Result<()> {
        let dimension: Dimension = dimension.parse()?;
        let rating = Rating::new(value)?;

        // Like a select box, the first project is selected by default
        if self.selected.is_none() {
            self.selected = self.session.projects().iter().next().map(|p| p.name().to_string());
        }
        let Some(name) = self.selected.clone() else {
            return Ok(());
        };
        self.session.set_rating(&name, dimension, rating)?;
        Ok(())
    }

    fn why(&mut self, rank: u64, text: &str) -> Result<()> {
        let index = to_index(rank);
        let name = self
            .session
            .ladder_candidates()
            .get(index)
            .map(|p| p.name().to_string())
            .with_context(|| {
                format!(
                    "only {} projects are offered for laddering",
                    self.session.ladder_candidates().len()
                )
            })?;
        self.session.set_core_value(&name, text)?;
        Ok(())
    }

    fn impact(&mut self, row: u64, column: u64, value: i64) -> Result<()> {
        let names = self.session.project_names();
        let lookup = |position: u64| {
            names
                .get(to_index(position))
                .cloned()
                .ok_or(SessionError::IndexOutOfRange {
                    index: to_index(position),
                    len: names.len(),
                })
        };
        let source = lookup(row)?;
        let target = lookup(column)?;
        let impact = Impact::try_from(value)?;
        self.session.set_impact(&source, &target, impact)?;
        Ok(())
    }
}

fn to_index(position: u64) -> usize {
    usize::try_from(position.saturating_sub(1)).unwrap_or(usize::MAX)
}
