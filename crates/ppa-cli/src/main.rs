use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use ppa_cli::{AppConfig, Console};
use ppa_core::{MatrixPolicy, Session};
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Personal Projects Analysis: elicit, rate, ladder and map your projects
#[derive(Debug, Parser)]
#[command(name = "ppa", version, about)]
struct Cli {
    /// Configuration file (defaults to ./ppa.toml when present)
    #[arg(short, long, env = "PPA_CONFIG")]
    config: Option<PathBuf>,

    /// Run commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Impact matrix behaviour when projects change: reset or preserve
    #[arg(long)]
    matrix_policy: Option<MatrixPolicy>,

    /// Directory for exports
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = if verbose == 0 { "info" } else { "debug" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,ppa_core={level},ppa_dashboard={level},ppa_cli={level},ppa={level}"
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config =
        AppConfig::load(cli.config.as_deref())?.with_overrides(cli.matrix_policy, cli.export_dir);
    tracing::debug!(?config, "Starting console");

    let mut console = Console::new(Session::with_config(config.session), config.export);
    let stdout = io::stdout().lock();

    match cli.script {
        Some(path) => {
            let file = std::fs::File::open(&path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            console.run(BufReader::new(file), stdout, true)
        }
        None => {
            let stdin = io::stdin();
            let echo = !stdin.is_terminal();
            console.run(stdin.lock(), stdout, echo)
        }
    }
}
