//! `ppa.toml` loading
//!
//! ```toml
//! [session]
//! high_stress_threshold = 6.0
//! ladder_depth = 3
//! matrix_policy = "reset"
//!
//! [export]
//! directory = "out"
//! csv_file_name = "my_personal_projects.csv"
//! ```

use anyhow::{Context, Result};
use ppa_core::{MatrixPolicy, SessionConfig};
use ppa_dashboard::ExportConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "ppa.toml";

/// Whole application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Analysis tunables
    pub session: SessionConfig,
    /// Export locations
    pub export: ExportConfig,
}

impl AppConfig {
    /// Parse and validate a TOML document
    ///
    /// # Errors
    /// Returns error for malformed TOML, unknown keys, or out-of-range values
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid configuration")?;
        config.session.validate()?;
        Ok(config)
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, `ppa.toml` in the
    /// working directory is used if present, otherwise defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    tracing::debug!("No {DEFAULT_CONFIG_FILE}, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config =
            Self::from_toml(&text).with_context(|| format!("in config {}", path.display()))?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Apply command-line overrides; `None` keeps the loaded value
    #[must_use]
    pub fn with_overrides(
        mut self,
        matrix_policy: Option<MatrixPolicy>,
        export_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(policy) = matrix_policy {
            self.session.matrix_policy = policy;
        }
        if let Some(dir) = export_dir {
            self.export.directory = dir;
        }
        self
    }
}
