//! PPA Dashboard
//!
//! Turns a [`Session`] into the artifacts the rendering side consumes:
//!
//! - [`EcologyMap`]: projects and their influences, as Graphviz DOT
//! - [`ScatterSpec`]: meaning vs. stress points with risk/healthy bands, as JSON
//! - [`report_table`]: the on-screen metrics table
//! - [`write_csv`]: the submission export
//!
//! # Example
//!
//! ```rust
//! use ppa_core::{Impact, Session};
//! use ppa_dashboard::Dashboard;
//!
//! let mut session = Session::new();
//! session.add_project("Walk the dog");
//! session.add_project("Lose 10lbs");
//! session.set_impact("Walk the dog", "Lose 10lbs", Impact::Synergy).unwrap();
//!
//! let dashboard = Dashboard::from_session(&session).unwrap();
//! assert_eq!(dashboard.ecology().synergy_count(), 1);
//! assert!(dashboard.csv().starts_with("Name,Stress,Meaning"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod export;
mod graph;
mod scatter;
mod table;

// Re-exports
pub use error::ExportError;
pub use export::{
    format_float, quote_field, to_csv, write_csv, write_file, ExportConfig, ExportKind,
    CSV_COLUMNS,
};
pub use graph::{
    EcologyMap, EdgeStyle, ProjectNode, CONFLICT_COLOR, HEALTHY_FILL, HIGH_STRESS_FILL,
    SYNERGY_COLOR, SYSTEM_KEY,
};
pub use scatter::{Band, BandKind, Channel, ScatterPoint, ScatterSpec, BAND_SPLIT, TITLE};
pub use table::{report_table, ReportLine};

use ppa_core::{DashboardRow, Guidance, Phase, Session};
use std::path::{Path, PathBuf};

/// Everything phase 5 shows, computed once per render
#[derive(Debug, Clone)]
pub struct Dashboard {
    rows: Vec<DashboardRow>,
    ecology: EcologyMap,
}

impl Dashboard {
    /// Aggregate the session
    ///
    /// # Errors
    /// Returns [`Guidance::NoData`] when there are no projects
    pub fn from_session(session: &Session) -> Result<Self, Guidance> {
        Phase::Dashboard.check(session.project_count())?;
        let rows = session.dashboard_rows();
        let ecology = EcologyMap::build(&rows, session.impact_matrix());
        tracing::debug!(
            projects = rows.len(),
            edges = ecology.edge_count(),
            "Dashboard aggregated"
        );
        Ok(Self { rows, ecology })
    }

    /// Per-project rows, in registry order
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[DashboardRow] {
        &self.rows
    }

    /// Project ecology map
    #[inline]
    #[must_use]
    pub fn ecology(&self) -> &EcologyMap {
        &self.ecology
    }

    /// Scatter description
    #[must_use]
    pub fn scatter(&self) -> ScatterSpec {
        ScatterSpec::build(&self.rows)
    }

    /// Report table text; see [`report_table`]
    #[must_use]
    pub fn report_table(&self, highlight: bool) -> String {
        report_table(&self.rows, highlight)
    }

    /// CSV export text
    #[must_use]
    pub fn csv(&self) -> String {
        to_csv(&self.rows)
    }

    /// Render one export kind to text
    ///
    /// # Errors
    /// Returns [`ExportError::Json`] if the scatter description fails to serialize
    pub fn render(&self, kind: ExportKind) -> Result<String, ExportError> {
        match kind {
            ExportKind::Csv => Ok(self.csv()),
            ExportKind::Dot => Ok(self.ecology.to_dot()),
            ExportKind::Scatter => self.scatter().to_json(),
        }
    }

    /// Render and write one export
    ///
    /// # Errors
    /// Returns [`ExportError`] on serialization or filesystem failure
    pub fn export_to(&self, kind: ExportKind, path: &Path) -> Result<PathBuf, ExportError> {
        let contents = self.render(kind)?;
        write_file(path, &contents)?;
        Ok(path.to_path_buf())
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
