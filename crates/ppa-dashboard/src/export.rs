//! Submission export
//!
//! UTF-8, comma-separated, one row per project:
//!
//! ```text
//! Name,Stress,Meaning,Efficacy,Structure,Community,Core Value
//! ```
//!
//! Fields are quoted only when they contain a comma, a quote or a line
//! break. Floats use the shortest round-trip form and keep a trailing `.0`
//! when integral.

use crate::error::ExportError;
use ppa_core::DashboardRow;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Export columns, index column first
pub const CSV_COLUMNS: [&str; 7] = [
    "Name",
    "Stress",
    "Meaning",
    "Efficacy",
    "Structure",
    "Community",
    "Core Value",
];

/// Something the dashboard can write to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    /// Metrics table
    Csv,
    /// Ecology map as Graphviz DOT
    Dot,
    /// Scatter description as JSON
    Scatter,
}

impl ExportKind {
    /// All kinds
    pub const ALL: [ExportKind; 3] = [ExportKind::Csv, ExportKind::Dot, ExportKind::Scatter];

    /// MIME type
    #[must_use]
    pub fn mime(self) -> &'static str {
        match self {
            ExportKind::Csv => "text/csv",
            ExportKind::Dot => "text/vnd.graphviz",
            ExportKind::Scatter => "application/json",
        }
    }
}

impl std::str::FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportKind::Csv),
            "dot" | "graph" => Ok(ExportKind::Dot),
            "scatter" | "json" => Ok(ExportKind::Scatter),
            other => Err(format!("unknown export '{other}' (expected csv, dot or scatter)")),
        }
    }
}

/// Where exports land
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Output directory
    pub directory: PathBuf,
    /// CSV file name
    pub csv_file_name: String,
    /// DOT file name
    pub dot_file_name: String,
    /// Scatter JSON file name
    pub scatter_file_name: String,
}

impl ExportConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With output directory
    #[inline]
    #[must_use]
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Default target path for an export
    #[must_use]
    pub fn path_for(&self, kind: ExportKind) -> PathBuf {
        let file = match kind {
            ExportKind::Csv => &self.csv_file_name,
            ExportKind::Dot => &self.dot_file_name,
            ExportKind::Scatter => &self.scatter_file_name,
        };
        self.directory.join(file)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            csv_file_name: "my_personal_projects.csv".to_string(),
            dot_file_name: "project_ecology.dot".to_string(),
            scatter_file_name: "meaning_vs_stress.json".to_string(),
        }
    }
}

/// Write the CSV export
///
/// # Errors
/// Returns [`ExportError::Io`] if the writer fails
pub fn write_csv<W: Write>(rows: &[DashboardRow], mut out: W) -> Result<(), ExportError> {
    writeln!(out, "{}", CSV_COLUMNS.map(quote_field).join(","))?;
    for row in rows {
        let m = &row.metrics;
        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            quote_field(&row.name),
            format_float(m.stress),
            format_float(m.meaning),
            format_float(m.efficacy),
            format_float(m.structure),
            format_float(m.community),
            quote_field(row.core_value_label()),
        )?;
    }
    out.flush()?;
    Ok(())
}

/// CSV export as a string
#[must_use]
pub fn to_csv(rows: &[DashboardRow]) -> String {
    let mut buf = Vec::new();
    // Vec<u8> never fails to write
    if write_csv(rows, &mut buf).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write `contents` to `path`, creating parent directories
///
/// # Errors
/// Returns [`ExportError::Io`] on filesystem failure
pub fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "Export written");
    Ok(())
}

/// Shortest round-trip decimal, `.0` kept for integral values
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Quote a field when it contains a delimiter, quote or line break
#[must_use]
pub fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn float_format() {
        assert_eq!(format_float(7.0), "7.0");
        assert_eq!(format_float(1.5), "1.5");
        assert_eq!(format_float(20.0 / 3.0), "6.666666666666667");
        assert_eq!(format_float(11.0 / 3.0), "3.6666666666666665");
    }

    #[test]
    fn quoting() {
        assert_eq!(quote_field("plain"), "plain");
        assert_eq!(quote_field("Eat, sleep"), "\"Eat, sleep\"");
        assert_eq!(quote_field("Say \"no\""), "\"Say \"\"no\"\"\"");
        assert_eq!(quote_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn kinds_parse() {
        assert_eq!("CSV".parse::<ExportKind>().unwrap(), ExportKind::Csv);
        assert_eq!("graph".parse::<ExportKind>().unwrap(), ExportKind::Dot);
        assert_eq!("json".parse::<ExportKind>().unwrap(), ExportKind::Scatter);
        assert!("pdf".parse::<ExportKind>().is_err());
    }

    #[test]
    fn default_paths() {
        let config = ExportConfig::new().with_directory("out");
        assert_eq!(
            config.path_for(ExportKind::Csv),
            PathBuf::from("out").join("my_personal_projects.csv")
        );
        assert_eq!(
            config.path_for(ExportKind::Scatter),
            PathBuf::from("out").join("meaning_vs_stress.json")
        );
    }
}
