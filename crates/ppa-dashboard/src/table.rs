//! On-screen report table
//!
//! Shows Stress, Meaning, Efficacy, Structure and Core Value per project.
//! Community is left out here; it only appears in the export. High-stress
//! rows can be drawn in red.

use ppa_core::DashboardRow;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

/// One table line
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ReportLine {
    /// Project name
    #[tabled(rename = "Name")]
    pub name: String,
    /// Stress, two decimals
    #[tabled(rename = "Stress")]
    pub stress: String,
    /// Meaning, two decimals
    #[tabled(rename = "Meaning")]
    pub meaning: String,
    /// Efficacy, two decimals
    #[tabled(rename = "Efficacy")]
    pub efficacy: String,
    /// Structure, two decimals
    #[tabled(rename = "Structure")]
    pub structure: String,
    /// Laddered value or `N/A`
    #[tabled(rename = "Core Value")]
    pub core_value: String,
}

impl From<&DashboardRow> for ReportLine {
    fn from(row: &DashboardRow) -> Self {
        let m = &row.metrics;
        Self {
            name: row.name.clone(),
            stress: format!("{:.2}", m.stress),
            meaning: format!("{:.2}", m.meaning),
            efficacy: format!("{:.2}", m.efficacy),
            structure: format!("{:.2}", m.structure),
            core_value: row.core_value_label().to_string(),
        }
    }
}

/// Render the report table, with high-stress rows in red when `highlight` is set
#[must_use]
pub fn report_table(rows: &[DashboardRow], highlight: bool) -> String {
    let lines: Vec<ReportLine> = rows.iter().map(ReportLine::from).collect();
    let mut table = Table::new(lines);
    table.with(Style::rounded());

    if highlight {
        for (i, row) in rows.iter().enumerate() {
            if row.high_stress {
                // row 0 is the header
                table.with(Modify::new(Rows::single(i + 1)).with(Color::FG_RED));
            }
        }
    }
    table.to_string()
}
