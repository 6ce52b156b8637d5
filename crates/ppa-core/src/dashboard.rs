//! Dashboard aggregation
//!
//! One [`DashboardRow`] per project. This is the only data handed to the
//! rendering side (graph, scatter plot, report table, export).

use crate::ladder::CORE_VALUE_FALLBACK;
use crate::metrics::DerivedMetrics;

/// Metrics and core value for one project
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRow {
    /// Project name
    pub name: String,
    /// Freshly computed factors
    pub metrics: DerivedMetrics,
    /// Laddered core value, if one was recorded
    pub core_value: Option<String>,
    /// Stress strictly above the session threshold
    pub high_stress: bool,
}

impl DashboardRow {
    /// Check if the project has a laddered core value
    #[inline]
    #[must_use]
    pub fn has_core_value(&self) -> bool {
        self.core_value.is_some()
    }

    /// Core value as displayed and exported, [`CORE_VALUE_FALLBACK`] when absent
    #[inline]
    #[must_use]
    pub fn core_value_label(&self) -> &str {
        self.core_value.as_deref().unwrap_or(CORE_VALUE_FALLBACK)
    }
}
