//! Cross-impact matrix
//!
//! A square table of directed influences between projects. Rows are the
//! influencing project, columns the influenced one. Nothing enforces
//! symmetry and the diagonal is stored but never rendered.

use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Influence of one project on another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Impact {
    /// Hindering each other (-1)
    Conflict,
    /// No influence (0)
    #[default]
    Neutral,
    /// Helping each other (+1)
    Synergy,
}

impl Impact {
    /// Numeric cell value
    #[inline]
    #[must_use]
    pub fn value(self) -> i8 {
        match self {
            Impact::Conflict => -1,
            Impact::Neutral => 0,
            Impact::Synergy => 1,
        }
    }

    /// Check if the cell produces an edge
    #[inline]
    #[must_use]
    pub fn is_edge(self) -> bool {
        !matches!(self, Impact::Neutral)
    }
}

impl TryFrom<i64> for Impact {
    type Error = SessionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Impact::Conflict),
            0 => Ok(Impact::Neutral),
            1 => Ok(Impact::Synergy),
            other => Err(SessionError::InvalidImpact(other)),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// What happens to entered cells when the project list changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixPolicy {
    /// Rebuild an all-neutral matrix on any change
    #[default]
    Reset,
    /// Keep cells whose row and column projects both survive
    Preserve,
}

impl std::str::FromStr for MatrixPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reset" => Ok(MatrixPolicy::Reset),
            "preserve" => Ok(MatrixPolicy::Preserve),
            other => Err(format!("unknown matrix policy '{other}' (expected reset or preserve)")),
        }
    }
}

/// A directed, non-neutral, off-diagonal cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactEdge<'a> {
    /// Influencing project
    pub source: &'a str,
    /// Influenced project
    pub target: &'a str,
    /// Direction of influence
    pub impact: Impact,
}

/// Square project x project table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImpactMatrix {
    names: Vec<String>,
    // row-major, names.len() squared
    cells: Vec<Impact>,
}

impl ImpactMatrix {
    /// Create empty matrix
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All-neutral matrix over `names`
    #[must_use]
    pub fn zeroed(names: &[String]) -> Self {
        Self {
            names: names.to_vec(),
            cells: vec![Impact::Neutral; names.len() * names.len()],
        }
    }

    /// Bring the axes in line with `names`
    ///
    /// Does nothing when the axes already equal `names`. Otherwise the
    /// matrix is rebuilt over `names` according to `policy`. Returns
    /// whether a rebuild happened.
    pub fn reconcile(&mut self, names: &[String], policy: MatrixPolicy) -> bool {
        if self.names == names {
            return false;
        }

        let mut rebuilt = Self::zeroed(names);
        if policy == MatrixPolicy::Preserve {
            let old: HashMap<&str, usize> = self
                .names
                .iter()
                .enumerate()
                .map(|(i, n)| (n.as_str(), i))
                .collect();
            let old_len = self.names.len();
            let new_len = names.len();

            for (r, row) in names.iter().enumerate() {
                let Some(&old_r) = old.get(row.as_str()) else {
                    continue;
                };
                for (c, col) in names.iter().enumerate() {
                    if let Some(&old_c) = old.get(col.as_str()) {
                        rebuilt.cells[r * new_len + c] = self.cells[old_r * old_len + old_c];
                    }
                }
            }
        }

        tracing::info!(
            from = self.names.len(),
            to = names.len(),
            ?policy,
            "Impact matrix rebuilt"
        );
        *self = rebuilt;
        true
    }

    /// Axis labels, in order
    #[inline]
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of rows (and columns)
    #[inline]
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.names.len()
    }

    /// Check if matrix has no axes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn index_of(&self, name: &str) -> Result<usize, SessionError> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| SessionError::UnknownProject(name.to_string()))
    }

    /// Influence of `source` on `target`
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownProject`] if either name is not an axis
    pub fn get(&self, source: &str, target: &str) -> Result<Impact, SessionError> {
        let r = self.index_of(source)?;
        let c = self.index_of(target)?;
        Ok(self.cells[r * self.dimension() + c])
    }

    /// Set the influence of `source` on `target`
    ///
    /// Self-cells are accepted.
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownProject`] if either name is not an axis
    pub fn set(&mut self, source: &str, target: &str, impact: Impact) -> Result<(), SessionError> {
        let r = self.index_of(source)?;
        let c = self.index_of(target)?;
        let n = self.dimension();
        self.cells[r * n + c] = impact;
        Ok(())
    }

    /// Cell by position
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Impact> {
        let n = self.dimension();
        (row < n && col < n).then(|| self.cells[row * n + col])
    }

    /// Row as a slice
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Impact]> {
        let n = self.dimension();
        (row < n).then(|| &self.cells[row * n..(row + 1) * n])
    }

    /// Non-neutral off-diagonal cells, row by row
    pub fn edges(&self) -> impl Iterator<Item = ImpactEdge<'_>> {
        let n = self.dimension();
        self.cells.iter().enumerate().filter_map(move |(i, &impact)| {
            let (r, c) = (i / n, i % n);
            (r != c && impact.is_edge()).then(|| ImpactEdge {
                source: &self.names[r],
                target: &self.names[c],
                impact,
            })
        })
    }
}
