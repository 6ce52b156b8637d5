//! Analysis session
//!
//! [`Session`] owns every store and is the only way to mutate them, so
//! referential integrity holds after each call: the rating store, the
//! value ladder and the impact matrix only ever mention registered
//! projects.
//!
//! # Deletion policy
//!
//! Deleting a project cascades to its ratings and its core value, and the
//! impact matrix is reconciled against the new project list straight
//! away (reset or preserve, per [`MatrixPolicy`]).

use crate::config::SessionConfig;
use crate::dashboard::DashboardRow;
use crate::dimension::{Dimension, Rating};
use crate::error::SessionError;
use crate::ladder::{top_projects, ValueLadder};
use crate::matrix::{Impact, ImpactMatrix, MatrixPolicy};
use crate::metrics::{compute_factors, DerivedMetrics};
use crate::ratings::{RatingSet, RatingStore};
use crate::registry::{AddOutcome, Project, ProjectRegistry};

/// In-memory state of one analysis
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SessionConfig,
    registry: ProjectRegistry,
    ratings: RatingStore,
    ladder: ValueLadder,
    matrix: ImpactMatrix,
}

impl Session {
    /// Create session with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create session with explicit configuration
    #[inline]
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Change the matrix policy; applies from the next registry change
    pub fn set_matrix_policy(&mut self, policy: MatrixPolicy) {
        self.config.matrix_policy = policy;
    }

    // --- Phase 1: elicitation ---

    /// Register a project with midpoint ratings
    ///
    /// Empty and duplicate names leave the session untouched.
    pub fn add_project(&mut self, name: &str) -> AddOutcome {
        let outcome = self.registry.add(name);
        if outcome.is_added() {
            self.ratings.init(name);
            self.sync_matrix();
            tracing::debug!(project = name, total = self.registry.len(), "Project added");
        } else {
            tracing::debug!(project = name, ?outcome, "Project not added");
        }
        outcome
    }

    /// Delete the project at `index` and everything keyed by it
    ///
    /// # Errors
    /// Returns [`SessionError::IndexOutOfRange`] if there is no such project
    pub fn delete_project(&mut self, index: usize) -> Result<Project, SessionError> {
        let len = self.registry.len();
        let project = self
            .registry
            .remove(index)
            .ok_or(SessionError::IndexOutOfRange { index, len })?;

        self.ratings.remove(project.name());
        self.ladder.remove(project.name());
        self.sync_matrix();

        tracing::debug!(project = project.name(), total = self.registry.len(), "Project deleted");
        Ok(project)
    }

    /// Registered projects
    #[inline]
    #[must_use]
    pub fn projects(&self) -> &ProjectRegistry {
        &self.registry
    }

    /// Project names in registry order
    #[inline]
    #[must_use]
    pub fn project_names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Number of projects
    #[inline]
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.registry.len()
    }

    // --- Phase 2: appraisal ---

    /// Ratings for a project
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownProject`] if the name is not registered
    pub fn ratings(&self, name: &str) -> Result<&RatingSet, SessionError> {
        self.ratings
            .get(name)
            .ok_or_else(|| SessionError::UnknownProject(name.to_string()))
    }

    /// Write a whole rating set back
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownProject`] if the name is not registered
    pub fn put_ratings(&mut self, name: &str, set: RatingSet) -> Result<(), SessionError> {
        if !self.registry.contains(name) {
            return Err(SessionError::UnknownProject(name.to_string()));
        }
        self.ratings.put(name, set);
        Ok(())
    }

    /// Set one dimension of one project
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownProject`] if the name is not registered
    pub fn set_rating(
        &mut self,
        name: &str,
        dimension: Dimension,
        rating: Rating,
    ) -> Result<(), SessionError> {
        let set = self
            .ratings
            .get_mut(name)
            .ok_or_else(|| SessionError::UnknownProject(name.to_string()))?;
        set.set(dimension, rating);
        tracing::debug!(project = name, %dimension, %rating, "Rating set");
        Ok(())
    }

    // --- Phase 3: laddering ---

    /// Projects currently offered for laddering
    ///
    /// Recomputed on every call from current Importance ratings.
    #[must_use]
    pub fn ladder_candidates(&self) -> Vec<&Project> {
        top_projects(&self.registry, &self.ratings, self.config.ladder_depth)
    }

    /// Top `n` projects by Importance
    #[must_use]
    pub fn top_projects(&self, n: usize) -> Vec<&Project> {
        top_projects(&self.registry, &self.ratings, n)
    }

    /// Record a core value for a project currently offered for laddering
    ///
    /// Empty text is a no-op. Returns whether a value was stored.
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownProject`] for unregistered names and
    /// [`SessionError::NotLadderable`] for projects outside the top-N
    pub fn set_core_value(&mut self, name: &str, text: &str) -> Result<bool, SessionError> {
        if !self.registry.contains(name) {
            return Err(SessionError::UnknownProject(name.to_string()));
        }
        if !self.ladder_candidates().iter().any(|p| p.name() == name) {
            return Err(SessionError::NotLadderable {
                name: name.to_string(),
                depth: self.config.ladder_depth,
            });
        }
        let stored = self.ladder.set_value(name, text);
        if stored {
            tracing::debug!(project = name, "Core value recorded");
        }
        Ok(stored)
    }

    /// Stored core value, if any
    #[inline]
    #[must_use]
    pub fn core_value(&self, name: &str) -> Option<&str> {
        self.ladder.get(name)
    }

    /// The value ladder
    #[inline]
    #[must_use]
    pub fn ladder(&self) -> &ValueLadder {
        &self.ladder
    }

    // --- Phase 4: cross-impact ---

    /// Impact matrix over the current project list
    #[inline]
    #[must_use]
    pub fn impact_matrix(&self) -> &ImpactMatrix {
        &self.matrix
    }

    /// Set the influence of `source` on `target`
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownProject`] if either name is not registered
    pub fn set_impact(
        &mut self,
        source: &str,
        target: &str,
        impact: Impact,
    ) -> Result<(), SessionError> {
        self.matrix.set(source, target, impact)?;
        tracing::debug!(from = source, to = target, impact = impact.value(), "Impact set");
        Ok(())
    }

    fn sync_matrix(&mut self) {
        let names = self.registry.names();
        self.matrix.reconcile(&names, self.config.matrix_policy);
    }

    // --- Phase 5: dashboard ---

    /// Freshly computed metrics for one project
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownProject`] if the name is not registered
    pub fn metrics(&self, name: &str) -> Result<DerivedMetrics, SessionError> {
        self.ratings(name).map(compute_factors)
    }

    /// One row per project, in registry order
    #[must_use]
    pub fn dashboard_rows(&self) -> Vec<DashboardRow> {
        self.registry
            .iter()
            .filter_map(|project| {
                let name = project.name();
                let Some(set) = self.ratings.get(name) else {
                    tracing::warn!(project = name, "Registered project has no ratings, skipped");
                    return None;
                };
                let metrics = compute_factors(set);
                Some(DashboardRow {
                    name: name.to_string(),
                    high_stress: metrics.is_high_stress(self.config.high_stress_threshold),
                    metrics,
                    core_value: self.ladder.get(name).map(str::to_string),
                })
            })
            .collect()
    }

    // --- Lifecycle ---

    /// Clear every store; configuration is kept
    pub fn reset(&mut self) {
        tracing::info!(projects = self.registry.len(), "Session reset");
        *self = Self::with_config(self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(v: u8) -> Rating {
        Rating::new(v).unwrap()
    }

    fn session(names: &[&str]) -> Session {
        let mut session = Session::new();
        for name in names {
            session.add_project(name);
        }
        session
    }

    #[test]
    fn add_initializes_ratings() {
        let session = session(&["Pass Accounting"]);
        assert_eq!(*session.ratings("Pass Accounting").unwrap(), RatingSet::default());
    }

    #[test]
    fn delete_cascades_ratings_and_ladder() {
        let mut session = session(&["a", "b"]);
        session.set_core_value("a", "To be loved").unwrap();

        let removed = session.delete_project(0).unwrap();
        assert_eq!(removed.name(), "a");
        assert!(session.ratings("a").is_err());
        assert_eq!(session.core_value("a"), None);
        assert_eq!(session.impact_matrix().names(), ["b".to_string()].as_slice());
    }

    #[test]
    fn delete_out_of_range() {
        let mut session = session(&["a"]);
        assert!(matches!(
            session.delete_project(1),
            Err(SessionError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn ratings_unknown_project() {
        let mut session = session(&["a"]);
        assert!(session.set_rating("b", Dimension::Control, r(3)).is_err());
        assert!(session.put_ratings("b", RatingSet::default()).is_err());
    }

    #[test]
    fn core_value_only_for_candidates() {
        let mut session = session(&["a", "b", "c", "d"]);
        session.set_rating("d", Dimension::Importance, r(0)).unwrap();

        assert!(matches!(
            session.set_core_value("d", "Security"),
            Err(SessionError::NotLadderable { depth: 3, .. })
        ));
        assert!(session.set_core_value("a", "Security").unwrap());
        assert!(!session.set_core_value("a", "").unwrap());
        assert_eq!(session.core_value("a"), Some("Security"));
    }

    #[test]
    fn core_value_survives_falling_out_of_top() {
        let mut session = session(&["a", "b", "c", "d"]);
        session.set_core_value("a", "Freedom").unwrap();
        session.set_rating("a", Dimension::Importance, r(0)).unwrap();

        assert!(!session.ladder_candidates().iter().any(|p| p.name() == "a"));
        let row = session.dashboard_rows().into_iter().find(|row| row.name == "a").unwrap();
        assert_eq!(row.core_value.as_deref(), Some("Freedom"));
    }

    #[test]
    fn preserve_policy_keeps_cells_across_add() {
        let mut session =
            Session::with_config(SessionConfig::new().with_matrix_policy(MatrixPolicy::Preserve));
        session.add_project("a");
        session.add_project("b");
        session.set_impact("a", "b", Impact::Synergy).unwrap();
        session.add_project("c");

        assert_eq!(session.impact_matrix().get("a", "b").unwrap(), Impact::Synergy);
        assert_eq!(session.impact_matrix().dimension(), 3);
    }

    #[test]
    fn high_stress_uses_config_threshold() {
        let mut session = Session::with_config(SessionConfig::new().with_high_stress_threshold(4.0));
        session.add_project("a");
        assert!(session.dashboard_rows()[0].high_stress);
    }

    #[test]
    fn reset_keeps_config() {
        let config = SessionConfig::new().with_ladder_depth(5);
        let mut session = Session::with_config(config);
        session.add_project("a");
        session.reset();
        assert_eq!(session.project_count(), 0);
        assert_eq!(session.config().ladder_depth, 5);
    }
}
