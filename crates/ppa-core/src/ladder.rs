//! Value ladder
//!
//! Laddering asks "why am I doing this?" of the most important projects
//! until a core value surfaces. [`top_projects`] picks which projects are
//! offered; [`ValueLadder`] keeps the answers.

use crate::dimension::Rating;
use crate::ratings::RatingStore;
use crate::registry::{Project, ProjectRegistry};
use indexmap::IndexMap;

/// Shown wherever a project has no core value yet
pub const CORE_VALUE_FALLBACK: &str = "N/A";

/// Default number of projects offered for laddering
pub const DEFAULT_LADDER_DEPTH: usize = 3;

/// Core values keyed by project name
#[derive(Debug, Clone, Default)]
pub struct ValueLadder {
    values: IndexMap<String, String>,
}

impl ValueLadder {
    /// Create empty ladder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a core value
    ///
    /// Empty text is ignored and does not clear an existing entry.
    /// Returns whether anything was stored.
    pub fn set_value(&mut self, name: &str, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.values.insert(name.to_string(), text.to_string());
        true
    }

    /// Core value for a project
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Drop a project's entry
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.shift_remove(name)
    }

    /// Number of stored values
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if ladder is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The `n` most important projects, highest Importance first
///
/// The sort is stable, so equal Importance keeps registry order.
#[must_use]
pub fn top_projects<'a>(
    registry: &'a ProjectRegistry,
    ratings: &RatingStore,
    n: usize,
) -> Vec<&'a Project> {
    let importance = |p: &Project| ratings.get(p.name()).map_or(Rating::MIN, |s| s.importance);

    let mut ranked: Vec<&Project> = registry.iter().collect();
    ranked.sort_by(|a, b| importance(b).cmp(&importance(a)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;

    fn setup(importance: &[(&str, u8)]) -> (ProjectRegistry, RatingStore) {
        let mut registry = ProjectRegistry::new();
        let mut ratings = RatingStore::new();
        for (name, value) in importance {
            registry.add(name);
            ratings.init(name);
            ratings
                .get_mut(name)
                .unwrap()
                .set(Dimension::Importance, Rating::new(*value).unwrap());
        }
        (registry, ratings)
    }

    fn names(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn empty_text_is_ignored() {
        let mut ladder = ValueLadder::new();
        assert!(ladder.set_value("Career", "To feel secure"));
        assert!(!ladder.set_value("Career", ""));
        assert_eq!(ladder.get("Career"), Some("To feel secure"));
    }

    #[test]
    fn top_projects_descending() {
        let (registry, ratings) = setup(&[("a", 2), ("b", 9), ("c", 5), ("d", 7)]);
        let top = top_projects(&registry, &ratings, 3);
        assert_eq!(names(&top), vec!["b", "d", "c"]);
    }

    #[test]
    fn top_projects_stable_on_ties() {
        let (registry, ratings) = setup(&[("first", 5), ("second", 8), ("third", 5), ("fourth", 5)]);
        let top = top_projects(&registry, &ratings, 3);
        assert_eq!(names(&top), vec!["second", "first", "third"]);
    }

    #[test]
    fn top_projects_fewer_than_n() {
        let (registry, ratings) = setup(&[("only", 1)]);
        assert_eq!(top_projects(&registry, &ratings, 3).len(), 1);
        assert!(top_projects(&ProjectRegistry::new(), &ratings, 3).is_empty());
    }
}
