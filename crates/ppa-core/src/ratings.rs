//! Appraisal ratings
//!
//! [`RatingSet`] is a fixed record with one named field per
//! [`Dimension`]; [`RatingStore`] keys one set per project name.

use crate::dimension::{Dimension, Rating};
use indexmap::IndexMap;

/// Sixteen-dimension appraisal of one project
///
/// Every field defaults to [`Rating::MIDPOINT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(missing_docs)]
pub struct RatingSet {
    pub importance: Rating,
    pub difficulty: Rating,
    pub visibility: Rating,
    pub control: Rating,
    pub responsibility: Rating,
    pub time_adequacy: Rating,
    pub outcome: Rating,
    pub self_identity: Rating,
    pub others_view: Rating,
    pub value_congruency: Rating,
    pub progress: Rating,
    pub challenge: Rating,
    pub absorption: Rating,
    pub support: Rating,
    pub competence: Rating,
    pub autonomy: Rating,
}

impl RatingSet {
    /// All dimensions at the midpoint
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one dimension
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> Rating {
        match dimension {
            Dimension::Importance => self.importance,
            Dimension::Difficulty => self.difficulty,
            Dimension::Visibility => self.visibility,
            Dimension::Control => self.control,
            Dimension::Responsibility => self.responsibility,
            Dimension::TimeAdequacy => self.time_adequacy,
            Dimension::Outcome => self.outcome,
            Dimension::SelfIdentity => self.self_identity,
            Dimension::OthersView => self.others_view,
            Dimension::ValueCongruency => self.value_congruency,
            Dimension::Progress => self.progress,
            Dimension::Challenge => self.challenge,
            Dimension::Absorption => self.absorption,
            Dimension::Support => self.support,
            Dimension::Competence => self.competence,
            Dimension::Autonomy => self.autonomy,
        }
    }

    /// Overwrite one dimension
    pub fn set(&mut self, dimension: Dimension, rating: Rating) {
        let slot = match dimension {
            Dimension::Importance => &mut self.importance,
            Dimension::Difficulty => &mut self.difficulty,
            Dimension::Visibility => &mut self.visibility,
            Dimension::Control => &mut self.control,
            Dimension::Responsibility => &mut self.responsibility,
            Dimension::TimeAdequacy => &mut self.time_adequacy,
            Dimension::Outcome => &mut self.outcome,
            Dimension::SelfIdentity => &mut self.self_identity,
            Dimension::OthersView => &mut self.others_view,
            Dimension::ValueCongruency => &mut self.value_congruency,
            Dimension::Progress => &mut self.progress,
            Dimension::Challenge => &mut self.challenge,
            Dimension::Absorption => &mut self.absorption,
            Dimension::Support => &mut self.support,
            Dimension::Competence => &mut self.competence,
            Dimension::Autonomy => &mut self.autonomy,
        };
        *slot = rating;
    }

    /// Builder-style variant of [`set`](Self::set)
    #[inline]
    #[must_use]
    pub fn with(mut self, dimension: Dimension, rating: Rating) -> Self {
        self.set(dimension, rating);
        self
    }

    /// Iterate `(dimension, rating)` pairs in presentation order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Rating)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

/// Per-project rating sets, keyed by project name
///
/// Not transactional: [`put`](Self::put) replaces the whole set and the
/// last writer wins.
#[derive(Debug, Clone, Default)]
pub struct RatingStore {
    sets: IndexMap<String, RatingSet>,
}

impl RatingStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the default set for a new project
    pub fn init(&mut self, name: &str) {
        self.sets.insert(name.to_string(), RatingSet::default());
    }

    /// Ratings for a project
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RatingSet> {
        self.sets.get(name)
    }

    /// Mutable ratings for a project
    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut RatingSet> {
        self.sets.get_mut(name)
    }

    /// Write a whole set back
    pub fn put(&mut self, name: &str, set: RatingSet) {
        self.sets.insert(name.to_string(), set);
    }

    /// Drop a project's set
    pub fn remove(&mut self, name: &str) -> Option<RatingSet> {
        self.sets.shift_remove(name)
    }

    /// Check if a project has ratings
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    /// Number of rated projects
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Check if store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(v: u8) -> Rating {
        Rating::new(v).unwrap()
    }

    #[test]
    fn defaults_to_midpoint() {
        let set = RatingSet::new();
        assert!(set.iter().all(|(_, rating)| rating == Rating::MIDPOINT));
        assert_eq!(set.iter().count(), 16);
    }

    #[test]
    fn set_touches_only_one_field() {
        let mut set = RatingSet::new();
        set.set(Dimension::TimeAdequacy, r(9));

        for (dimension, rating) in set.iter() {
            if dimension == Dimension::TimeAdequacy {
                assert_eq!(rating, r(9));
            } else {
                assert_eq!(rating, Rating::MIDPOINT);
            }
        }
        assert_eq!(set.time_adequacy, r(9));
    }

    #[test]
    fn get_set_agree_for_every_dimension() {
        for (i, dimension) in Dimension::ALL.into_iter().enumerate() {
            let value = u8::try_from(i % 11).unwrap();
            let set = RatingSet::new().with(dimension, r(value));
            assert_eq!(set.get(dimension), r(value));
        }
    }

    #[test]
    fn store_last_writer_wins() {
        let mut store = RatingStore::new();
        store.init("Run a marathon");

        let mut first = *store.get("Run a marathon").unwrap();
        let mut second = first;
        first.set(Dimension::Importance, r(9));
        second.set(Dimension::Importance, r(2));

        store.put("Run a marathon", first);
        store.put("Run a marathon", second);
        assert_eq!(store.get("Run a marathon").unwrap().importance, r(2));
    }

    #[test]
    fn store_remove() {
        let mut store = RatingStore::new();
        store.init("a");
        store.init("b");
        assert!(store.remove("a").is_some());
        assert!(!store.contains("a"));
        assert_eq!(store.len(), 1);
        assert!(store.remove("a").is_none());
    }
}
