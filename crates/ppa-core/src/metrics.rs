//! Derived metrics
//!
//! Little's five factors, computed from a [`RatingSet`]. Always computed
//! fresh; nothing here is cached.

use crate::ratings::RatingSet;

/// Default stress level above which a project counts as high-stress
pub const DEFAULT_HIGH_STRESS_THRESHOLD: f64 = 6.0;

/// Five composite factor scores, each in 0.0..=10.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    /// (Difficulty + Challenge + (10 - Competence)) / 3
    pub stress: f64,
    /// (Importance + Value Congruency + Self-Identity) / 3
    pub meaning: f64,
    /// (Progress + Control + Outcome) / 3
    pub efficacy: f64,
    /// (Control + Time Adequacy) / 2
    pub structure: f64,
    /// (Visibility + Support) / 2
    pub community: f64,
}

impl DerivedMetrics {
    /// Check if stress strictly exceeds `threshold`
    #[inline]
    #[must_use]
    pub fn is_high_stress(&self, threshold: f64) -> bool {
        self.stress > threshold
    }
}

/// Compute the five factors for one project
#[must_use]
pub fn compute_factors(r: &RatingSet) -> DerivedMetrics {
    let stress = (r.difficulty.as_f64() + r.challenge.as_f64() + (10.0 - r.competence.as_f64())) / 3.0;
    let meaning =
        (r.importance.as_f64() + r.value_congruency.as_f64() + r.self_identity.as_f64()) / 3.0;
    let efficacy = (r.progress.as_f64() + r.control.as_f64() + r.outcome.as_f64()) / 3.0;
    let structure = (r.control.as_f64() + r.time_adequacy.as_f64()) / 2.0;
    let community = (r.visibility.as_f64() + r.support.as_f64()) / 2.0;

    DerivedMetrics {
        stress,
        meaning,
        efficacy,
        structure,
        community,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Dimension, Rating};

    fn rated(pairs: &[(Dimension, u8)]) -> RatingSet {
        pairs.iter().fold(RatingSet::new(), |set, (d, v)| {
            set.with(*d, Rating::new(*v).unwrap())
        })
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn worked_example() {
        let set = rated(&[
            (Dimension::Difficulty, 8),
            (Dimension::Challenge, 6),
            (Dimension::Competence, 4),
            (Dimension::Importance, 9),
            (Dimension::ValueCongruency, 7),
            (Dimension::SelfIdentity, 5),
            (Dimension::Progress, 3),
            (Dimension::Control, 2),
            (Dimension::Outcome, 6),
            (Dimension::TimeAdequacy, 1),
            (Dimension::Visibility, 5),
            (Dimension::Support, 5),
        ]);
        let m = compute_factors(&set);
        assert!(close(m.stress, 6.667));
        assert!(close(m.meaning, 7.0));
        assert!(close(m.efficacy, 3.667));
        assert!(close(m.structure, 1.5));
        assert!(close(m.community, 5.0));
        assert!(m.is_high_stress(DEFAULT_HIGH_STRESS_THRESHOLD));
    }

    #[test]
    fn midpoint_defaults() {
        let m = compute_factors(&RatingSet::new());
        assert!(close(m.stress, 5.0));
        assert!(close(m.meaning, 5.0));
        assert!(close(m.efficacy, 5.0));
        assert!(close(m.structure, 5.0));
        assert!(close(m.community, 5.0));
    }

    #[test]
    fn threshold_is_strict() {
        // (6 + 6 + (10 - 4)) / 3 == 6.0 exactly
        let set = rated(&[
            (Dimension::Difficulty, 6),
            (Dimension::Challenge, 6),
            (Dimension::Competence, 4),
        ]);
        let m = compute_factors(&set);
        assert_eq!(m.stress, 6.0);
        assert!(!m.is_high_stress(6.0));
    }

    #[test]
    fn pure() {
        let set = rated(&[(Dimension::Difficulty, 10), (Dimension::Competence, 0)]);
        assert_eq!(compute_factors(&set), compute_factors(&set));
    }
}
