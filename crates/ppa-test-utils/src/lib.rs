//! Testing utilities for PPA workspace
//!
//! Shared test helpers, fixtures, and assertions.

#![allow(missing_docs)]

use ppa_core::{Dimension, Rating, RatingSet, Session};

pub fn rating(value: u8) -> Rating {
    Rating::new(value).unwrap()
}

/// Session with the given projects, all rated at the midpoint
pub fn session_with_projects(names: &[&str]) -> Session {
    let mut session = Session::new();
    for name in names {
        assert!(session.add_project(name).is_added(), "fixture name '{name}' rejected");
    }
    session
}

/// Rating set from `(dimension, value)` pairs, midpoint elsewhere
pub fn ratings_from(pairs: &[(Dimension, u8)]) -> RatingSet {
    pairs
        .iter()
        .fold(RatingSet::new(), |set, (d, v)| set.with(*d, rating(*v)))
}

/// The worked example: Stress 6.667, Meaning 7.0, Efficacy 3.667,
/// Structure 1.5, Community 5.0
pub fn worked_example_ratings() -> RatingSet {
    ratings_from(&[
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
    ])
}

/// Set Importance for each named project
pub fn set_importance(session: &mut Session, importance: &[(&str, u8)]) {
    for (name, value) in importance {
        session
            .set_rating(name, Dimension::Importance, rating(*value))
            .unwrap();
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
