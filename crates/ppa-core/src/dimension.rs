//! Appraisal dimensions and the bounded rating scale
//!
//! Every project is appraised along the sixteen [`Dimension`]s on a
//! 0..=10 integer scale. [`Rating`] is the bounded control: a value outside
//! the scale cannot be constructed, so the rating store never validates.

use crate::error::RatingError;
use std::fmt;
use std::str::FromStr;

/// One appraisal dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    /// Does this project matter?
    Importance,
    /// How hard is it?
    Difficulty,
    /// How visible is this to others?
    Visibility,
    /// How much control do you have?
    Control,
    /// How responsible are you?
    Responsibility,
    /// Do you have enough time?
    TimeAdequacy,
    /// Likelihood of success
    Outcome,
    /// Is this typical of you?
    SelfIdentity,
    /// Do others think this is important?
    OthersView,
    /// Consistent with your values?
    ValueCongruency,
    /// Progress so far
    Progress,
    /// How challenging is it?
    Challenge,
    /// Flow while working on it
    Absorption,
    /// How much support do you get?
    Support,
    /// Do you feel capable?
    Competence,
    /// Are you doing this freely?
    Autonomy,
}

impl Dimension {
    /// All dimensions, in presentation order
    pub const ALL: [Dimension; 16] = [
        Dimension::Importance,
        Dimension::Difficulty,
        Dimension::Visibility,
        Dimension::Control,
        Dimension::Responsibility,
        Dimension::TimeAdequacy,
        Dimension::Outcome,
        Dimension::SelfIdentity,
        Dimension::OthersView,
        Dimension::ValueCongruency,
        Dimension::Progress,
        Dimension::Challenge,
        Dimension::Absorption,
        Dimension::Support,
        Dimension::Competence,
        Dimension::Autonomy,
    ];

    /// Display label, as used in reports
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Importance => "Importance",
            Dimension::Difficulty => "Difficulty",
            Dimension::Visibility => "Visibility",
            Dimension::Control => "Control",
            Dimension::Responsibility => "Responsibility",
            Dimension::TimeAdequacy => "Time Adequacy",
            Dimension::Outcome => "Outcome",
            Dimension::SelfIdentity => "Self-Identity",
            Dimension::OthersView => "Others View",
            Dimension::ValueCongruency => "Value Congruency",
            Dimension::Progress => "Progress",
            Dimension::Challenge => "Challenge",
            Dimension::Absorption => "Absorption",
            Dimension::Support => "Support",
            Dimension::Competence => "Competence",
            Dimension::Autonomy => "Autonomy",
        }
    }

    /// Question shown next to the rating control
    #[must_use]
    pub fn prompt(self) -> &'static str {
        match self {
            Dimension::Importance => "Importance (0-10)",
            Dimension::Difficulty => "Difficulty",
            Dimension::Visibility => "How visible is this to others?",
            Dimension::Control => "How much control do you have?",
            Dimension::Responsibility => "How responsible are you?",
            Dimension::TimeAdequacy => "Do you have enough time?",
            Dimension::Outcome => "Likelihood of success",
            Dimension::SelfIdentity => "Is this 'typical' of you?",
            Dimension::OthersView => "Do others think this is important?",
            Dimension::ValueCongruency => "Consistent with your values?",
            Dimension::Progress => "Progress so far",
            Dimension::Challenge => "Challenge",
            Dimension::Absorption => "Absorption (Flow)",
            Dimension::Support => "How much support do you get?",
            Dimension::Competence => "Do you feel capable?",
            Dimension::Autonomy => "Are you doing this freely?",
        }
    }

    /// Group this dimension is presented under
    #[must_use]
    pub fn group(self) -> DimensionGroup {
        DimensionGroup::ALL
            .into_iter()
            .find(|g| g.dimensions().contains(&self))
            .unwrap_or(DimensionGroup::EfficacyAndStress)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Dimension {
    type Err = RatingError;

    /// Parse a dimension from its label.
    ///
    /// Matching ignores ASCII case and treats spaces, hyphens and
    /// underscores alike, so `Time Adequacy`, `time-adequacy` and
    /// `time_adequacy` all resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Dimension::ALL
            .into_iter()
            .find(|d| normalize(d.label()) == wanted)
            .ok_or_else(|| RatingError::UnknownDimension(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Presentation group for the appraisal phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionGroup {
    /// Does this project matter?
    Meaning,
    /// Are you in the driver's seat?
    Structure,
    /// Who sees this?
    Community,
    /// The cost vs. benefit
    EfficacyAndStress,
}

impl DimensionGroup {
    /// All groups, in presentation order
    pub const ALL: [DimensionGroup; 4] = [
        DimensionGroup::Meaning,
        DimensionGroup::Structure,
        DimensionGroup::Community,
        DimensionGroup::EfficacyAndStress,
    ];

    /// Tab title
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            DimensionGroup::Meaning => "Meaning",
            DimensionGroup::Structure => "Structure",
            DimensionGroup::Community => "Community",
            DimensionGroup::EfficacyAndStress => "Efficacy & Stress",
        }
    }

    /// Caption shown under the title
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            DimensionGroup::Meaning => "Does this project matter?",
            DimensionGroup::Structure => "Are you in the driver's seat?",
            DimensionGroup::Community => "Who sees this?",
            DimensionGroup::EfficacyAndStress => "The cost vs. benefit",
        }
    }

    /// Dimensions rated under this group
    #[must_use]
    pub fn dimensions(self) -> &'static [Dimension] {
        match self {
            DimensionGroup::Meaning => &[
                Dimension::Importance,
                Dimension::ValueCongruency,
                Dimension::SelfIdentity,
            ],
            DimensionGroup::Structure => &[
                Dimension::Control,
                Dimension::Responsibility,
                Dimension::TimeAdequacy,
                Dimension::Autonomy,
            ],
            DimensionGroup::Community => &[
                Dimension::Visibility,
                Dimension::Support,
                Dimension::OthersView,
            ],
            DimensionGroup::EfficacyAndStress => &[
                Dimension::Difficulty,
                Dimension::Challenge,
                Dimension::Absorption,
                Dimension::Progress,
                Dimension::Competence,
                Dimension::Outcome,
            ],
        }
    }
}

/// A score on the 0..=10 appraisal scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    /// Lowest score
    pub const MIN: Rating = Rating(0);
    /// Highest score
    pub const MAX: Rating = Rating(10);
    /// Default score for a freshly added project
    pub const MIDPOINT: Rating = Rating(5);

    /// Create a rating, rejecting values outside 0..=10
    ///
    /// # Errors
    /// Returns [`RatingError::OutOfRange`] for values above 10
    pub fn new(value: u8) -> Result<Self, RatingError> {
        if value > Self::MAX.0 {
            return Err(RatingError::OutOfRange(i64::from(value)));
        }
        Ok(Self(value))
    }

    /// Raw score
    #[inline]
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Score as a float, for metric arithmetic
    #[inline]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| RatingError::OutOfRange(value))
            .and_then(Rating::new)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
