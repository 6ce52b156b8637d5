//! Session phases and their preconditions

use std::fmt;

/// Minimum number of projects before cross-impact makes sense
pub const MIN_PROJECTS_FOR_MATRIX: usize = 2;

/// The five phases of an analysis, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Phase {
    /// 1. The list
    #[default]
    Elicitation,
    /// 2. The rating
    Appraisal,
    /// 3. The values
    Laddering,
    /// 4. The system
    CrossImpact,
    /// 5. Leadership dashboard
    Dashboard,
}

impl Phase {
    /// All phases, in order
    pub const ALL: [Phase; 5] = [
        Phase::Elicitation,
        Phase::Appraisal,
        Phase::Laddering,
        Phase::CrossImpact,
        Phase::Dashboard,
    ];

    /// 1-based phase number
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Phase::Elicitation => 1,
            Phase::Appraisal => 2,
            Phase::Laddering => 3,
            Phase::CrossImpact => 4,
            Phase::Dashboard => 5,
        }
    }

    /// Phase from its 1-based number
    #[must_use]
    pub fn from_number(n: u8) -> Option<Self> {
        Phase::ALL.into_iter().find(|p| p.number() == n)
    }

    /// Menu title
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Phase::Elicitation => "Elicitation (The List)",
            Phase::Appraisal => "Appraisal (The Rating)",
            Phase::Laddering => "Laddering (The Values)",
            Phase::CrossImpact => "Cross-Impact (The System)",
            Phase::Dashboard => "Leadership Dashboard",
        }
    }

    /// Check the phase's minimum input against the current project count
    ///
    /// # Errors
    /// Returns the [`Guidance`] to show instead of the phase's output
    pub fn check(self, project_count: usize) -> Result<(), Guidance> {
        match self {
            Phase::Elicitation => Ok(()),
            Phase::Appraisal if project_count == 0 => Err(Guidance::AddProjectsFirst),
            Phase::Laddering if project_count == 0 => Err(Guidance::BackToElicitation),
            Phase::CrossImpact if project_count < MIN_PROJECTS_FOR_MATRIX => {
                Err(Guidance::NeedTwoProjects)
            }
            Phase::Dashboard if project_count == 0 => Err(Guidance::NoData),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

/// Static message shown when a phase lacks input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guidance {
    /// Appraisal with no projects
    AddProjectsFirst,
    /// Laddering with no projects
    BackToElicitation,
    /// Cross-impact with fewer than two projects
    NeedTwoProjects,
    /// Dashboard with no projects
    NoData,
}

impl Guidance {
    /// Message text
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Guidance::AddProjectsFirst => "Please add projects in Phase 1 first.",
            Guidance::BackToElicitation => "Go back to Phase 1.",
            Guidance::NeedTwoProjects => "Need at least 2 projects.",
            Guidance::NoData => "No data.",
        }
    }
}

impl fmt::Display for Guidance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_round_trips() {
        for phase in Phase::ALL {
            assert_eq!(Phase::from_number(phase.number()), Some(phase));
        }
        assert_eq!(Phase::from_number(0), None);
        assert_eq!(Phase::from_number(6), None);
    }

    #[test]
    fn preconditions_on_empty_session() {
        assert!(Phase::Elicitation.check(0).is_ok());
        assert_eq!(Phase::Appraisal.check(0), Err(Guidance::AddProjectsFirst));
        assert_eq!(Phase::Laddering.check(0), Err(Guidance::BackToElicitation));
        assert_eq!(Phase::CrossImpact.check(0), Err(Guidance::NeedTwoProjects));
        assert_eq!(Phase::Dashboard.check(0), Err(Guidance::NoData));
    }

    #[test]
    fn matrix_needs_two() {
        assert_eq!(Phase::CrossImpact.check(1), Err(Guidance::NeedTwoProjects));
        assert!(Phase::CrossImpact.check(2).is_ok());
        assert!(Phase::Dashboard.check(1).is_ok());
    }

    #[test]
    fn display() {
        assert_eq!(Phase::CrossImpact.to_string(), "4. Cross-Impact (The System)");
        assert_eq!(Guidance::NoData.to_string(), "No data.");
    }
}
