//! PPA Core - Personal Projects Analysis
//!
//! The data pipeline behind an analysis:
//! - **Elicitation**: a registry of named projects
//! - **Appraisal**: sixteen 0..=10 ratings per project
//! - **Laddering**: core values for the most important projects
//! - **Cross-Impact**: a directed project x project influence matrix
//! - **Dashboard**: Little's five factors, derived from the ratings
//!
//! All state lives in a [`Session`]; every mutation is a named method on it.
//!
//! # Example
//!
//! ```rust
//! use ppa_core::{Dimension, Impact, Rating, Session};
//!
//! let mut session = Session::new();
//! session.add_project("Pass Accounting");
//! session.add_project("Fix my relationship");
//!
//! session
//!     .set_rating("Pass Accounting", Dimension::Difficulty, Rating::new(9).unwrap())
//!     .unwrap();
//! session
//!     .set_impact("Pass Accounting", "Fix my relationship", Impact::Conflict)
//!     .unwrap();
//!
//! let rows = session.dashboard_rows();
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].core_value_label(), "N/A");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod dashboard;
pub mod dimension;
pub mod error;
pub mod ladder;
pub mod matrix;
pub mod metrics;
pub mod phase;
pub mod ratings;
pub mod registry;
pub mod session;

// Re-exports
pub use config::SessionConfig;
pub use dashboard::DashboardRow;
pub use dimension::{Dimension, DimensionGroup, Rating};
pub use error::{ConfigError, RatingError, SessionError};
pub use ladder::{top_projects, ValueLadder, CORE_VALUE_FALLBACK, DEFAULT_LADDER_DEPTH};
pub use matrix::{Impact, ImpactEdge, ImpactMatrix, MatrixPolicy};
pub use metrics::{compute_factors, DerivedMetrics, DEFAULT_HIGH_STRESS_THRESHOLD};
pub use phase::{Guidance, Phase, MIN_PROJECTS_FOR_MATRIX};
pub use ratings::{RatingSet, RatingStore};
pub use registry::{AddOutcome, Project, ProjectRegistry};
pub use session::Session;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with a session
    pub use crate::{
        AddOutcome, DashboardRow, DerivedMetrics, Dimension, Guidance, Impact, MatrixPolicy,
        Phase, Rating, RatingSet, Session, SessionConfig, SessionError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
