//! Project registry
//!
//! Provides [`ProjectRegistry`], the single source of truth for project
//! identity and ordering. Names are exact-match keys: `"Project"` and
//! `"project"` are different projects.

/// A personal project, identified by its name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Project {
    name: String,
}

impl Project {
    /// Create project
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Project name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Result of [`ProjectRegistry::add`]
///
/// Rejected submissions are silent no-ops; the outcome only lets the
/// caller show feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Project appended
    Added,
    /// Empty name, nothing changed
    Empty,
    /// Name already present, nothing changed
    Duplicate,
}

impl AddOutcome {
    /// Check if the registry changed
    #[inline]
    #[must_use]
    pub fn is_added(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Ordered list of projects
#[derive(Debug, Clone, Default)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
}

impl ProjectRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a project unless the name is empty or taken
    pub fn add(&mut self, name: &str) -> AddOutcome {
        if name.is_empty() {
            return AddOutcome::Empty;
        }
        if self.contains(name) {
            return AddOutcome::Duplicate;
        }
        self.projects.push(Project::new(name));
        AddOutcome::Added
    }

    /// Remove the project at `index`
    pub fn remove(&mut self, index: usize) -> Option<Project> {
        (index < self.projects.len()).then(|| self.projects.remove(index))
    }

    /// Check if a name is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Position of a name
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.name == name)
    }

    /// Project at `index`
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    /// Names in registry order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.name.clone()).collect()
    }

    /// Iterate projects in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    /// Number of projects
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
