//! Export configuration.
//!
//! # Responsibility
//! - Carry already-resolved filter settings into grouping and rendering.
//!
//! # Invariants
//! - Core never reads process environment; callers resolve flags/env first.
//! - A blank assignee filter is normalized to "no filter".

/// Resolved options for one export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Include completed tasks (rendered with `DONE`).
    pub include_completed: bool,
    /// Keep only tasks whose assignee name equals this value exactly.
    pub assignee_filter: Option<String>,
}

impl ExportOptions {
    /// Default options: completed tasks excluded, no assignee filter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_completed(mut self, include_completed: bool) -> Self {
        self.include_completed = include_completed;
        self
    }

    /// Sets the assignee filter. Blank values clear the filter.
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        let assignee = assignee.into();
        self.assignee_filter = if assignee.trim().is_empty() {
            None
        } else {
            Some(assignee)
        };
        self
    }

    /// Returns whether a task assigned to `assignee` passes the filter.
    pub fn accepts_assignee(&self, assignee: Option<&str>) -> bool {
        match self.assignee_filter.as_deref() {
            None => true,
            Some(filter) => assignee == Some(filter),
        }
    }
}
