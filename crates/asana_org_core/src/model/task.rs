//! Task export domain model.
//!
//! # Responsibility
//! - Mirror the wire fields of one exported document (`data[]` of tasks).
//! - Normalize `null`/absent fields into well-defined zero values.
//!
//! # Invariants
//! - `completed_at` of `None` or `""` means the task is incomplete.
//! - `assignee == None` is the "unassigned" sentinel and never equals a real
//!   assignee.
//! - Only `memberships[0]` determines the owning section.

use serde::{Deserialize, Deserializer};

/// Top-level export document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Document {
    /// Top-level tasks in document order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Task>,
}

impl Document {
    /// Decodes a document from a JSON string.
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}

/// One task record, including its nested subtasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Task {
    /// Identifier, unique within the document.
    #[serde(default, deserialize_with = "null_as_default")]
    pub gid: String,
    #[serde(default)]
    pub assignee: Option<Assignee>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Free-text notes. Passed through verbatim after trimming.
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    /// Completion timestamp as exported; empty means incomplete.
    #[serde(default)]
    pub completed_at: Option<String>,
    /// Parent reference. `None` means top-level task.
    #[serde(default)]
    pub parent: Option<ParentRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub memberships: Vec<Membership>,
    /// Owned subtasks in export order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtasks: Vec<Task>,
}

impl Task {
    /// Creates an incomplete, unassigned, top-level task.
    pub fn new(gid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            gid: gid.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns whether the task carries a non-empty completion timestamp.
    pub fn is_completed(&self) -> bool {
        self.completed_at
            .as_deref()
            .is_some_and(|value| !value.is_empty())
    }

    /// Returns whether the task has no parent.
    ///
    /// A parent reference with an empty gid (`{}` or `{"gid": null}`) is the
    /// same zero value as an absent parent.
    pub fn is_top_level(&self) -> bool {
        self.parent
            .as_ref()
            .map_or(true, |parent| parent.gid.is_empty())
    }

    pub fn has_subtasks(&self) -> bool {
        !self.subtasks.is_empty()
    }

    /// Returns assignee display name when the task is assigned.
    pub fn assignee_name(&self) -> Option<&str> {
        self.assignee.as_ref().map(|assignee| assignee.name.as_str())
    }

    /// Returns the section snapshot of the first membership, if any.
    ///
    /// Later memberships are ignored by design of the export format: one
    /// task is shown under exactly one section.
    pub fn section_ref(&self) -> Option<&SectionRef> {
        self.memberships
            .first()
            .and_then(|membership| membership.section.as_ref())
    }
}

/// Task assignee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Assignee {
    #[serde(default, deserialize_with = "null_as_default")]
    pub gid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Reference from a subtask to its parent task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParentRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub gid: String,
}

/// Link from a task to the section it belongs to in one project view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Membership {
    #[serde(default)]
    pub section: Option<SectionRef>,
}

/// Read-only section snapshot embedded in a membership.
///
/// Any `tasks` array present in the export is ignored; the grouping step owns
/// section task lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SectionRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub gid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl SectionRef {
    pub fn new(gid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            gid: gid.into(),
            name: name.into(),
        }
    }
}

impl Membership {
    pub fn in_section(gid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            section: Some(SectionRef::new(gid, name)),
        }
    }
}

// Why: exports emit explicit `null` for unset strings/arrays; treat it the
// same as an absent field instead of failing decode.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
