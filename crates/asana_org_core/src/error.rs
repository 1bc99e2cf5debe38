//! Export error taxonomy.
//!
//! # Responsibility
//! - Name the pipeline stage that failed (decode, group, io).
//! - Keep messages descriptive enough for CLI users without a backtrace.
//!
//! # Invariants
//! - Every error aborts the whole conversion; there is no partial output.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Result type used by export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors from decode, grouping and file I/O.
#[derive(Debug)]
pub enum ExportError {
    /// Input document does not match the expected export shape.
    Decode(serde_json::Error),
    /// A task selected for grouping cannot be assigned to a section.
    MalformedInput {
        task_gid: String,
        reason: &'static str,
    },
    /// Input could not be read or output could not be written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ExportError {
    pub(crate) fn missing_membership(task_gid: &str) -> Self {
        Self::MalformedInput {
            task_gid: task_gid.to_string(),
            reason: "task has no memberships",
        }
    }

    pub(crate) fn missing_section(task_gid: &str) -> Self {
        Self::MalformedInput {
            task_gid: task_gid.to_string(),
            reason: "first membership has no section",
        }
    }

    /// Returns the pipeline stage that produced this error.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Decode(_) => "decode",
            Self::MalformedInput { .. } => "group",
            Self::Io { .. } => "io",
        }
    }
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "decode failed: {err}"),
            Self::MalformedInput { task_gid, reason } => {
                write!(f, "group failed: malformed input for task `{task_gid}`: {reason}")
            }
            Self::Io { path, source } => {
                write!(f, "io failed: `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::MalformedInput { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}
