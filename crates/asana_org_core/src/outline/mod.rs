//! Outline projection of a task export.
//!
//! # Responsibility
//! - Group top-level tasks by owning section in first-seen order.
//! - Render sections and task subtrees into Org-mode outline text.
//!
//! # Invariants
//! - Output order is fully determined by document order.
//! - Rendering is pure: same input and options give byte-identical output.

pub mod render;
pub mod sections;
