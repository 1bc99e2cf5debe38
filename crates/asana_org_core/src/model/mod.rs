//! Entity model for exported task hierarchies.
//!
//! # Responsibility
//! - Define the decoded shape of an Asana-style task export.
//! - Provide read-only lookup helpers used by grouping and rendering.
//!
//! # Invariants
//! - Entities are constructed once by decode and never mutated afterwards.
//! - Absent optional values have one canonical representation (`None`,
//!   empty string, or empty vector).

pub mod task;
