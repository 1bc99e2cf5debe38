//! Core conversion logic for asana-to-org.
//! Turns an exported task hierarchy into an Org-mode outline.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod outline;
pub mod service;

pub use config::ExportOptions;
pub use error::{ExportError, ExportResult};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::task::{Assignee, Document, Membership, ParentRef, SectionRef, Task};
pub use outline::render::{render_outline, render_section, render_task};
pub use outline::sections::{Section, Sections};
pub use service::export_service::{
    decode_document, default_output_path, export_document, export_file, export_outline,
    ExportSummary,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
