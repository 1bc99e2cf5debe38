//! Export pipeline use-case service.
//!
//! # Responsibility
//! - Run decode -> group -> render as one sequential pass.
//! - Derive the default output path and write the outline file.
//!
//! # Invariants
//! - The outline is fully rendered in memory before any output is created.
//! - On any error no output file is created or truncated.
//! - Logs carry metadata only (counts, stages), never task text.

use crate::config::ExportOptions;
use crate::error::{ExportError, ExportResult};
use crate::model::task::Document;
use crate::outline::render::render_outline;
use crate::outline::sections::Sections;
use log::{info, warn};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

const OUTPUT_EXTENSION: &str = "org";

/// Result metadata of one file export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output_path: PathBuf,
    pub section_count: usize,
    /// Grouped top-level tasks, before assignee filtering.
    pub task_count: usize,
    pub bytes_written: usize,
}

/// Decodes an export document from a reader.
///
/// # Errors
/// - `ExportError::Decode` when the input is not a valid export document.
pub fn decode_document(reader: impl Read) -> ExportResult<Document> {
    serde_json::from_reader(reader).map_err(ExportError::from)
}

/// Renders an already-decoded document.
///
/// # Errors
/// - `ExportError::MalformedInput` when grouping fails.
pub fn export_document(document: &Document, options: &ExportOptions) -> ExportResult<String> {
    let sections = Sections::group(&document.data, options.include_completed)?;
    Ok(render_outline(&sections, options))
}

/// Decodes and renders one document from a reader.
pub fn export_outline(reader: impl Read, options: &ExportOptions) -> ExportResult<String> {
    let document = decode_document(reader)?;
    export_document(&document, options)
}

/// Converts `input` into an outline file at `output`.
///
/// # Errors
/// - `ExportError::Io` when reading input or writing output fails.
/// - Decode and grouping errors as in [`export_outline`].
pub fn export_file(
    input: &Path,
    output: &Path,
    options: &ExportOptions,
) -> ExportResult<ExportSummary> {
    info!(
        "event=export_start module=export include_completed={} assignee_filter={}",
        options.include_completed,
        options.assignee_filter.is_some()
    );

    let result = convert_file(input, output, options);
    match &result {
        Ok(summary) => info!(
            "event=export_done module=export status=ok sections={} tasks={} bytes={}",
            summary.section_count, summary.task_count, summary.bytes_written
        ),
        Err(err) => warn!(
            "event=export_done module=export status=error stage={}",
            err.stage()
        ),
    }
    result
}

fn convert_file(
    input: &Path,
    output: &Path,
    options: &ExportOptions,
) -> ExportResult<ExportSummary> {
    let file = fs::File::open(input).map_err(|source| ExportError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let document = decode_document(std::io::BufReader::new(file))?;

    let sections = Sections::group(&document.data, options.include_completed)?;
    let outline = render_outline(&sections, options);

    fs::write(output, outline.as_bytes()).map_err(|source| ExportError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(ExportSummary {
        output_path: output.to_path_buf(),
        section_count: sections.len(),
        task_count: sections.task_count(),
        bytes_written: outline.len(),
    })
}

/// Returns `input` with its extension replaced by `.org`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::default_output_path;
    use std::path::{Path, PathBuf};

    #[test]
    fn default_output_path_replaces_extension() {
        assert_eq!(
            default_output_path(Path::new("exports/tasks.json")),
            PathBuf::from("exports/tasks.org")
        );
    }

    #[test]
    fn default_output_path_appends_extension_when_missing() {
        assert_eq!(
            default_output_path(Path::new("tasks")),
            PathBuf::from("tasks.org")
        );
    }

    #[test]
    fn default_output_path_only_replaces_last_extension() {
        assert_eq!(
            default_output_path(Path::new("tasks.backup.json")),
            PathBuf::from("tasks.backup.org")
        );
    }
}
