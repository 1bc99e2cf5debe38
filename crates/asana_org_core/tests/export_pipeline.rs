use asana_org_core::{decode_document, export_document, export_file, ExportError, ExportOptions};
use serde_json::json;
use std::fs;

fn sample_document() -> String {
    json!({
        "data": [
            {
                "gid": "T1",
                "assignee": { "gid": "U1", "name": "Ann" },
                "name": "Buy milk",
                "notes": "",
                "completed_at": null,
                "parent": null,
                "memberships": [{ "section": { "gid": "S1", "name": "Inbox" } }],
                "subtasks": []
            },
            {
                "gid": "T2",
                "name": "Old chore",
                "completed_at": "2020-01-01T00:00:00.000Z",
                "memberships": [{ "section": { "gid": "S2", "name": "Archive" } }]
            }
        ]
    })
    .to_string()
}

#[test]
fn export_file_writes_outline_and_reports_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tasks.json");
    let output = dir.path().join("tasks.org");
    fs::write(&input, sample_document()).unwrap();

    let summary = export_file(&input, &output, &ExportOptions::new()).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "* Inbox\n** TODO Buy milk\n");
    assert_eq!(summary.output_path, output);
    assert_eq!(summary.section_count, 1);
    assert_eq!(summary.task_count, 1);
    assert_eq!(summary.bytes_written, written.len());
}

#[test]
fn export_file_includes_completed_when_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tasks.json");
    let output = dir.path().join("out.org");
    fs::write(&input, sample_document()).unwrap();

    let options = ExportOptions::new().with_completed(true);
    let summary = export_file(&input, &output, &options).unwrap();

    assert_eq!(summary.section_count, 2);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "* Inbox\n** TODO Buy milk\n* Archive\n** DONE Old chore\n"
    );
}

#[test]
fn decode_failure_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tasks.json");
    let output = dir.path().join("tasks.org");
    fs::write(&input, "{ \"data\": [").unwrap();

    let err = export_file(&input, &output, &ExportOptions::new()).unwrap_err();
    assert!(matches!(err, ExportError::Decode(_)));
    assert!(err.to_string().starts_with("decode failed"));
    assert!(!output.exists());
}

#[test]
fn grouping_failure_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tasks.json");
    let output = dir.path().join("tasks.org");
    let document = json!({ "data": [{ "gid": "T1", "name": "No section", "memberships": [] }] });
    fs::write(&input, document.to_string()).unwrap();

    let err = export_file(&input, &output, &ExportOptions::new()).unwrap_err();
    assert_eq!(err.stage(), "group");
    assert!(!output.exists());
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.json");
    let output = dir.path().join("missing.org");

    let err = export_file(&input, &output, &ExportOptions::new()).unwrap_err();
    assert!(matches!(err, ExportError::Io { ref path, .. } if path == &input));
    assert_eq!(err.stage(), "io");
    assert!(!output.exists());
}

#[test]
fn wrong_document_shape_is_decode_error() {
    let err = decode_document(r#"{"data": "not a list"}"#.as_bytes()).unwrap_err();
    assert_eq!(err.stage(), "decode");
}

#[test]
fn document_without_data_exports_empty_outline() {
    let document = decode_document("{}".as_bytes()).unwrap();
    assert!(document.data.is_empty());
    assert_eq!(
        export_document(&document, &ExportOptions::new()).unwrap(),
        ""
    );
}
