mod common;

use std::collections::BTreeSet;

use tempfile::TempDir;

use common::{PNG_BYTES, image_para, para, table, write_docx};
use docxtract::{Error, OutputFormat, export, extract_docx};

fn sample_collection(dir: &TempDir) -> docxtract::DocumentCollection {
    let path = dir.path().join("report.docx");
    let body = format!(
        "{}{}{}",
        para("Hello world"),
        image_para("logo.png", "rId1"),
        table(&[&["a", "b"], &["c", "d"]]),
    );
    write_docx(
        &path,
        &body,
        &[("rId1", "media/image1.png")],
        &[("media/image1.png", PNG_BYTES)],
    );
    extract_docx(&path).unwrap()
}

#[test]
fn export_writes_one_file_per_part() {
    let dir = TempDir::new().unwrap();
    let collection = sample_collection(&dir);
    let prefix = format!("{}/", dir.path().display());

    export(&collection, OutputFormat::Csv, &prefix).unwrap();
    export(&collection, OutputFormat::Json, &prefix).unwrap();

    for name in [
        "report_content.csv",
        "report_resources.csv",
        "report_content.json",
        "report_resources.json",
    ] {
        assert!(dir.path().join(name).is_file(), "missing {name}");
    }
}

#[test]
fn csv_and_json_agree_on_rows_and_columns() {
    let dir = TempDir::new().unwrap();
    let collection = sample_collection(&dir);
    let prefix = format!("{}/", dir.path().display());

    export(&collection, OutputFormat::Csv, &prefix).unwrap();
    export(&collection, OutputFormat::Json, &prefix).unwrap();

    for part in ["content", "resources"] {
        let csv_path = dir.path().join(format!("report_{part}.csv"));
        let mut reader = csv::Reader::from_path(&csv_path).unwrap();
        let csv_columns: BTreeSet<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(String::from)
            .collect();
        let csv_rows = reader.records().count();

        let json_path = dir.path().join(format!("report_{part}.json"));
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        let rows = json.as_array().unwrap();
        let json_columns: BTreeSet<String> = rows[0]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();

        assert_eq!(csv_rows, rows.len(), "row count mismatch for {part}");
        assert_eq!(csv_columns, json_columns, "column set mismatch for {part}");
    }
}

#[test]
fn content_csv_has_fixed_column_order_and_sentinel() {
    let dir = TempDir::new().unwrap();
    let collection = sample_collection(&dir);
    let prefix = format!("{}/", dir.path().display());

    export(&collection, OutputFormat::Csv, &prefix).unwrap();

    let mut reader = csv::Reader::from_path(dir.path().join("report_content.csv")).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(
        headers,
        vec![
            "document_name",
            "paragraph_content",
            "content_reference_id",
            "style",
            "style_extracted",
            "highlighted_content",
        ]
    );

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records[0].get(2), Some("Novalue"));
    assert_eq!(records[1].get(2), Some("0"));
    assert_eq!(records[2].get(2), Some("1"));
}

#[test]
fn json_resource_rows_keep_reference_ids() {
    let dir = TempDir::new().unwrap();
    let collection = sample_collection(&dir);
    let prefix = format!("{}/", dir.path().display());

    export(&collection, OutputFormat::Json, &prefix).unwrap();

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("report_resources.json")).unwrap(),
    )
    .unwrap();
    let rows = json.as_array().unwrap();

    assert_eq!(rows[0]["resource_index"], 0);
    assert_eq!(rows[0]["resource_type"], "image");
    assert_eq!(rows[0]["image_rID"], "rId1");
    assert_eq!(rows[1]["resource_index"], 1);
    assert_eq!(rows[1]["resource_type"], "table");
    assert_eq!(rows[1]["text_content"][1][0], "c");
}

#[test]
fn unwritable_target_fails_without_losing_the_collection() {
    let dir = TempDir::new().unwrap();
    let collection = sample_collection(&dir);
    let bad_prefix = format!("{}/no/such/dir/", dir.path().display());

    let err = export(&collection, OutputFormat::Json, &bad_prefix).unwrap_err();
    assert!(matches!(err, Error::ExportTargetUnwritable(_, _)), "got {err}");

    // The in-memory collection survives a failed export and can be retried.
    let good_prefix = format!("{}/", dir.path().display());
    export(&collection, OutputFormat::Json, &good_prefix).unwrap();
}
