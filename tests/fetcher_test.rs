use dashboard_data::{fetch_from_delimited_file, fetch_from_json_file, DataError, PoolManager, QueryRows};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn delimited_file_yields_header_keyed_string_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, "a,b\n1,2\n").unwrap();

    let records = fetch_from_delimited_file(&path).unwrap();
    assert_eq!(records, vec![json!({"a": "1", "b": "2"})]);
}

#[test]
fn delimited_file_preserves_header_case_and_skips_empty_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, "Name,AGE\nalice,30\n\nbob,25\n").unwrap();

    let records = fetch_from_delimited_file(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], json!({"Name": "alice", "AGE": "30"}));
    assert_eq!(records[1], json!({"Name": "bob", "AGE": "25"}));
}

#[test]
fn delimited_file_missing_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = fetch_from_delimited_file(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, DataError::Io(_)));
}

#[test]
fn delimited_file_with_uneven_records_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ragged.csv");
    fs::write(&path, "a,b\n1,2,3\n").unwrap();

    let err = fetch_from_delimited_file(&path).unwrap_err();
    assert!(matches!(err, DataError::Csv(_)));
}

#[test]
fn json_file_top_level_array_is_returned_directly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rows.json");
    fs::write(&path, r#"[{"a": 1}]"#).unwrap();

    let records = fetch_from_json_file(&path).unwrap();
    assert_eq!(records, vec![json!({"a": 1})]);
}

#[test]
fn json_file_object_with_rows_array_is_unwrapped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rows.json");
    fs::write(&path, r#"{"rows": [{"a": 1}]}"#).unwrap();

    let records = fetch_from_json_file(&path).unwrap();
    assert_eq!(records, vec![json!({"a": 1})]);
}

#[test]
fn json_file_unrecognized_shape_yields_no_records() {
    let dir = TempDir::new().unwrap();

    let object = dir.path().join("object.json");
    fs::write(&object, r#"{"x": 1}"#).unwrap();
    assert!(fetch_from_json_file(&object).unwrap().is_empty());

    let scalar = dir.path().join("scalar.json");
    fs::write(&scalar, "42").unwrap();
    assert!(fetch_from_json_file(&scalar).unwrap().is_empty());
}

#[test]
fn json_file_malformed_text_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").unwrap();

    let err = fetch_from_json_file(&path).unwrap_err();
    assert!(matches!(err, DataError::Json(_)));
}

#[tokio::test]
async fn database_fetch_without_connection_string_soft_fails_to_empty() {
    let pools = PoolManager::new();

    let rows = pools.fetch_rows(None, "select 1").await.unwrap();
    assert!(rows.is_empty());

    let rows = pools.fetch_rows(Some(""), "select 1").await.unwrap();
    assert!(rows.is_empty());
}
