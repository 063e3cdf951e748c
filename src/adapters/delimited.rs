use crate::utils::error::Result;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Read a comma-delimited file and return one JSON object per record.
///
/// The first line is the header; header names become keys verbatim (no
/// lowercasing here, that happens during normalization) and every field
/// stays a string. Empty lines are skipped. The path resolves against the
/// process working directory.
pub fn fetch_from_delimited_file<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let contents = fs::read_to_string(path)?;
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut fields = Map::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            fields.insert(header.to_string(), Value::String(field.to_string()));
        }
        records.push(Value::Object(fields));
    }
    Ok(records)
}
