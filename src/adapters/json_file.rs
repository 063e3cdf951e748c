use crate::utils::error::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a JSON file and return its records.
///
/// A top-level array is returned as-is; an object with a `rows` array
/// returns that array; any other shape yields no records (soft-fail, not an
/// error). The path resolves against the process working directory.
pub fn fetch_from_json_file<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let contents = fs::read_to_string(path)?;
    let data: Value = serde_json::from_str(&contents)?;

    match data {
        Value::Array(records) => Ok(records),
        Value::Object(mut object) => match object.remove("rows") {
            Some(Value::Array(records)) => Ok(records),
            _ => Ok(Vec::new()),
        },
        _ => Ok(Vec::new()),
    }
}
