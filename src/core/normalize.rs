use crate::domain::model::{Dataset, Row, DEFAULT_DATASET_NAME};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde_json::Value;

/// Normalize arbitrary raw records into a validated [`Dataset`].
///
/// Keys are lowercased; nested objects and arrays become null; scalar values
/// pass through unchanged. Records that are not JSON objects contribute an
/// empty row so row count always matches input count. The result is
/// validated before it is returned.
pub fn normalize_dataset(raw: &[Value], name: Option<&str>) -> Result<Dataset> {
    let mut rows = Vec::with_capacity(raw.len());

    for record in raw {
        let mut row = Row::new();
        if let Value::Object(fields) = record {
            for (key, value) in fields {
                let normalized = match value {
                    Value::Object(_) | Value::Array(_) => Value::Null,
                    scalar => scalar.clone(),
                };
                row.insert(key.to_lowercase(), normalized);
            }
        }
        rows.push(row);
    }

    let dataset = Dataset {
        name: name.unwrap_or(DEFAULT_DATASET_NAME).to_string(),
        rows,
    };

    // The loop above cannot produce nested values; this catches defects here,
    // not bad input.
    dataset.validate()?;
    Ok(dataset)
}
