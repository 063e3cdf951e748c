use crate::domain::model::Dataset;
use crate::utils::error::{DataError, Result};
use serde_json::Value;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Row values must be scalars or null. The normalizer coerces nested
/// objects/arrays to null before validation runs, so a failure here signals
/// a defect upstream, not bad user data.
impl Validate for Dataset {
    fn validate(&self) -> Result<()> {
        for (index, row) in self.rows.iter().enumerate() {
            for (key, value) in &row.values {
                match value {
                    Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
                    Value::Array(_) | Value::Object(_) => {
                        return Err(DataError::Validation {
                            message: format!(
                                "row {}: key '{}' holds a nested value; rows may only contain scalars or null",
                                index, key
                            ),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
