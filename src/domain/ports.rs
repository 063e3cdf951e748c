use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Capability to run a query against a relational database and get back raw,
/// un-normalized rows.
///
/// A missing or empty connection string must resolve to an empty row set
/// without touching the database, so a dashboard with no configured
/// connection degrades to empty data instead of failing the whole page.
#[async_trait]
pub trait QueryRows: Send + Sync {
    async fn fetch_rows(&self, connection_string: Option<&str>, query: &str)
        -> Result<Vec<Value>>;
}
