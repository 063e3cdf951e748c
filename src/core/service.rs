use crate::adapters::{delimited, json_file};
use crate::core::normalize::normalize_dataset;
use crate::core::transform::TransformRegistry;
use crate::domain::model::{DashboardConfig, DataSourceConfig, Dataset, SourceKind};
use crate::domain::ports::QueryRows;
use crate::utils::error::{DataError, Result};
use serde_json::Value;

/// Drives the fetch -> normalize -> transform pipeline for one dashboard
/// data source. Owns the transform registry; database access goes through
/// the [`QueryRows`] port so it can be swapped out in tests.
pub struct DatasetService<Q: QueryRows> {
    database: Q,
    registry: TransformRegistry,
}

impl<Q: QueryRows> DatasetService<Q> {
    pub fn new(database: Q, registry: TransformRegistry) -> Self {
        Self { database, registry }
    }

    pub fn registry_mut(&mut self) -> &mut TransformRegistry {
        &mut self.registry
    }

    /// Produce the final dataset for `source_name` of `config`: fetch raw
    /// rows from the configured source, normalize them, then apply the
    /// dashboard's registered transform (if any).
    pub async fn dataset_for(
        &self,
        config: &DashboardConfig,
        source_name: &str,
    ) -> Result<Dataset> {
        let source = config
            .data_sources
            .get(source_name)
            .ok_or_else(|| DataError::Config {
                message: format!(
                    "dashboard '{}' has no data source named '{}'",
                    config.id, source_name
                ),
            })?;

        let raw = self.fetch_raw(source).await?;
        tracing::debug!(source = source_name, rows = raw.len(), "fetched raw rows");

        let dataset = normalize_dataset(&raw, Some(source_name))?;
        Ok(self.registry.apply(&config.id, dataset))
    }

    async fn fetch_raw(&self, source: &DataSourceConfig) -> Result<Vec<Value>> {
        match source.kind {
            SourceKind::Postgres => {
                let query = source.query.as_deref().ok_or_else(|| DataError::Config {
                    message: "postgres data source is missing a query".to_string(),
                })?;
                self.database
                    .fetch_rows(source.connection_string.as_deref(), query)
                    .await
            }
            SourceKind::Csv => {
                let path = require_path(source)?;
                delimited::fetch_from_delimited_file(path)
            }
            SourceKind::Json => {
                let path = require_path(source)?;
                json_file::fetch_from_json_file(path)
            }
        }
    }
}

fn require_path(source: &DataSourceConfig) -> Result<&str> {
    source.path.as_deref().ok_or_else(|| DataError::Config {
        message: "file data source is missing a path".to_string(),
    })
}
