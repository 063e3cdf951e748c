use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Name given to a dataset when the caller does not supply one.
pub const DEFAULT_DATASET_NAME: &str = "dataset";

/// A single record with lowercase keys and scalar-or-null values.
///
/// The value type is `serde_json::Value` because rows arrive from untyped
/// sources; the normalizer guarantees (and the validator enforces) that no
/// value is an object or array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    #[serde(flatten)]
    pub values: HashMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }
}

/// A named, ordered collection of rows. Row order is whatever the source
/// produced; nothing beyond that is guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }
}

/// The kind of external source a dashboard data source points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Postgres,
    Csv,
    Json,
}

/// One entry in a dashboard's `dataSources` map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceConfig {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Chart definition. Consumed by renderers, not interpreted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data_source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
}

/// Full dashboard configuration as stored/exchanged as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub charts: Vec<ChartConfig>,
    pub data_sources: HashMap<String, DataSourceConfig>,
}
