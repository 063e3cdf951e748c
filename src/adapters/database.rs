use crate::domain::ports::QueryRows;
use crate::utils::error::{DataError, Result};
use async_trait::async_trait;
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio_postgres::NoTls;

const MAX_POOL_SIZE: usize = 16;

/// Connection pools keyed by connection string. Each distinct connection
/// string gets its own pool, created lazily on first use and reused for the
/// lifetime of the manager.
pub struct PoolManager {
    pools: Mutex<HashMap<String, Pool>>,
}

impl PoolManager {
    pub fn new() -> Self {
        Self {
            pools: Mutex::new(HashMap::new()),
        }
    }

    fn pool_for(&self, connection_string: &str) -> Result<Pool> {
        let mut pools = self.pools.lock().map_err(|_| DataError::Pool {
            message: "connection pool registry lock poisoned".to_string(),
        })?;

        if let Some(pool) = pools.get(connection_string) {
            return Ok(pool.clone());
        }

        tracing::debug!("creating connection pool");
        let pg_config: tokio_postgres::Config = connection_string.parse()?;
        let manager = Manager::from_config(
            pg_config,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );
        let pool = Pool::builder(manager)
            .max_size(MAX_POOL_SIZE)
            .build()
            .map_err(|e| DataError::Pool {
                message: e.to_string(),
            })?;

        pools.insert(connection_string.to_string(), pool.clone());
        Ok(pool)
    }
}

impl Default for PoolManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryRows for PoolManager {
    async fn fetch_rows(
        &self,
        connection_string: Option<&str>,
        query: &str,
    ) -> Result<Vec<Value>> {
        let connection_string = match connection_string {
            Some(c) if !c.is_empty() => c,
            // No connection configured: degrade to empty data instead of
            // failing the whole dashboard.
            _ => return Ok(Vec::new()),
        };

        let pool = self.pool_for(connection_string)?;
        let client = pool.get().await.map_err(|e| DataError::Pool {
            message: e.to_string(),
        })?;

        let rows = client.query(query, &[]).await?;
        tracing::debug!(rows = rows.len(), "query returned");
        Ok(rows.iter().map(row_to_value).collect())
    }
}

/// Decode one driver row into a JSON object, keyed by column name. Columns
/// whose type has no mapping here decode as text; anything that still fails
/// to decode becomes null.
fn row_to_value(row: &tokio_postgres::Row) -> Value {
    let mut fields = Map::new();
    for (index, column) in row.columns().iter().enumerate() {
        let value = match column.type_().name() {
            "bool" => row
                .try_get::<_, Option<bool>>(index)
                .ok()
                .flatten()
                .map(Value::Bool),
            "int2" => row
                .try_get::<_, Option<i16>>(index)
                .ok()
                .flatten()
                .map(Value::from),
            "int4" => row
                .try_get::<_, Option<i32>>(index)
                .ok()
                .flatten()
                .map(Value::from),
            "int8" => row
                .try_get::<_, Option<i64>>(index)
                .ok()
                .flatten()
                .map(Value::from),
            "float4" => row
                .try_get::<_, Option<f32>>(index)
                .ok()
                .flatten()
                .map(|n| Value::from(f64::from(n))),
            "float8" => row
                .try_get::<_, Option<f64>>(index)
                .ok()
                .flatten()
                .map(Value::from),
            "json" | "jsonb" => row.try_get::<_, Option<Value>>(index).ok().flatten(),
            _ => row
                .try_get::<_, Option<String>>(index)
                .ok()
                .flatten()
                .map(Value::String),
        };
        fields.insert(column.name().to_string(), value.unwrap_or(Value::Null));
    }
    Value::Object(fields)
}
