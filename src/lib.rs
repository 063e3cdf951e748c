pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::database::PoolManager;
pub use adapters::delimited::fetch_from_delimited_file;
pub use adapters::json_file::fetch_from_json_file;
pub use core::normalize::normalize_dataset;
pub use core::service::DatasetService;
pub use core::transform::TransformRegistry;
pub use domain::model::{ChartConfig, DashboardConfig, DataSourceConfig, Dataset, Row, SourceKind};
pub use domain::ports::QueryRows;
pub use utils::error::{DataError, Result};
