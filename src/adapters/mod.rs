pub mod database;
pub mod delimited;
pub mod json_file;
