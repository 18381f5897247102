//! Database connection pool and repositories.

pub mod connection;
pub mod settings;
pub mod supplier;

pub use connection::{TableCounts, bootstrap, connect, get_table_counts, get_version};
