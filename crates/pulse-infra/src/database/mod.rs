//! Database connection management and the PostgreSQL store.

mod connections;
mod postgres_analytics;
mod postgres_store;
mod row;

pub use connections::{DatabaseConfig, connect};
pub use postgres_store::PostgresStore;
