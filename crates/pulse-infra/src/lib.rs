//! # Pulse Infrastructure
//!
//! Concrete implementation of the ports defined in `pulse-core`.
//! This crate contains the PostgreSQL connection management and the
//! raw-statement store the API is served from.

pub mod database;

pub use database::{DatabaseConfig, PostgresStore, connect};
