//! # Pulse Core
//!
//! The domain layer of the Pulse analytics backend.
//! This crate contains the entity and read-model types, the store error
//! taxonomy, and the port traits the API binds against. It has zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::StoreError;
