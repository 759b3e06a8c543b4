//! Store-boundary error types.

use thiserror::Error;

/// Errors surfaced by store implementations.
///
/// Mutating operations guarantee their transaction has been rolled back
/// before one of these crosses the port boundary.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Row not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
