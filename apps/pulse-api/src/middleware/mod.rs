//! Request-level error translation.

pub mod error;
