//! # Pulse Shared
//!
//! Wire types shared between the API server and its clients: request and
//! response DTOs plus the problem-details error body.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
