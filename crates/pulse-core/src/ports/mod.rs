//! Ports - trait definitions for the store the API binds against.
//! Infrastructure implements these; tests substitute fakes.

mod store;

pub use store::{AnalyticsStore, SocialStore, Store};
