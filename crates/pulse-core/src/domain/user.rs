use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - a registered member of the network.
///
/// `id` and both timestamps are assigned by the store; the service never
/// fabricates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field set for creating a user, also used for full-field updates.
/// `username` and `email` are unique across all users; the store enforces
/// this and violations surface as constraint errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
}
