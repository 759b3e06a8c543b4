use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity.
///
/// `like_count`, `comment_count` and `engagement_score` are maintained by
/// the store; this service only ever reads them back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub content: String,
    pub like_count: i32,
    pub comment_count: i32,
    pub engagement_score: f64,
    pub created_at: DateTime<Utc>,
}

/// Field set for creating a post. `user_id` must reference an existing user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub user_id: i32,
    pub content: String,
}
