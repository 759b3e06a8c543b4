use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Like entity - one row per (post, user) pair; the store enforces the
/// uniqueness of the pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

/// The (post, user) pair identifying a like, used for both create and
/// remove.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LikeKey {
    pub post_id: i32,
    pub user_id: i32,
}

/// Comment entity. Create-only through this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Field set for creating a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
}
