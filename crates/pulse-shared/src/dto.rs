//! Data Transfer Objects - request/response types for the API.
//!
//! Request bodies are plain serde shapes; a missing or mistyped field fails
//! deserialization in the extractor, before any store access, and the serde
//! message (which names the missing field) is returned in the error body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a user; also the body of a full-field update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub full_name: String,
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreate {
    pub user_id: i32,
    pub content: String,
}

/// Request identifying a like; used for both create and delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeCreate {
    pub post_id: i32,
    pub user_id: i32,
}

/// Request to create a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentCreate {
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
}

/// Query string of the top-posts endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TopPostsQuery {
    pub limit: Option<i64>,
}

/// Query string of the post-search endpoint. `query` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub query: String,
}

/// A user's public representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

/// A post as returned by the CRUD endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub user_id: i32,
    pub content: String,
    pub like_count: i32,
    pub comment_count: i32,
    pub engagement_score: f64,
}

/// A stored like row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

/// A stored comment row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Confirmation body for a created like.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeCreated {
    pub message: String,
    pub like: LikeResponse,
}

/// Confirmation body for a created comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentCreated {
    pub message: String,
    pub comment: CommentResponse,
}

/// Plain confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of the detailed health probe. A healthy probe carries `timestamp`
/// and no `error`; a failed probe carries `error` and no `timestamp`. The
/// absent field is omitted from the body entirely.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
