//! Read models for the reporting endpoints.
//!
//! Every struct here mirrors one store-side view or aggregate row, field
//! names matching the column names in store-returned order. They serialize
//! directly as response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the `top_posts` view. `rank` comes from the view's window
/// function. Field order doubles as the CSV column order for the report
/// export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPost {
    pub post_id: i32,
    pub username: String,
    pub content: String,
    pub like_count: i32,
    pub comment_count: i32,
    pub engagement_score: f64,
    pub rank: i64,
}

/// One row of the `user_engagement_summary` view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEngagement {
    pub user_id: i32,
    pub username: String,
    pub total_posts: i64,
    pub total_likes_received: i64,
    pub total_comments_received: i64,
}

/// Aggregates over the whole posts table. All aggregates except the count
/// are NULL when no posts exist, hence the options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallStats {
    pub total_posts: i64,
    pub total_likes: Option<i64>,
    pub total_comments: Option<i64>,
    pub avg_engagement: Option<f64>,
    pub max_engagement: Option<f64>,
}

/// A user ranked by received likes. `rank` is assigned by the store's
/// window function; ties follow the store's rank semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedUser {
    pub username: String,
    pub total_likes_received: i64,
    pub rank: i64,
}

/// Combined payload of the engagement-stats endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementStats {
    pub overall_stats: OverallStats,
    pub top_engaged_users: Vec<RankedUser>,
}

/// One row of the unified activity feed (posts, likes and comments merged).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub activity_type: String,
    pub username: String,
    pub content: String,
    pub activity_date: DateTime<Utc>,
}

/// A post joined with its author's username, returned by content search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithAuthor {
    pub id: i32,
    pub user_id: i32,
    pub content: String,
    pub like_count: i32,
    pub comment_count: i32,
    pub engagement_score: f64,
    pub created_at: DateTime<Utc>,
    pub username: String,
}

/// Per-user engagement grouping. `engagement_level` is classified by the
/// store query (High above 2, Medium above 1, Low otherwise; strict
/// comparisons).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementGroup {
    pub username: String,
    pub post_count: i64,
    pub avg_engagement: f64,
    pub total_likes: i64,
    pub engagement_level: String,
}
