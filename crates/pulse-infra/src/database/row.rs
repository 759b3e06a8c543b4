//! Typed decoding from raw query results into domain structs.
//!
//! Column lists here mirror the `RETURNING` / `SELECT` lists in the
//! statement constants, so a schema drift shows up as a decode error
//! with the offending column name in it.

use sea_orm::{QueryResult, TryGetable};

use pulse_core::StoreError;
use pulse_core::domain::{
    ActivityEntry, Comment, EngagementGroup, EngagementStats, Like, OverallStats, Post,
    PostWithAuthor, RankedUser, TopPost, User, UserEngagement,
};

/// Read a single column, folding driver errors into the store taxonomy.
fn col<T: TryGetable>(row: &QueryResult, name: &str) -> Result<T, StoreError> {
    row.try_get("", name)
        .map_err(|e| StoreError::Query(e.to_string()))
}

pub(crate) fn user_from_row(row: &QueryResult) -> Result<User, StoreError> {
    Ok(User {
        id: col(row, "id")?,
        username: col(row, "username")?,
        email: col(row, "email")?,
        full_name: col(row, "full_name")?,
        created_at: col(row, "created_at")?,
        updated_at: col(row, "updated_at")?,
    })
}

pub(crate) fn post_from_row(row: &QueryResult) -> Result<Post, StoreError> {
    Ok(Post {
        id: col(row, "id")?,
        user_id: col(row, "user_id")?,
        content: col(row, "content")?,
        like_count: col(row, "like_count")?,
        comment_count: col(row, "comment_count")?,
        engagement_score: col(row, "engagement_score")?,
        created_at: col(row, "created_at")?,
    })
}

pub(crate) fn like_from_row(row: &QueryResult) -> Result<Like, StoreError> {
    Ok(Like {
        id: col(row, "id")?,
        post_id: col(row, "post_id")?,
        user_id: col(row, "user_id")?,
        created_at: col(row, "created_at")?,
    })
}

pub(crate) fn comment_from_row(row: &QueryResult) -> Result<Comment, StoreError> {
    Ok(Comment {
        id: col(row, "id")?,
        post_id: col(row, "post_id")?,
        user_id: col(row, "user_id")?,
        content: col(row, "content")?,
        created_at: col(row, "created_at")?,
    })
}

pub(crate) fn top_post_from_row(row: &QueryResult) -> Result<TopPost, StoreError> {
    Ok(TopPost {
        post_id: col(row, "post_id")?,
        username: col(row, "username")?,
        content: col(row, "content")?,
        like_count: col(row, "like_count")?,
        comment_count: col(row, "comment_count")?,
        engagement_score: col(row, "engagement_score")?,
        rank: col(row, "rank")?,
    })
}

pub(crate) fn user_engagement_from_row(row: &QueryResult) -> Result<UserEngagement, StoreError> {
    Ok(UserEngagement {
        user_id: col(row, "user_id")?,
        username: col(row, "username")?,
        total_posts: col(row, "total_posts")?,
        total_likes_received: col(row, "total_likes_received")?,
        total_comments_received: col(row, "total_comments_received")?,
    })
}

// Aggregates over an empty posts table come back as SQL NULL, hence the
// Option fields on OverallStats.
pub(crate) fn overall_stats_from_row(row: &QueryResult) -> Result<OverallStats, StoreError> {
    Ok(OverallStats {
        total_posts: col(row, "total_posts")?,
        total_likes: col(row, "total_likes")?,
        total_comments: col(row, "total_comments")?,
        avg_engagement: col(row, "avg_engagement")?,
        max_engagement: col(row, "max_engagement")?,
    })
}

pub(crate) fn ranked_user_from_row(row: &QueryResult) -> Result<RankedUser, StoreError> {
    Ok(RankedUser {
        username: col(row, "username")?,
        total_likes_received: col(row, "total_likes_received")?,
        rank: col(row, "rank")?,
    })
}

pub(crate) fn engagement_stats(
    overall: &QueryResult,
    ranked: &[QueryResult],
) -> Result<EngagementStats, StoreError> {
    Ok(EngagementStats {
        overall_stats: overall_stats_from_row(overall)?,
        top_engaged_users: ranked.iter().map(ranked_user_from_row).collect::<Result<_, _>>()?,
    })
}

pub(crate) fn activity_from_row(row: &QueryResult) -> Result<ActivityEntry, StoreError> {
    Ok(ActivityEntry {
        activity_type: col(row, "activity_type")?,
        username: col(row, "username")?,
        content: col(row, "content")?,
        activity_date: col(row, "activity_date")?,
    })
}

pub(crate) fn post_with_author_from_row(row: &QueryResult) -> Result<PostWithAuthor, StoreError> {
    Ok(PostWithAuthor {
        id: col(row, "id")?,
        user_id: col(row, "user_id")?,
        content: col(row, "content")?,
        like_count: col(row, "like_count")?,
        comment_count: col(row, "comment_count")?,
        engagement_score: col(row, "engagement_score")?,
        created_at: col(row, "created_at")?,
        username: col(row, "username")?,
    })
}

pub(crate) fn engagement_group_from_row(row: &QueryResult) -> Result<EngagementGroup, StoreError> {
    Ok(EngagementGroup {
        username: col(row, "username")?,
        post_count: col(row, "post_count")?,
        avg_engagement: col(row, "avg_engagement")?,
        total_likes: col(row, "total_likes")?,
        engagement_level: col(row, "engagement_level")?,
    })
}
