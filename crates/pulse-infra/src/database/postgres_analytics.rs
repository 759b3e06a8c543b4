//! Analytics queries over the reporting views.
//!
//! These read from the `top_posts` and `user_engagement_summary` views and
//! the `post_engagement_mv` materialized view defined in `db/schema.sql`.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, TransactionTrait};

use pulse_core::StoreError;
use pulse_core::domain::{
    ActivityEntry, EngagementGroup, EngagementStats, PostWithAuthor, TopPost, UserEngagement,
};
use pulse_core::ports::AnalyticsStore;

use super::postgres_store::{PostgresStore, classify, commit_or_rollback, stmt};
use super::row;

pub(crate) const TOP_POSTS: &str = "SELECT post_id, username, content, like_count, \
    comment_count, engagement_score, rank FROM top_posts LIMIT $1";

pub(crate) const EXPORT_TOP_POSTS: &str = "SELECT post_id, username, content, like_count, \
    comment_count, engagement_score, rank FROM top_posts";

pub(crate) const USER_SUMMARY: &str = "SELECT user_id, username, total_posts, \
    total_likes_received, total_comments_received FROM user_engagement_summary";

pub(crate) const OVERALL_STATS: &str = "SELECT COUNT(*) AS total_posts, \
    SUM(like_count) AS total_likes, SUM(comment_count) AS total_comments, \
    AVG(engagement_score) AS avg_engagement, MAX(engagement_score) AS max_engagement \
    FROM posts";

pub(crate) const TOP_ENGAGED_USERS: &str = "SELECT username, total_likes_received, \
    RANK() OVER (ORDER BY total_likes_received DESC) AS rank \
    FROM user_engagement_summary LIMIT 5";

pub(crate) const UNION_ACTIVITIES: &str = "SELECT 'POST' AS activity_type, u.username, \
    p.content, p.created_at AS activity_date \
    FROM posts p JOIN users u ON p.user_id = u.id \
    UNION ALL \
    SELECT 'LIKE' AS activity_type, u.username, 'Liked a post' AS content, \
    l.created_at AS activity_date \
    FROM likes l JOIN users u ON l.user_id = u.id \
    UNION ALL \
    SELECT 'COMMENT' AS activity_type, u.username, c.content, \
    c.created_at AS activity_date \
    FROM comments c JOIN users u ON c.user_id = u.id \
    ORDER BY activity_date DESC LIMIT 20";

pub(crate) const SEARCH_POSTS: &str = "SELECT p.id, p.user_id, p.content, p.like_count, \
    p.comment_count, p.engagement_score, p.created_at, u.username \
    FROM posts p JOIN users u ON p.user_id = u.id \
    WHERE p.content LIKE $1";

pub(crate) const REFRESH_MATERIALIZED_VIEW: &str = "REFRESH MATERIALIZED VIEW post_engagement_mv";

pub(crate) const CALL_REFRESH_PROCEDURE: &str = "CALL refresh_engagement_metrics()";

pub(crate) const GROUP_BY_ENGAGEMENT: &str = "SELECT u.username, COUNT(p.id) AS post_count, \
    AVG(p.engagement_score) AS avg_engagement, SUM(p.like_count) AS total_likes, \
    CASE WHEN AVG(p.engagement_score) > 2 THEN 'High' \
    WHEN AVG(p.engagement_score) > 1 THEN 'Medium' \
    ELSE 'Low' END AS engagement_level \
    FROM users u JOIN posts p ON u.id = p.user_id \
    GROUP BY u.id, u.username \
    HAVING COUNT(p.id) >= 1 \
    ORDER BY avg_engagement DESC";

#[async_trait]
impl AnalyticsStore for PostgresStore {
    async fn top_posts(&self, limit: i64) -> Result<Vec<TopPost>, StoreError> {
        let rows = self
            .db
            .query_all(stmt(TOP_POSTS, [limit.into()]))
            .await
            .map_err(classify)?;
        rows.iter().map(row::top_post_from_row).collect()
    }

    async fn export_top_posts(&self) -> Result<Vec<TopPost>, StoreError> {
        let rows = self
            .db
            .query_all(stmt(EXPORT_TOP_POSTS, []))
            .await
            .map_err(classify)?;
        rows.iter().map(row::top_post_from_row).collect()
    }

    async fn user_summary(&self) -> Result<Vec<UserEngagement>, StoreError> {
        let rows = self
            .db
            .query_all(stmt(USER_SUMMARY, []))
            .await
            .map_err(classify)?;
        rows.iter().map(row::user_engagement_from_row).collect()
    }

    async fn engagement_stats(&self) -> Result<EngagementStats, StoreError> {
        let overall = self
            .db
            .query_one(stmt(OVERALL_STATS, []))
            .await
            .map_err(classify)?
            .ok_or_else(|| StoreError::Query("aggregate query returned no row".into()))?;
        let ranked = self
            .db
            .query_all(stmt(TOP_ENGAGED_USERS, []))
            .await
            .map_err(classify)?;
        row::engagement_stats(&overall, &ranked)
    }

    async fn union_activities(&self) -> Result<Vec<ActivityEntry>, StoreError> {
        let rows = self
            .db
            .query_all(stmt(UNION_ACTIVITIES, []))
            .await
            .map_err(classify)?;
        rows.iter().map(row::activity_from_row).collect()
    }

    async fn search_posts(&self, term: &str) -> Result<Vec<PostWithAuthor>, StoreError> {
        let pattern = format!("%{}%", term);
        let rows = self
            .db
            .query_all(stmt(SEARCH_POSTS, [pattern.into()]))
            .await
            .map_err(classify)?;
        rows.iter().map(row::post_with_author_from_row).collect()
    }

    async fn refresh_materialized(&self) -> Result<(), StoreError> {
        let txn = self.db.begin().await.map_err(classify)?;
        let outcome = run_refresh(&txn).await;
        commit_or_rollback(txn, outcome).await
    }

    async fn engagement_groups(&self) -> Result<Vec<EngagementGroup>, StoreError> {
        let rows = self
            .db
            .query_all(stmt(GROUP_BY_ENGAGEMENT, []))
            .await
            .map_err(classify)?;
        rows.iter().map(row::engagement_group_from_row).collect()
    }
}

// The view refresh and the metric recompute must land together.
async fn run_refresh(conn: &impl ConnectionTrait) -> Result<(), StoreError> {
    conn.execute(stmt(REFRESH_MATERIALIZED_VIEW, []))
        .await
        .map_err(classify)?;
    conn.execute(stmt(CALL_REFRESH_PROCEDURE, []))
        .await
        .map_err(classify)?;
    Ok(())
}
