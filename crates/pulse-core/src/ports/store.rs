use async_trait::async_trait;

use crate::domain::{
    ActivityEntry, Comment, EngagementGroup, EngagementStats, Like, LikeKey, NewComment, NewPost,
    NewUser, Post, PostWithAuthor, TopPost, User, UserEngagement,
};
use crate::error::StoreError;

/// Entity CRUD surface.
///
/// Every mutating method runs its statement inside a transaction that is
/// committed on success and rolled back on any failure; the returned row is
/// the stored row (server-assigned fields included), obtained via a
/// returning clause rather than a second read.
#[async_trait]
pub trait SocialStore: Send + Sync {
    /// Insert a user. Duplicate username or email surfaces as
    /// [`StoreError::Constraint`].
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// All users, newest first.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Fetch one user by id.
    async fn get_user(&self, id: i32) -> Result<Option<User>, StoreError>;

    /// Full-field update. [`StoreError::NotFound`] when no row matched.
    async fn update_user(&self, id: i32, update: NewUser) -> Result<User, StoreError>;

    /// Delete by id. [`StoreError::NotFound`] when no row matched.
    async fn delete_user(&self, id: i32) -> Result<(), StoreError>;

    /// Insert a post. An unknown `user_id` surfaces as
    /// [`StoreError::Constraint`].
    async fn create_post(&self, new_post: NewPost) -> Result<Post, StoreError>;

    /// All posts, newest first.
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;

    /// Insert a like. A duplicate pair or unknown ids surface as
    /// [`StoreError::Constraint`].
    async fn create_like(&self, like: LikeKey) -> Result<Like, StoreError>;

    /// Delete the like matching the pair. [`StoreError::NotFound`] when no
    /// row matched.
    async fn remove_like(&self, like: LikeKey) -> Result<(), StoreError>;

    /// Insert a comment.
    async fn create_comment(&self, new_comment: NewComment) -> Result<Comment, StoreError>;
}

/// Reporting surface over the store-side views and aggregates. All methods
/// are read-only except [`AnalyticsStore::refresh_materialized`].
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// Top `limit` rows of the `top_posts` view.
    async fn top_posts(&self, limit: i64) -> Result<Vec<TopPost>, StoreError>;

    /// Every row of the `top_posts` view, for the CSV report.
    async fn export_top_posts(&self) -> Result<Vec<TopPost>, StoreError>;

    /// Every row of the `user_engagement_summary` view.
    async fn user_summary(&self) -> Result<Vec<UserEngagement>, StoreError>;

    /// Whole-table post aggregates plus the five most-liked users.
    async fn engagement_stats(&self) -> Result<EngagementStats, StoreError>;

    /// Merged post/like/comment feed, newest 20 entries.
    async fn union_activities(&self) -> Result<Vec<ActivityEntry>, StoreError>;

    /// Posts whose content contains `term`, joined with the author name.
    /// The wildcard wrapping happens inside the implementation; callers pass
    /// the bare term.
    async fn search_posts(&self, term: &str) -> Result<Vec<PostWithAuthor>, StoreError>;

    /// Refresh `post_engagement_mv` and call the store's
    /// `refresh_engagement_metrics` procedure inside one transaction.
    /// Failure of either rolls back both.
    async fn refresh_materialized(&self) -> Result<(), StoreError>;

    /// Per-user engagement grouping with store-side level classification.
    async fn engagement_groups(&self) -> Result<Vec<EngagementGroup>, StoreError>;
}

/// The full store surface handlers depend on, injected as one handle so
/// tests can substitute a fake in a single place.
#[async_trait]
pub trait Store: SocialStore + AnalyticsStore {
    /// Cheap connectivity probe for health reporting. Must not panic on a
    /// down store; the failure is reported, not raised.
    async fn ping(&self) -> Result<(), StoreError>;
}
