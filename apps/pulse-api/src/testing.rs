//! Test doubles shared by the handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use pulse_core::StoreError;
use pulse_core::domain::{
    ActivityEntry, Comment, EngagementGroup, EngagementStats, Like, LikeKey, NewComment, NewPost,
    NewUser, OverallStats, Post, PostWithAuthor, RankedUser, TopPost, User, UserEngagement,
};
use pulse_core::ports::{AnalyticsStore, SocialStore, Store};

// Fixed timestamp so body assertions stay deterministic.
fn sample_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn sample_user(id: i32) -> User {
    User {
        id,
        username: "ada".to_owned(),
        email: "ada@pulse.dev".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        created_at: sample_time(),
        updated_at: sample_time(),
    }
}

fn sample_post(id: i32) -> Post {
    Post {
        id,
        user_id: 1,
        content: "hello world".to_owned(),
        like_count: 0,
        comment_count: 0,
        engagement_score: 0.0,
        created_at: sample_time(),
    }
}

fn sample_top_post(rank: i64) -> TopPost {
    TopPost {
        post_id: rank as i32,
        username: "ada".to_owned(),
        content: "hello world".to_owned(),
        like_count: 4,
        comment_count: 2,
        engagement_score: 8.0,
        rank,
    }
}

/// Programmable store double.
///
/// `fail_*` fields force the matching operation to fail with the given
/// error, `missing_*` flags simulate an absent row, and the recorder fields
/// capture what the handlers actually passed down.
#[derive(Default)]
pub struct FakeStore {
    pub fail_ping: Option<StoreError>,
    pub fail_create_user: Option<StoreError>,
    pub fail_create_post: Option<StoreError>,
    pub fail_create_like: Option<StoreError>,
    pub fail_create_comment: Option<StoreError>,
    pub fail_user_summary: Option<StoreError>,
    pub fail_refresh: Option<StoreError>,
    pub missing_user: bool,
    pub missing_like: bool,
    pub last_limit: Mutex<Option<i64>>,
    pub last_query: Mutex<Option<String>>,
}

fn fail(slot: &Option<StoreError>) -> Result<(), StoreError> {
    match slot {
        Some(err) => Err(err.clone()),
        None => Ok(()),
    }
}

#[async_trait]
impl SocialStore for FakeStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        fail(&self.fail_create_user)?;
        Ok(User {
            id: 1,
            username: new_user.username,
            email: new_user.email,
            full_name: new_user.full_name,
            created_at: sample_time(),
            updated_at: sample_time(),
        })
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(vec![sample_user(1), sample_user(2)])
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>, StoreError> {
        if self.missing_user {
            return Ok(None);
        }
        Ok(Some(sample_user(id)))
    }

    async fn update_user(&self, id: i32, update: NewUser) -> Result<User, StoreError> {
        if self.missing_user {
            return Err(StoreError::NotFound);
        }
        Ok(User {
            id,
            username: update.username,
            email: update.email,
            full_name: update.full_name,
            created_at: sample_time(),
            updated_at: sample_time(),
        })
    }

    async fn delete_user(&self, _id: i32) -> Result<(), StoreError> {
        if self.missing_user {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn create_post(&self, new_post: NewPost) -> Result<Post, StoreError> {
        fail(&self.fail_create_post)?;
        Ok(Post {
            id: 10,
            user_id: new_post.user_id,
            content: new_post.content,
            like_count: 0,
            comment_count: 0,
            engagement_score: 0.0,
            created_at: sample_time(),
        })
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        Ok(vec![sample_post(10), sample_post(11)])
    }

    async fn create_like(&self, like: LikeKey) -> Result<Like, StoreError> {
        fail(&self.fail_create_like)?;
        Ok(Like {
            id: 5,
            post_id: like.post_id,
            user_id: like.user_id,
            created_at: sample_time(),
        })
    }

    async fn remove_like(&self, _like: LikeKey) -> Result<(), StoreError> {
        if self.missing_like {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn create_comment(&self, new_comment: NewComment) -> Result<Comment, StoreError> {
        fail(&self.fail_create_comment)?;
        Ok(Comment {
            id: 21,
            post_id: new_comment.post_id,
            user_id: new_comment.user_id,
            content: new_comment.content,
            created_at: sample_time(),
        })
    }
}

#[async_trait]
impl AnalyticsStore for FakeStore {
    async fn top_posts(&self, limit: i64) -> Result<Vec<TopPost>, StoreError> {
        *self.last_limit.lock().unwrap() = Some(limit);
        Ok(vec![sample_top_post(1), sample_top_post(2)])
    }

    async fn export_top_posts(&self) -> Result<Vec<TopPost>, StoreError> {
        Ok(vec![sample_top_post(1), sample_top_post(2)])
    }

    async fn user_summary(&self) -> Result<Vec<UserEngagement>, StoreError> {
        fail(&self.fail_user_summary)?;
        Ok(vec![UserEngagement {
            user_id: 1,
            username: "ada".to_owned(),
            total_posts: 3,
            total_likes_received: 9,
            total_comments_received: 4,
        }])
    }

    async fn engagement_stats(&self) -> Result<EngagementStats, StoreError> {
        Ok(EngagementStats {
            overall_stats: OverallStats {
                total_posts: 3,
                total_likes: Some(9),
                total_comments: Some(4),
                avg_engagement: Some(2.5),
                max_engagement: Some(8.0),
            },
            top_engaged_users: vec![RankedUser {
                username: "ada".to_owned(),
                total_likes_received: 9,
                rank: 1,
            }],
        })
    }

    async fn union_activities(&self) -> Result<Vec<ActivityEntry>, StoreError> {
        Ok(vec![ActivityEntry {
            activity_type: "POST".to_owned(),
            username: "ada".to_owned(),
            content: "hello world".to_owned(),
            activity_date: sample_time(),
        }])
    }

    async fn search_posts(&self, term: &str) -> Result<Vec<PostWithAuthor>, StoreError> {
        *self.last_query.lock().unwrap() = Some(term.to_owned());
        Ok(vec![PostWithAuthor {
            id: 10,
            user_id: 1,
            content: "hello world".to_owned(),
            like_count: 4,
            comment_count: 2,
            engagement_score: 8.0,
            created_at: sample_time(),
            username: "ada".to_owned(),
        }])
    }

    async fn refresh_materialized(&self) -> Result<(), StoreError> {
        fail(&self.fail_refresh)
    }

    async fn engagement_groups(&self) -> Result<Vec<EngagementGroup>, StoreError> {
        Ok(vec![EngagementGroup {
            username: "ada".to_owned(),
            post_count: 3,
            avg_engagement: 2.5,
            total_likes: 9,
            engagement_level: "High".to_owned(),
        }])
    }
}

#[async_trait]
impl Store for FakeStore {
    async fn ping(&self) -> Result<(), StoreError> {
        fail(&self.fail_ping)
    }
}

/// Builds an in-process service wired exactly like the production app:
/// same routes, same extractor configs, with only the store swapped.
macro_rules! init_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(crate::state::AppState::new(
                    $store,
                )))
                .app_data(crate::middleware::error::json_config())
                .app_data(crate::middleware::error::query_config())
                .app_data(crate::middleware::error::path_config())
                .configure(crate::handlers::configure_routes),
        )
        .await
    };
}
pub(crate) use init_app;
