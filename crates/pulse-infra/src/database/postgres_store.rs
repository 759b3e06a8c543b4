//! PostgreSQL implementation of the social store.
//!
//! Every statement is a raw parameterized query. Mutations run inside an
//! explicit transaction and either commit or roll back as a unit; reads go
//! straight to the pool.

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseTransaction, DbBackend, DbConn, DbErr, Statement, TransactionTrait,
    Value,
};

use pulse_core::StoreError;
use pulse_core::domain::{Comment, Like, LikeKey, NewComment, NewPost, NewUser, Post, User};
use pulse_core::ports::{SocialStore, Store};

use super::row;

pub(crate) const INSERT_USER: &str = "INSERT INTO users (username, email, full_name) \
    VALUES ($1, $2, $3) \
    RETURNING id, username, email, full_name, created_at, updated_at";

pub(crate) const LIST_USERS: &str = "SELECT id, username, email, full_name, created_at, \
    updated_at FROM users ORDER BY created_at DESC";

pub(crate) const GET_USER: &str = "SELECT id, username, email, full_name, created_at, \
    updated_at FROM users WHERE id = $1";

pub(crate) const UPDATE_USER: &str = "UPDATE users SET username = $1, email = $2, \
    full_name = $3, updated_at = CURRENT_TIMESTAMP WHERE id = $4 \
    RETURNING id, username, email, full_name, created_at, updated_at";

pub(crate) const DELETE_USER: &str = "DELETE FROM users WHERE id = $1 RETURNING id";

pub(crate) const INSERT_POST: &str = "INSERT INTO posts (user_id, content) \
    VALUES ($1, $2) \
    RETURNING id, user_id, content, like_count, comment_count, engagement_score, created_at";

pub(crate) const LIST_POSTS: &str = "SELECT id, user_id, content, like_count, comment_count, \
    engagement_score, created_at FROM posts ORDER BY created_at DESC";

pub(crate) const INSERT_LIKE: &str = "INSERT INTO likes (post_id, user_id) \
    VALUES ($1, $2) \
    RETURNING id, post_id, user_id, created_at";

pub(crate) const DELETE_LIKE: &str =
    "DELETE FROM likes WHERE post_id = $1 AND user_id = $2 RETURNING id";

pub(crate) const INSERT_COMMENT: &str = "INSERT INTO comments (post_id, user_id, content) \
    VALUES ($1, $2, $3) \
    RETURNING id, post_id, user_id, content, created_at";

pub(crate) const PING: &str = "SELECT 1";

/// PostgreSQL-backed store over a pooled connection. Shared behind an `Arc`
/// at bootstrap; the connection is never cloned.
pub struct PostgresStore {
    pub(crate) db: DbConn,
}

impl PostgresStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

pub(crate) fn stmt<I>(sql: &str, values: I) -> Statement
where
    I: IntoIterator<Item = Value>,
{
    Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
}

/// Fold a driver error into the store taxonomy.
///
/// Constraint violations are recognized from the error text, which covers
/// unique and foreign key failures alike.
pub(crate) fn classify(err: DbErr) -> StoreError {
    match err {
        DbErr::Conn(e) => StoreError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => StoreError::Connection(e.to_string()),
        other => {
            let text = other.to_string();
            if text.contains("duplicate key")
                || text.contains("unique constraint")
                || text.contains("violates")
            {
                StoreError::Constraint(text)
            } else {
                StoreError::Query(text)
            }
        }
    }
}

/// Commit when the operation succeeded, roll back when it failed.
///
/// A rollback failure is logged; the operation's own error is the one
/// surfaced to the caller.
pub(crate) async fn commit_or_rollback<T>(
    txn: DatabaseTransaction,
    outcome: Result<T, StoreError>,
) -> Result<T, StoreError> {
    match outcome {
        Ok(value) => {
            txn.commit().await.map_err(classify)?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(err)
        }
    }
}

#[async_trait]
impl SocialStore for PostgresStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let txn = self.db.begin().await.map_err(classify)?;
        let outcome = insert_user(&txn, new_user).await;
        commit_or_rollback(txn, outcome).await
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let rows = self
            .db
            .query_all(stmt(LIST_USERS, []))
            .await
            .map_err(classify)?;
        rows.iter().map(row::user_from_row).collect()
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>, StoreError> {
        let found = self
            .db
            .query_one(stmt(GET_USER, [id.into()]))
            .await
            .map_err(classify)?;
        found.as_ref().map(row::user_from_row).transpose()
    }

    async fn update_user(&self, id: i32, update: NewUser) -> Result<User, StoreError> {
        let txn = self.db.begin().await.map_err(classify)?;
        let outcome = update_user_row(&txn, id, update).await;
        commit_or_rollback(txn, outcome).await
    }

    async fn delete_user(&self, id: i32) -> Result<(), StoreError> {
        let txn = self.db.begin().await.map_err(classify)?;
        let outcome = delete_user_row(&txn, id).await;
        commit_or_rollback(txn, outcome).await
    }

    async fn create_post(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let txn = self.db.begin().await.map_err(classify)?;
        let outcome = insert_post(&txn, new_post).await;
        commit_or_rollback(txn, outcome).await
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let rows = self
            .db
            .query_all(stmt(LIST_POSTS, []))
            .await
            .map_err(classify)?;
        rows.iter().map(row::post_from_row).collect()
    }

    async fn create_like(&self, like: LikeKey) -> Result<Like, StoreError> {
        let txn = self.db.begin().await.map_err(classify)?;
        let outcome = insert_like(&txn, like).await;
        commit_or_rollback(txn, outcome).await
    }

    async fn remove_like(&self, like: LikeKey) -> Result<(), StoreError> {
        let txn = self.db.begin().await.map_err(classify)?;
        let outcome = delete_like(&txn, like).await;
        commit_or_rollback(txn, outcome).await
    }

    async fn create_comment(&self, new_comment: NewComment) -> Result<Comment, StoreError> {
        let txn = self.db.begin().await.map_err(classify)?;
        let outcome = insert_comment(&txn, new_comment).await;
        commit_or_rollback(txn, outcome).await
    }
}

#[async_trait]
impl Store for PostgresStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.db.query_one(stmt(PING, [])).await.map_err(classify)?;
        Ok(())
    }
}

async fn insert_user(conn: &impl ConnectionTrait, new_user: NewUser) -> Result<User, StoreError> {
    let row = conn
        .query_one(stmt(
            INSERT_USER,
            [
                new_user.username.into(),
                new_user.email.into(),
                new_user.full_name.into(),
            ],
        ))
        .await
        .map_err(classify)?
        .ok_or_else(|| StoreError::Query("insert returned no row".into()))?;
    row::user_from_row(&row)
}

async fn update_user_row(
    conn: &impl ConnectionTrait,
    id: i32,
    update: NewUser,
) -> Result<User, StoreError> {
    let found = conn
        .query_one(stmt(
            UPDATE_USER,
            [
                update.username.into(),
                update.email.into(),
                update.full_name.into(),
                id.into(),
            ],
        ))
        .await
        .map_err(classify)?;
    match found {
        Some(row) => row::user_from_row(&row),
        None => Err(StoreError::NotFound),
    }
}

async fn delete_user_row(conn: &impl ConnectionTrait, id: i32) -> Result<(), StoreError> {
    let found = conn
        .query_one(stmt(DELETE_USER, [id.into()]))
        .await
        .map_err(classify)?;
    match found {
        Some(_) => Ok(()),
        None => Err(StoreError::NotFound),
    }
}

async fn insert_post(conn: &impl ConnectionTrait, new_post: NewPost) -> Result<Post, StoreError> {
    let row = conn
        .query_one(stmt(
            INSERT_POST,
            [new_post.user_id.into(), new_post.content.into()],
        ))
        .await
        .map_err(classify)?
        .ok_or_else(|| StoreError::Query("insert returned no row".into()))?;
    row::post_from_row(&row)
}

async fn insert_like(conn: &impl ConnectionTrait, like: LikeKey) -> Result<Like, StoreError> {
    let row = conn
        .query_one(stmt(
            INSERT_LIKE,
            [like.post_id.into(), like.user_id.into()],
        ))
        .await
        .map_err(classify)?
        .ok_or_else(|| StoreError::Query("insert returned no row".into()))?;
    row::like_from_row(&row)
}

async fn delete_like(conn: &impl ConnectionTrait, like: LikeKey) -> Result<(), StoreError> {
    let found = conn
        .query_one(stmt(
            DELETE_LIKE,
            [like.post_id.into(), like.user_id.into()],
        ))
        .await
        .map_err(classify)?;
    match found {
        Some(_) => Ok(()),
        None => Err(StoreError::NotFound),
    }
}

async fn insert_comment(
    conn: &impl ConnectionTrait,
    new_comment: NewComment,
) -> Result<Comment, StoreError> {
    let row = conn
        .query_one(stmt(
            INSERT_COMMENT,
            [
                new_comment.post_id.into(),
                new_comment.user_id.into(),
                new_comment.content.into(),
            ],
        ))
        .await
        .map_err(classify)?
        .ok_or_else(|| StoreError::Query("insert returned no row".into()))?;
    row::comment_from_row(&row)
}
