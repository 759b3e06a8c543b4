//! Post handlers. Posts are create-and-list only; edits and deletes are not
//! part of the surface.

use actix_web::{HttpResponse, web};

use pulse_core::domain::{NewPost, Post};
use pulse_shared::dto::{PostCreate, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        user_id: post.user_id,
        content: post.content,
        like_count: post.like_count,
        comment_count: post.comment_count,
        engagement_score: post.engagement_score,
    }
}

/// POST /posts/
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostCreate>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .store
        .create_post(NewPost {
            user_id: req.user_id,
            content: req.content,
        })
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// GET /posts/
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.store.list_posts().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test};
    use serde_json::{Value, json};

    use pulse_core::StoreError;

    use crate::testing::{FakeStore, init_app};

    #[actix_web::test]
    async fn create_post_returns_the_stored_row() {
        let app = init_app!(Arc::new(FakeStore::default()));

        let req = test::TestRequest::post()
            .uri("/posts/")
            .set_json(json!({"user_id": 7, "content": "hello world"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], 10);
        assert_eq!(body["user_id"], 7);
        assert_eq!(body["like_count"], 0);
        assert_eq!(body["engagement_score"], 0.0);
    }

    #[actix_web::test]
    async fn unknown_author_is_a_client_error_with_store_text() {
        let store = Arc::new(FakeStore {
            fail_create_post: Some(StoreError::Constraint(
                "insert or update on table \"posts\" violates foreign key constraint \
                 \"posts_user_id_fkey\""
                    .to_owned(),
            )),
            ..FakeStore::default()
        });
        let app = init_app!(store);

        let req = test::TestRequest::post()
            .uri("/posts/")
            .set_json(json!({"user_id": 999, "content": "orphan"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(
            body["detail"]
                .as_str()
                .unwrap()
                .contains("posts_user_id_fkey")
        );
    }

    #[actix_web::test]
    async fn list_posts_maps_every_row() {
        let app = init_app!(Arc::new(FakeStore::default()));

        let req = test::TestRequest::get().uri("/posts/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let posts = body.as_array().unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts[0].get("created_at").is_none());
    }
}
