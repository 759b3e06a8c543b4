//! Like handlers. The same body shape addresses a like for both creation
//! and removal.

use actix_web::{HttpResponse, web};

use pulse_core::StoreError;
use pulse_core::domain::{Like, LikeKey};
use pulse_shared::dto::{LikeCreate, LikeCreated, LikeResponse, MessageResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn like_response(like: Like) -> LikeResponse {
    LikeResponse {
        id: like.id,
        post_id: like.post_id,
        user_id: like.user_id,
        created_at: like.created_at,
    }
}

/// POST /likes/
///
/// Any store failure collapses into one generic detail; the raw constraint
/// text never reaches the client on this endpoint.
pub async fn create_like(
    state: web::Data<AppState>,
    body: web::Json<LikeCreate>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let like = state
        .store
        .create_like(LikeKey {
            post_id: req.post_id,
            user_id: req.user_id,
        })
        .await
        .map_err(|e| {
            tracing::warn!("Like rejected: {}", e);
            AppError::BadRequest("Already liked or invalid data".to_string())
        })?;

    Ok(HttpResponse::Ok().json(LikeCreated {
        message: "Post liked successfully".to_string(),
        like: like_response(like),
    }))
}

/// DELETE /likes/
pub async fn remove_like(
    state: web::Data<AppState>,
    body: web::Json<LikeCreate>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    state
        .store
        .remove_like(LikeKey {
            post_id: req.post_id,
            user_id: req.user_id,
        })
        .await
        .map_err(|e| match e {
            StoreError::NotFound => AppError::NotFound("Like not found".to_string()),
            other => AppError::BadRequest(other.to_string()),
        })?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Like removed successfully")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test};
    use serde_json::{Value, json};

    use pulse_core::StoreError;

    use crate::testing::{FakeStore, init_app};

    #[actix_web::test]
    async fn like_confirms_with_message_and_row() {
        let app = init_app!(Arc::new(FakeStore::default()));

        let req = test::TestRequest::post()
            .uri("/likes/")
            .set_json(json!({"post_id": 11, "user_id": 7}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Post liked successfully");
        assert_eq!(body["like"]["post_id"], 11);
        assert_eq!(body["like"]["user_id"], 7);
    }

    #[actix_web::test]
    async fn duplicate_like_gets_the_generic_detail_only() {
        let store = Arc::new(FakeStore {
            fail_create_like: Some(StoreError::Constraint(
                "duplicate key value violates unique constraint \"likes_post_id_user_id_key\""
                    .to_owned(),
            )),
            ..FakeStore::default()
        });
        let app = init_app!(store);

        let req = test::TestRequest::post()
            .uri("/likes/")
            .set_json(json!({"post_id": 11, "user_id": 7}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Already liked or invalid data");
        assert!(!body.to_string().contains("duplicate key"));
    }

    #[actix_web::test]
    async fn unlike_confirms() {
        let app = init_app!(Arc::new(FakeStore::default()));

        let req = test::TestRequest::delete()
            .uri("/likes/")
            .set_json(json!({"post_id": 11, "user_id": 7}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Like removed successfully");
    }

    #[actix_web::test]
    async fn unlike_missing_pair_is_404() {
        let store = Arc::new(FakeStore {
            missing_like: true,
            ..FakeStore::default()
        });
        let app = init_app!(store);

        let req = test::TestRequest::delete()
            .uri("/likes/")
            .set_json(json!({"post_id": 11, "user_id": 7}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Like not found");
    }
}
