//! Comment handler. Comments are create-only through this service.

use actix_web::{HttpResponse, web};

use pulse_core::domain::{Comment, NewComment};
use pulse_shared::dto::{CommentCreate, CommentCreated, CommentResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn comment_response(comment: Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id,
        post_id: comment.post_id,
        user_id: comment.user_id,
        content: comment.content,
        created_at: comment.created_at,
    }
}

/// POST /comments/
pub async fn create_comment(
    state: web::Data<AppState>,
    body: web::Json<CommentCreate>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let comment = state
        .store
        .create_comment(NewComment {
            post_id: req.post_id,
            user_id: req.user_id,
            content: req.content,
        })
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(HttpResponse::Ok().json(CommentCreated {
        message: "Comment added successfully".to_string(),
        comment: comment_response(comment),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test};
    use serde_json::{Value, json};

    use pulse_core::StoreError;

    use crate::testing::{FakeStore, init_app};

    #[actix_web::test]
    async fn comment_confirms_with_message_and_row() {
        let app = init_app!(Arc::new(FakeStore::default()));

        let req = test::TestRequest::post()
            .uri("/comments/")
            .set_json(json!({"post_id": 11, "user_id": 7, "content": "nice one"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Comment added successfully");
        assert_eq!(body["comment"]["content"], "nice one");
        assert_eq!(body["comment"]["post_id"], 11);
    }

    #[actix_web::test]
    async fn store_failure_is_a_client_error_with_store_text() {
        let store = Arc::new(FakeStore {
            fail_create_comment: Some(StoreError::Constraint(
                "insert or update on table \"comments\" violates foreign key constraint \
                 \"comments_post_id_fkey\""
                    .to_owned(),
            )),
            ..FakeStore::default()
        });
        let app = init_app!(store);

        let req = test::TestRequest::post()
            .uri("/comments/")
            .set_json(json!({"post_id": 999, "user_id": 7, "content": "orphan"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(
            body["detail"]
                .as_str()
                .unwrap()
                .contains("comments_post_id_fkey")
        );
    }
}
