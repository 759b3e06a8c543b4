//! User CRUD handlers.

use actix_web::{HttpResponse, web};

use pulse_core::StoreError;
use pulse_core::domain::{NewUser, User};
use pulse_shared::dto::{MessageResponse, UserCreate, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        full_name: user.full_name,
        created_at: user.created_at,
    }
}

fn new_user(req: UserCreate) -> NewUser {
    NewUser {
        username: req.username,
        email: req.email,
        full_name: req.full_name,
    }
}

/// POST /users/
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<UserCreate>,
) -> AppResult<HttpResponse> {
    let user = state
        .store
        .create_user(new_user(body.into_inner()))
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(HttpResponse::Ok().json(user_response(user)))
}

/// GET /users/
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.store.list_users().await?;
    let body: Vec<UserResponse> = users.into_iter().map(user_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /users/{user_id}
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = state
        .store
        .get_user(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(user_response(user)))
}

/// PUT /users/{user_id}
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UserCreate>,
) -> AppResult<HttpResponse> {
    let updated = state
        .store
        .update_user(path.into_inner(), new_user(body.into_inner()))
        .await
        .map_err(|e| match e {
            StoreError::NotFound => AppError::NotFound("User not found".to_string()),
            other => AppError::BadRequest(other.to_string()),
        })?;

    Ok(HttpResponse::Ok().json(user_response(updated)))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state
        .store
        .delete_user(path.into_inner())
        .await
        .map_err(|e| match e {
            StoreError::NotFound => AppError::NotFound("User not found".to_string()),
            other => AppError::BadRequest(other.to_string()),
        })?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted successfully")))
}
