//! User CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};

use evacnet_entity::user::User;

use crate::dto::request::UserRequest;
use crate::dto::response::{
    MessageResponse, UserCreatedResponse, UserListResponse, UserUpdatedResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<UserRequest>,
) -> ApiResult<Json<UserCreatedResponse>> {
    let user = state.user_service.create(req.into()).await?;
    Ok(Json(UserCreatedResponse {
        message: "User added successfully".to_string(),
        user_id: user.user_id,
    }))
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = state.user_service.list().await?;
    Ok(Json(UserListResponse { users }))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.user_service.get(&id).await?))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UserRequest>,
) -> ApiResult<Json<UserUpdatedResponse>> {
    let user = state.user_service.update(&id, req.into()).await?;
    Ok(Json(UserUpdatedResponse {
        message: "User updated successfully".to_string(),
        user,
    }))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let message = state.user_service.delete(&id).await?;
    Ok(Json(MessageResponse { message }))
}
