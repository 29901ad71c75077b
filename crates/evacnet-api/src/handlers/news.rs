//! News bulletin CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};

use evacnet_entity::news::News;

use crate::dto::request::{CreateNewsRequest, UpdateNewsRequest};
use crate::dto::response::{
    MessageResponse, NewsCreatedResponse, NewsListResponse, NewsUpdatedResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /news
pub async fn create_news(
    State(state): State<AppState>,
    Json(req): Json<CreateNewsRequest>,
) -> ApiResult<Json<NewsCreatedResponse>> {
    let news = state.news_service.create(req.into()).await?;
    Ok(Json(NewsCreatedResponse {
        message: "News added successfully".to_string(),
        news_id: news.news_id,
    }))
}

/// GET /news
pub async fn list_news(State(state): State<AppState>) -> ApiResult<Json<NewsListResponse>> {
    let news = state.news_service.list().await?;
    Ok(Json(NewsListResponse { news }))
}

/// GET /news/{id}
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<News>> {
    Ok(Json(state.news_service.get(&id).await?))
}

/// PUT /news/{id}
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateNewsRequest>,
) -> ApiResult<Json<NewsUpdatedResponse>> {
    let news = state.news_service.update(&id, req.into()).await?;
    Ok(Json(NewsUpdatedResponse {
        message: "News updated successfully".to_string(),
        news,
    }))
}

/// DELETE /news/{id}
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let message = state.news_service.delete(&id).await?;
    Ok(Json(MessageResponse { message }))
}
