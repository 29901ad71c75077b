//! Response DTOs.

use serde::{Deserialize, Serialize};

use evacnet_core::types::{NewsId, UserId};
use evacnet_entity::news::News;
use evacnet_entity::user::User;

/// A bare confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// `POST /news` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsCreatedResponse {
    /// Message.
    pub message: String,
    /// Id of the stored bulletin.
    pub news_id: NewsId,
}

/// `GET /news` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsListResponse {
    /// Bulletins, newest first.
    pub news: Vec<News>,
}

/// `PUT /news/{id}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsUpdatedResponse {
    /// Message.
    pub message: String,
    /// The bulletin after the update.
    pub news: News,
}

/// `POST /users` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreatedResponse {
    /// Message.
    pub message: String,
    /// Id of the new user.
    pub user_id: UserId,
}

/// `GET /users` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    /// Users, newest first.
    pub users: Vec<User>,
}

/// `PUT /users/{id}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdatedResponse {
    /// Message.
    pub message: String,
    /// The user after the update.
    pub user: User,
}

/// `GET /health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the record store is unreachable.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Record store state.
    pub database: String,
    /// Open relay connections.
    pub ws_connections: usize,
}
