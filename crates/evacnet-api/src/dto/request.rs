//! Request DTOs.
//!
//! Field rules are enforced by the services on the payloads these convert
//! into.

use serde::{Deserialize, Serialize};

use evacnet_entity::news::{CreateNews, UpdateNews};
use evacnet_entity::user::{CreateUser, UpdateUser};

/// `POST /news` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNewsRequest {
    /// Author identifier.
    pub author_id: String,
    /// Cover image link.
    pub cover_link: String,
    /// Headline.
    pub title: String,
    /// Secondary headline.
    pub subtitle: String,
    /// Location description.
    pub location: String,
    /// Initial view count, 0 when omitted.
    #[serde(default)]
    pub views: i64,
}

impl From<CreateNewsRequest> for CreateNews {
    fn from(req: CreateNewsRequest) -> Self {
        Self {
            author_id: req.author_id,
            cover_link: req.cover_link,
            title: req.title,
            subtitle: req.subtitle,
            location: req.location,
            views: req.views,
        }
    }
}

/// `PUT /news/{id}` body. Every mutable field is replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNewsRequest {
    /// Cover image link.
    pub cover_link: String,
    /// Headline.
    pub title: String,
    /// Secondary headline.
    pub subtitle: String,
    /// Location description.
    pub location: String,
    /// View count.
    pub views: i64,
}

impl From<UpdateNewsRequest> for UpdateNews {
    fn from(req: UpdateNewsRequest) -> Self {
        Self {
            cover_link: req.cover_link,
            title: req.title,
            subtitle: req.subtitle,
            location: req.location,
            views: req.views,
        }
    }
}

/// `POST /users` and `PUT /users/{id}` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRequest {
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
}

impl From<UserRequest> for CreateUser {
    fn from(req: UserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
        }
    }
}

impl From<UserRequest> for UpdateUser {
    fn from(req: UserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
        }
    }
}

/// `GET /route_map` query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteMapQuery {
    /// Route origin as `lat,lon`.
    pub start: Option<String>,
    /// Route destination as `lat,lon`.
    pub end: Option<String>,
}
