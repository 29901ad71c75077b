//! News bulletin entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use evacnet_core::types::NewsId;

use crate::validation::not_blank;

/// A disaster or evacuation bulletin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct News {
    /// Unique bulletin identifier.
    pub news_id: NewsId,
    /// Author of the bulletin. Not checked against the `users` table.
    pub author_id: String,
    /// Link to the cover image.
    pub cover_link: String,
    /// Headline.
    pub title: String,
    /// Secondary headline.
    pub subtitle: String,
    /// Free-form location description.
    pub location: String,
    /// View counter.
    pub views: i64,
    /// When the bulletin was created.
    pub created_at: DateTime<Utc>,
    /// When the bulletin was last updated.
    pub updated_at: DateTime<Utc>,
}

impl News {
    /// Build a fresh record from a create payload.
    pub fn from_create(news_id: NewsId, data: CreateNews, now: DateTime<Utc>) -> Self {
        Self {
            news_id,
            author_id: data.author_id,
            cover_link: data.cover_link,
            title: data.title,
            subtitle: data.subtitle,
            location: data.location,
            views: data.views,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the mutable fields.
    pub fn apply(&mut self, data: UpdateNews, now: DateTime<Utc>) {
        self.cover_link = data.cover_link;
        self.title = data.title;
        self.subtitle = data.subtitle;
        self.location = data.location;
        self.views = data.views;
        self.updated_at = now;
    }
}

/// Data required to create a bulletin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateNews {
    /// Author identifier.
    #[validate(custom(function = "not_blank"))]
    pub author_id: String,
    /// Cover image link.
    #[validate(custom(function = "not_blank"))]
    pub cover_link: String,
    /// Headline.
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    /// Secondary headline.
    pub subtitle: String,
    /// Location description.
    #[validate(custom(function = "not_blank"))]
    pub location: String,
    /// Initial view count.
    #[validate(range(min = 0))]
    pub views: i64,
}

/// Replacement values for a bulletin's mutable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateNews {
    /// Cover image link.
    #[validate(custom(function = "not_blank"))]
    pub cover_link: String,
    /// Headline.
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    /// Secondary headline.
    pub subtitle: String,
    /// Location description.
    #[validate(custom(function = "not_blank"))]
    pub location: String,
    /// View count.
    #[validate(range(min = 0))]
    pub views: i64,
}
