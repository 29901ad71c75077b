//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use evacnet_core::types::UserId;

use crate::validation::not_blank;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub user_id: UserId,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh record from a create payload.
    pub fn from_create(user_id: UserId, data: CreateUser, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            username: data.username,
            email: data.email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the mutable fields.
    pub fn apply(&mut self, data: UpdateUser, now: DateTime<Utc>) {
        self.username = data.username;
        self.email = data.email;
        self.updated_at = now;
    }
}

/// Data required to create a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateUser {
    /// Login name.
    #[validate(custom(function = "not_blank"), length(max = 64))]
    pub username: String,
    /// Email address.
    #[validate(email)]
    pub email: String,
}

/// Replacement values for a user's mutable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateUser {
    /// Login name.
    #[validate(custom(function = "not_blank"), length(max = 64))]
    pub username: String,
    /// Email address.
    #[validate(email)]
    pub email: String,
}
