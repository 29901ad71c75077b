//! User CRUD.

use tracing::info;

use evacnet_core::error::AppError;
use evacnet_core::types::UserId;
use evacnet_database::UserRepo;
use evacnet_entity::user::{CreateUser, UpdateUser, User};

use crate::validation::validate;

/// Handles user record management.
#[derive(Clone)]
pub struct UserService {
    /// User repository.
    repo: UserRepo,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repo: UserRepo) -> Self {
        Self { repo }
    }

    /// Registers a user.
    pub async fn create(&self, data: CreateUser) -> Result<User, AppError> {
        validate("user", &data)?;
        let user = self.repo.create(data).await?;
        info!(user_id = %user.user_id, username = %user.username, "User created");
        Ok(user)
    }

    /// All users, newest first.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.repo.find_all().await
    }

    /// Gets one user.
    pub async fn get(&self, user_id: &str) -> Result<User, AppError> {
        let id = parse(user_id)?;
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| not_found(user_id))
    }

    /// Replaces a user's mutable fields.
    pub async fn update(&self, user_id: &str, data: UpdateUser) -> Result<User, AppError> {
        let id = parse(user_id)?;
        validate("user", &data)?;

        let user = self
            .repo
            .update(&id, data)
            .await?
            .ok_or_else(|| not_found(user_id))?;
        info!(user_id = %id, "User updated");
        Ok(user)
    }

    /// Deletes a user and returns a confirmation message.
    pub async fn delete(&self, user_id: &str) -> Result<String, AppError> {
        let id = parse(user_id)?;
        if !self.repo.delete(&id).await? {
            return Err(not_found(user_id));
        }
        info!(user_id = %id, "User deleted");
        Ok(format!("User with user_id {user_id} successfully deleted."))
    }

    /// Number of registered users.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.repo.count().await
    }
}

/// A malformed id can never name a stored user.
fn parse(user_id: &str) -> Result<UserId, AppError> {
    UserId::parse(user_id).map_err(|_| not_found(user_id))
}

fn not_found(user_id: &str) -> AppError {
    AppError::not_found(format!("User with user_id {user_id} not found."))
}
