//! In-memory user repository.

use async_trait::async_trait;
use chrono::Utc;

use evacnet_core::result::AppResult;
use evacnet_core::traits::Repository;
use evacnet_core::types::UserId;
use evacnet_entity::user::{CreateUser, UpdateUser, User};

use super::table::MemoryTable;

/// User repository backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    table: MemoryTable<UserId, User>,
}

impl MemoryUserRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<UserId, User, CreateUser, UpdateUser> for MemoryUserRepository {
    async fn create(&self, data: CreateUser) -> AppResult<User> {
        let user = User::from_create(UserId::generate(), data, Utc::now());
        self.table.insert(user.user_id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.table.get(id))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.table.newest_first())
    }

    async fn update(&self, id: &UserId, data: UpdateUser) -> AppResult<Option<User>> {
        Ok(self.table.modify(id, |user| user.apply(data, Utc::now())))
    }

    async fn delete(&self, id: &UserId) -> AppResult<bool> {
        Ok(self.table.remove(id))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.table.len() as u64)
    }
}
