//! Generic record store trait for the `news` and `users` tables.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// Each record kind plugs in its own identifier, row type and
/// create/update payloads. Absence is reported through `Option`/`bool`
/// so that callers decide how a missing record surfaces.
#[async_trait]
pub trait Repository<Id, Entity, Create, Update>: Send + Sync + 'static
where
    Id: Send + Sync + 'static,
    Entity: Send + Sync + 'static,
    Create: Send + 'static,
    Update: Send + 'static,
{
    /// Insert a new record under a freshly generated identifier.
    async fn create(&self, data: Create) -> AppResult<Entity>;

    /// Find a record by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// List every record, newest first.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Overwrite the mutable fields of a record. `None` if absent.
    async fn update(&self, id: &Id, data: Update) -> AppResult<Option<Entity>>;

    /// Delete a record. Returns `true` if a row was removed.
    async fn delete(&self, id: &Id) -> AppResult<bool>;

    /// Count stored records.
    async fn count(&self) -> AppResult<u64>;
}
