//! In-memory news repository.

use async_trait::async_trait;
use chrono::Utc;

use evacnet_core::result::AppResult;
use evacnet_core::traits::Repository;
use evacnet_core::types::NewsId;
use evacnet_entity::news::{CreateNews, News, UpdateNews};

use super::table::MemoryTable;

/// News repository backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryNewsRepository {
    table: MemoryTable<NewsId, News>,
}

impl MemoryNewsRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<NewsId, News, CreateNews, UpdateNews> for MemoryNewsRepository {
    async fn create(&self, data: CreateNews) -> AppResult<News> {
        let news = News::from_create(NewsId::generate(), data, Utc::now());
        self.table.insert(news.news_id.clone(), news.clone());
        Ok(news)
    }

    async fn find_by_id(&self, id: &NewsId) -> AppResult<Option<News>> {
        Ok(self.table.get(id))
    }

    async fn find_all(&self) -> AppResult<Vec<News>> {
        Ok(self.table.newest_first())
    }

    async fn update(&self, id: &NewsId, data: UpdateNews) -> AppResult<Option<News>> {
        Ok(self.table.modify(id, |news| news.apply(data, Utc::now())))
    }

    async fn delete(&self, id: &NewsId) -> AppResult<bool> {
        Ok(self.table.remove(id))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.table.len() as u64)
    }
}
