//! News bulletin CRUD.

use tracing::info;

use evacnet_core::error::AppError;
use evacnet_core::types::NewsId;
use evacnet_database::NewsRepo;
use evacnet_entity::news::{CreateNews, News, UpdateNews};

use crate::validation::validate;

/// Creates, reads, updates, and deletes news bulletins.
#[derive(Clone)]
pub struct NewsService {
    /// News repository.
    repo: NewsRepo,
}

impl std::fmt::Debug for NewsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsService").finish()
    }
}

impl NewsService {
    /// Creates a new news service.
    pub fn new(repo: NewsRepo) -> Self {
        Self { repo }
    }

    /// Stores a new bulletin.
    pub async fn create(&self, data: CreateNews) -> Result<News, AppError> {
        validate("news", &data)?;
        let news = self.repo.create(data).await?;
        info!(news_id = %news.news_id, author_id = %news.author_id, "News created");
        Ok(news)
    }

    /// All bulletins, newest first.
    pub async fn list(&self) -> Result<Vec<News>, AppError> {
        self.repo.find_all().await
    }

    /// Gets one bulletin.
    pub async fn get(&self, news_id: &str) -> Result<News, AppError> {
        let id = parse(news_id)?;
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| not_found(news_id))
    }

    /// Replaces a bulletin's mutable fields.
    pub async fn update(&self, news_id: &str, data: UpdateNews) -> Result<News, AppError> {
        let id = parse(news_id)?;
        validate("news", &data)?;

        let news = self
            .repo
            .update(&id, data)
            .await?
            .ok_or_else(|| not_found(news_id))?;
        info!(news_id = %id, "News updated");
        Ok(news)
    }

    /// Deletes a bulletin and returns a confirmation message.
    pub async fn delete(&self, news_id: &str) -> Result<String, AppError> {
        let id = parse(news_id)?;
        if !self.repo.delete(&id).await? {
            return Err(not_found(news_id));
        }
        info!(news_id = %id, "News deleted");
        Ok(format!("News with news_id {news_id} successfully deleted."))
    }

    /// Number of stored bulletins.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.repo.count().await
    }
}

/// Malformed ids are reported like absent ones.
fn parse(news_id: &str) -> Result<NewsId, AppError> {
    NewsId::parse(news_id).map_err(|_| not_found(news_id))
}

fn not_found(news_id: &str) -> AppError {
    AppError::not_found(format!("News with news_id {news_id} not found."))
}
