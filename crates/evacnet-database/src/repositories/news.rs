//! News repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use evacnet_core::error::{AppError, ErrorKind};
use evacnet_core::result::AppResult;
use evacnet_core::traits::Repository;
use evacnet_core::types::NewsId;
use evacnet_entity::news::{CreateNews, News, UpdateNews};

/// Repository for the `news` table.
#[derive(Debug, Clone)]
pub struct NewsRepository {
    pool: PgPool,
}

impl NewsRepository {
    /// Create a new news repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<NewsId, News, CreateNews, UpdateNews> for NewsRepository {
    async fn create(&self, data: CreateNews) -> AppResult<News> {
        let news_id = NewsId::generate();

        sqlx::query_as::<_, News>(
            "INSERT INTO news (news_id, author_id, cover_link, title, subtitle, location, views, \
                               created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8) \
             RETURNING *",
        )
        .bind(&news_id)
        .bind(&data.author_id)
        .bind(&data.cover_link)
        .bind(&data.title)
        .bind(&data.subtitle)
        .bind(&data.location)
        .bind(data.views)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create news", e))
    }

    async fn find_by_id(&self, id: &NewsId) -> AppResult<Option<News>> {
        sqlx::query_as::<_, News>("SELECT * FROM news WHERE news_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find news by id", e))
    }

    async fn find_all(&self) -> AppResult<Vec<News>> {
        sqlx::query_as::<_, News>("SELECT * FROM news ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list news", e))
    }

    async fn update(&self, id: &NewsId, data: UpdateNews) -> AppResult<Option<News>> {
        sqlx::query_as::<_, News>(
            "UPDATE news SET cover_link = $2, title = $3, subtitle = $4, location = $5, \
                             views = $6, updated_at = NOW() \
             WHERE news_id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.cover_link)
        .bind(&data.title)
        .bind(&data.subtitle)
        .bind(&data.location)
        .bind(data.views)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update news", e))
    }

    async fn delete(&self, id: &NewsId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM news WHERE news_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete news", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count news", e))?;
        Ok(count as u64)
    }
}
