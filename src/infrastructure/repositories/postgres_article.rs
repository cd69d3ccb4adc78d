// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{Article, ArticleId, ArticleRepository, ArticleTitle, NewArticle};
use crate::domain::context::RequestContext;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::time::Duration;

/// Ceiling for a single round-trip, applied on top of the caller's deadline.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            query_timeout: QUERY_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = |err: DomainError| {
            DomainError::persistence(format!("decode article row {id}"), err)
        };

        Ok(Article {
            id: ArticleId::new(row.id).map_err(corrupt)?,
            title: ArticleTitle::new(row.title).map_err(corrupt)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn save(&self, ctx: &RequestContext, article: NewArticle) -> DomainResult<Article> {
        const OPERATION: &str = "create article";

        let row = ctx
            .bound(self.query_timeout, OPERATION, async {
                sqlx::query_as::<_, ArticleRow>(
                    "INSERT INTO articles (title)
                     VALUES ($1)
                     RETURNING id, title, created_at",
                )
                .bind(article.title().as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|err| map_sqlx(OPERATION, err))
            })
            .await?;

        Article::try_from(row)
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: ArticleId) -> DomainResult<Article> {
        let operation = format!("get article by id {id}");

        let row = ctx
            .bound(self.query_timeout, &operation, async {
                sqlx::query_as::<_, ArticleRow>(
                    "SELECT id, title, created_at FROM articles WHERE id = $1",
                )
                .bind(i64::from(id))
                .fetch_optional(&self.pool)
                .await
                .map_err(|err| map_sqlx(operation.as_str(), err))
            })
            .await?;

        row.ok_or(DomainError::ArticleNotFound)
            .and_then(Article::try_from)
    }
}
