// tests/support/mocks.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use articles_api::application::{
    ApplicationResult, error::ApplicationError, ports::health::HealthCheck,
};
use articles_api::domain::article::{Article, ArticleId, ArticleRepository, NewArticle};
use articles_api::domain::context::RequestContext;
use articles_api::domain::errors::{DomainError, DomainResult};

/* -------------------------------- ArticleRepository -------------------------------- */

/// 呼び出し回数を記録するインメモリ記事リポジトリ
#[derive(Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
    save_calls: AtomicUsize,
    get_calls: AtomicUsize,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn save(&self, ctx: &RequestContext, article: NewArticle) -> DomainResult<Article> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if ctx.is_expired() {
            return Err(DomainError::DeadlineExceeded {
                operation: "create article".into(),
            });
        }

        let mut articles = self.articles.lock().unwrap();
        let next_id = i64::try_from(articles.len()).unwrap() + 1;
        let stored = Article {
            id: ArticleId::new(next_id)?,
            title: article.title,
            created_at: Utc::now(),
        };
        articles.push(stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: ArticleId) -> DomainResult<Article> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if ctx.is_expired() {
            return Err(DomainError::DeadlineExceeded {
                operation: format!("get article by id {id}"),
            });
        }

        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.id == id)
            .cloned()
            .ok_or(DomainError::ArticleNotFound)
    }
}

pub const FAILING_REPO_DETAIL: &str = "connection refused by db-primary-7";

/// 常に永続化エラーを返す記事リポジトリ
#[derive(Default)]
pub struct FailingArticleRepo {
    calls: AtomicUsize,
}

impl FailingArticleRepo {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleRepository for FailingArticleRepo {
    async fn save(&self, _ctx: &RequestContext, _article: NewArticle) -> DomainResult<Article> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::persistence("create article", FAILING_REPO_DETAIL))
    }

    async fn get_by_id(&self, _ctx: &RequestContext, id: ArticleId) -> DomainResult<Article> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::persistence(
            format!("get article by id {id}"),
            FAILING_REPO_DETAIL,
        ))
    }
}

/// 応答しないストアを再現するリポジトリ（期限切れでのみ終了する）
pub struct StalledArticleRepo;

#[async_trait]
impl ArticleRepository for StalledArticleRepo {
    async fn save(&self, ctx: &RequestContext, _article: NewArticle) -> DomainResult<Article> {
        ctx.bound(
            Duration::from_secs(3),
            "create article",
            std::future::pending::<DomainResult<Article>>(),
        )
        .await
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: ArticleId) -> DomainResult<Article> {
        let operation = format!("get article by id {id}");
        ctx.bound(
            Duration::from_secs(3),
            &operation,
            std::future::pending::<DomainResult<Article>>(),
        )
        .await
    }
}

/* -------------------------------- HealthCheck -------------------------------- */

/// 固定結果を返すヘルスチェック
pub struct StaticHealthCheck {
    failure: Option<String>,
}

impl StaticHealthCheck {
    pub fn healthy() -> Self {
        Self { failure: None }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl HealthCheck for StaticHealthCheck {
    async fn check(&self) -> ApplicationResult<()> {
        match &self.failure {
            Some(message) => Err(ApplicationError::infrastructure(message.clone())),
            None => Ok(()),
        }
    }
}

/// 応答しないヘルスチェック
pub struct HangingHealthCheck;

#[async_trait]
impl HealthCheck for HangingHealthCheck {
    async fn check(&self) -> ApplicationResult<()> {
        std::future::pending().await
    }
}
