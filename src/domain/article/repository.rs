use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::context::RequestContext;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Persistence operations the article use cases rely on.
///
/// Implementations must honour the deadline carried by `ctx` and return
/// [`DomainError::DeadlineExceeded`](crate::domain::errors::DomainError::DeadlineExceeded)
/// instead of a partial result once it passes.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn save(&self, ctx: &RequestContext, article: NewArticle) -> DomainResult<Article>;
    async fn get_by_id(&self, ctx: &RequestContext, id: ArticleId) -> DomainResult<Article>;
}
