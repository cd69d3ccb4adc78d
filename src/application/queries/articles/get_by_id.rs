use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{article::ArticleId, context::RequestContext},
};

#[derive(Debug, Clone, Copy)]
pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        ctx: &RequestContext,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        // Non-positive ids never reach the repository.
        let id = ArticleId::new(query.id)?;
        let article = self.repo.get_by_id(ctx, id).await?;
        Ok(article.into())
    }
}
