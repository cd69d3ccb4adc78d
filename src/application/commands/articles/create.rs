// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{article::NewArticle, context::RequestContext},
};

/// Raw input for the create use case; the title is normalized by the domain.
#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub title: String,
}

impl CreateArticleCommand {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        ctx: &RequestContext,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let new_article = NewArticle::new(&command.title)?;
        let created = self.repo.save(ctx, new_article).await?;
        tracing::debug!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
