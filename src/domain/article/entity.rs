// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};

/// A stored article. Only the repository hands these out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub created_at: DateTime<Utc>,
}

/// An article that has been validated but not yet persisted; storage assigns
/// the id and creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: ArticleTitle,
}

impl NewArticle {
    pub fn new(raw_title: impl AsRef<str>) -> DomainResult<Self> {
        Ok(Self {
            title: ArticleTitle::new(raw_title)?,
        })
    }

    pub fn title(&self) -> &ArticleTitle {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::MAX_TITLE_LENGTH;
    use crate::domain::errors::DomainError;

    #[test]
    fn new_article_trims_title() {
        let article = NewArticle::new("  Hello  ").unwrap();
        assert_eq!(article.title().as_str(), "Hello");
    }

    #[test]
    fn new_article_rejects_blank_title() {
        assert!(matches!(
            NewArticle::new("   "),
            Err(DomainError::InvalidTitle)
        ));
    }

    #[test]
    fn new_article_rejects_long_title() {
        let raw = "a".repeat(MAX_TITLE_LENGTH + 1);
        assert!(matches!(
            NewArticle::new(raw),
            Err(DomainError::TitleTooLong)
        ));
    }
}
