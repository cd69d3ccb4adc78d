use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Upper bound for a title, counted in Unicode scalar values.
pub const MAX_TITLE_LENGTH: usize = 140;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::InvalidId)
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A trimmed, non-empty title of at most [`MAX_TITLE_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let normalized = value.as_ref().trim();
        if normalized.is_empty() {
            return Err(DomainError::InvalidTitle);
        }
        if normalized.chars().count() > MAX_TITLE_LENGTH {
            return Err(DomainError::TitleTooLong);
        }
        Ok(Self(normalized.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
