// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("title is required")]
    InvalidTitle,
    #[error("title must be at most {max} characters", max = crate::domain::article::MAX_TITLE_LENGTH)]
    TitleTooLong,
    #[error("id must be a positive integer")]
    InvalidId,
    #[error("article not found")]
    ArticleNotFound,
    #[error("{operation}: {source}")]
    Persistence {
        operation: String,
        #[source]
        source: BoxError,
    },
    #[error("{operation}: deadline exceeded")]
    DeadlineExceeded { operation: String },
}

impl DomainError {
    pub fn persistence(operation: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Persistence {
            operation: operation.into(),
            source: source.into(),
        }
    }

    /// Validation and not-found errors are safe to show to the caller;
    /// everything else is an infrastructure failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTitle | Self::TitleTooLong | Self::InvalidId | Self::ArticleNotFound
        )
    }
}
