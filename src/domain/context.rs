// src/domain/context.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::future::Future;
use std::time::{Duration, Instant};

/// Deadline carried through every call made on behalf of one request.
///
/// A context can only be tightened: deriving a child with a shorter timeout
/// moves the deadline earlier, a longer one leaves it untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context without any deadline.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().tighten(timeout)
    }

    #[must_use]
    pub fn tighten(self, timeout: Duration) -> Self {
        let Some(candidate) = Instant::now().checked_add(timeout) else {
            return self;
        };
        let deadline = match self.deadline {
            Some(current) if current <= candidate => current,
            _ => candidate,
        };
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_expired(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| deadline <= Instant::now())
    }

    /// Run `fut` under this context tightened by `ceiling`.
    ///
    /// The future is never polled when the context has already expired, and
    /// it is dropped as soon as the deadline passes.
    pub async fn bound<T, F>(&self, ceiling: Duration, operation: &str, fut: F) -> DomainResult<T>
    where
        F: Future<Output = DomainResult<T>>,
    {
        let scoped = self.tighten(ceiling);
        let expired = || DomainError::DeadlineExceeded {
            operation: operation.to_owned(),
        };

        if scoped.is_expired() {
            return Err(expired());
        }

        match scoped.deadline {
            Some(deadline) => {
                tokio::time::timeout_at(tokio::time::Instant::from_std(deadline), fut)
                    .await
                    .map_err(|_| expired())?
            }
            None => fut.await,
        }
    }
}
