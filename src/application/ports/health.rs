use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Liveness probe for whatever backing store the service is wired to.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn check(&self) -> ApplicationResult<()>;
}
