use crate::application::{ApplicationResult, error::ApplicationError, ports::health::HealthCheck};
use async_trait::async_trait;
use sqlx::PgPool;

/// Pings PostgreSQL with a trivial query.
#[derive(Clone)]
pub struct PostgresHealthCheck {
    pool: PgPool,
}

impl PostgresHealthCheck {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheck for PostgresHealthCheck {
    async fn check(&self) -> ApplicationResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}
