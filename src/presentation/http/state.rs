// src/presentation/http/state.rs
use crate::application::{ports::HealthCheckPort, services::ApplicationServices};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// `None` means the service runs without a backing store to probe.
    pub health_check: Option<Arc<HealthCheckPort>>,
    pub request_timeout: Duration,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>) -> Self {
        Self {
            services,
            health_check: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_health_check(mut self, health_check: Arc<HealthCheckPort>) -> Self {
        self.health_check = Some(health_check);
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}
