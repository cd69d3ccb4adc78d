// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::articles,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Json, Router,
    http::{Method, StatusCode},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 1 << 20;

pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(1);

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/healthz", get(health))
        .route("/article", post(articles::create_article))
        .route("/article/{id}", get(articles::get_article))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Backing store reachable.", body = crate::presentation::http::openapi::StatusResponse),
        (status = 503, description = "Backing store unreachable or too slow.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> (StatusCode, Json<StatusResponse>) {
    let Some(probe) = state.health_check.as_ref() else {
        return (StatusCode::OK, Json(StatusResponse::ok()));
    };

    let outcome = match tokio::time::timeout(HEALTH_CHECK_TIMEOUT, probe.check()).await {
        Ok(result) => result.map_err(|err| err.to_string()),
        Err(_) => Err(format!(
            "health check timed out after {}ms",
            HEALTH_CHECK_TIMEOUT.as_millis()
        )),
    };

    match outcome {
        Ok(()) => (StatusCode::OK, Json(StatusResponse::ok())),
        Err(db_error) => {
            tracing::warn!(error = %db_error, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusResponse::degraded(db_error)),
            )
        }
    }
}
