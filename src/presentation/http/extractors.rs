// src/presentation/http/extractors.rs
use crate::{
    domain::context::RequestContext,
    presentation::http::{
        error::{HttpError, INVALID_REQUEST_BODY},
        state::HttpState,
    },
};
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;

/// Per-request deadline derived from the configured request timeout.
#[derive(Debug, Clone, Copy)]
pub struct RequestCtx(pub RequestContext);

impl<S> FromRequestParts<S> for RequestCtx
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = parts.extensions.get::<HttpState>().ok_or_else(|| {
            tracing::error!("application state missing from request extensions");
            HttpError::internal()
        })?;

        Ok(Self(RequestContext::with_timeout(app_state.request_timeout)))
    }
}

/// JSON body whose decoding failures all collapse into one generic 400.
///
/// The body is decoded regardless of `Content-Type`. Decoder details are
/// logged at debug level and never echoed back. Bodies cut off by the size
/// limit are reported as 413.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                return Err(HttpError::payload_too_large());
            }
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "unreadable request body");
                return Err(HttpError::bad_request(INVALID_REQUEST_BODY));
            }
        };

        serde_json::from_slice(&bytes).map(Self).map_err(|err| {
            tracing::debug!(error = %err, "rejected request body");
            HttpError::bad_request(INVALID_REQUEST_BODY)
        })
    }
}
