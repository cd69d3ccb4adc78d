// src/presentation/http/controllers/articles.rs
use crate::application::{
    ApplicationResult,
    commands::articles::CreateArticleCommand,
    dto::ArticleDto,
    queries::articles::GetArticleByIdQuery,
};
use crate::domain::errors::DomainError;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, RequestCtx};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    /// Raw title; surrounding whitespace is trimmed. A missing or `null`
    /// field counts as an empty title.
    #[serde(default)]
    pub title: Option<String>,
}

#[utoipa::path(
    post,
    path = "/article",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid title or malformed body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 413, description = "Request body over 1 MiB.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    RequestCtx(ctx): RequestCtx,
    JsonBody(payload): JsonBody<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    state
        .services
        .article_commands
        .create_article(&ctx, CreateArticleCommand::new(payload.title.unwrap_or_default()))
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/article/{id}",
    params(
        ("id" = String, Path, description = "Positive base-10 article id")
    ),
    responses(
        (status = 200, description = "Article found.", body = ArticleDto),
        (status = 400, description = "Id is not a positive integer.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    RequestCtx(ctx): RequestCtx,
    Path(raw_id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    let id = parse_id(&raw_id).into_http()?;

    state
        .services
        .article_queries
        .get_article_by_id(&ctx, GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

fn parse_id(raw: &str) -> ApplicationResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| DomainError::InvalidId.into())
}
