// src/presentation/http/controllers/projects.rs
use crate::application::{
    commands::projects::ResolveProjectSlugCommand,
    dto::{ResolvedSlugDto, SlugAvailabilityDto, SlugPreviewDto},
    queries::projects::{CheckSlugAvailabilityQuery, PreviewSlugQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SlugAvailabilityParams {
    /// Candidate slug; canonicalized before the lookup.
    pub slug: String,
    /// Id of the project being edited, if any.
    #[serde(default)]
    pub exclude_id: Option<i64>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SlugPreviewParams {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResolveSlugRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub project_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/projects/slug-availability",
    params(SlugAvailabilityParams),
    responses(
        (status = 200, description = "Whether the slug is free.", body = SlugAvailabilityDto),
        (status = 400, description = "Empty or invalid slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn check_slug_availability(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SlugAvailabilityParams>,
) -> HttpResult<Json<SlugAvailabilityDto>> {
    state
        .services
        .slug_queries
        .check_slug_availability(CheckSlugAvailabilityQuery {
            slug: params.slug,
            exclude_id: params.exclude_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/projects/slug-preview",
    params(SlugPreviewParams),
    responses(
        (status = 200, description = "Slug derived from the given text.", body = SlugPreviewDto)
    ),
    tag = "Projects"
)]
pub async fn preview_slug(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SlugPreviewParams>,
) -> Json<SlugPreviewDto> {
    Json(
        state
            .services
            .slug_queries
            .preview_slug(PreviewSlugQuery { text: params.text }),
    )
}

#[utoipa::path(
    post,
    path = "/api/v1/projects/slug/resolve",
    request_body = ResolveSlugRequest,
    responses(
        (status = 200, description = "Slug the project will be saved under.", body = ResolvedSlugDto),
        (status = 400, description = "Invalid title or slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Project not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn resolve_slug(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ResolveSlugRequest>,
) -> HttpResult<Json<ResolvedSlugDto>> {
    let command = ResolveProjectSlugCommand {
        title: payload.title,
        slug: payload.slug,
        project_id: payload.project_id,
    };

    state
        .services
        .slug_commands
        .resolve_slug(command)
        .await
        .into_http()
        .map(Json)
}
