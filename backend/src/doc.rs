//! OpenAPI documentation for the HTTP surface.
//!
//! Swagger UI serves this document at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::error::{ApiError, ErrorCode};
use crate::inbound::http::moods::MoodResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mood service API",
        description = "Read and replace the current mood of a user."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::moods::get_mood,
        crate::inbound::http::moods::set_mood,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(MoodResponse, ApiError, ErrorCode)),
    tags(
        (name = "moods", description = "Per-user mood values"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
