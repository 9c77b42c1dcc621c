//! Mood HTTP handlers.
//!
//! ```text
//! GET /mood/user/{name}
//! PUT /mood/user/{name}
//! ```
//!
//! The PUT body is the raw mood text; it is stored byte-for-byte.

use actix_web::{HttpResponse, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{MoodRecord, UserName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;

/// Response payload for a user's mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MoodResponse {
    /// User the mood belongs to.
    #[schema(example = "stehrn")]
    pub user: String,
    /// Mood text exactly as it was stored.
    #[schema(example = "happy")]
    pub mood: String,
}

impl From<MoodRecord> for MoodResponse {
    fn from(record: MoodRecord) -> Self {
        let (user, mood) = record.into_parts();
        Self {
            user: user.into(),
            mood,
        }
    }
}

/// Fetch the current mood for a user.
#[utoipa::path(
    get,
    path = "/mood/user/{name}",
    params(("name" = String, Path, description = "User whose mood to read")),
    responses(
        (status = 200, description = "Current mood", body = MoodResponse),
        (status = 404, description = "No mood recorded for the user", body = ApiError),
        (status = 503, description = "Mood store unavailable", body = ApiError)
    ),
    tags = ["moods"],
    operation_id = "getMood"
)]
#[get("/mood/user/{name}")]
pub async fn get_mood(
    state: web::Data<HttpState>,
    name: web::Path<String>,
) -> ApiResult<web::Json<MoodResponse>> {
    let user = UserName::new(name.into_inner())?;
    let record = state.moods.get_mood(&user).await?;
    Ok(web::Json(MoodResponse::from(record)))
}

/// Replace the mood for a user with the request body.
#[utoipa::path(
    put,
    path = "/mood/user/{name}",
    params(("name" = String, Path, description = "User whose mood to set")),
    request_body(content = String, content_type = "text/plain", description = "New mood"),
    responses(
        (status = 200, description = "Mood stored", body = MoodResponse),
        (status = 503, description = "Mood store unavailable", body = ApiError)
    ),
    tags = ["moods"],
    operation_id = "setMood"
)]
#[put("/mood/user/{name}")]
pub async fn set_mood(
    state: web::Data<HttpState>,
    name: web::Path<String>,
    mood: String,
) -> ApiResult<HttpResponse> {
    let user = UserName::new(name.into_inner())?;
    let record = state.mood_updates.set_mood(user, mood).await?;
    Ok(HttpResponse::Ok().json(MoodResponse::from(record)))
}
