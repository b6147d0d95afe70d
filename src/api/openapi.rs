//! OpenAPI document

use axum::{extract::State, Json};
use utoipa::OpenApi;

use super::{routes, AppState};
use crate::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Money Humanizer",
        description = "Converts decimal money amounts into English words"
    ),
    paths(routes::humanize, routes::health_check, openapi_json),
    components(schemas(ErrorResponse))
)]
pub struct ApiDoc;

/// The OpenAPI document stamped with the running version
pub fn api_doc(version: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.version = version.to_string();
    doc
}

/// Return JSON version of an OpenAPI schema
#[utoipa::path(
    get,
    path = "/openapi.json",
    responses(
        (status = 200, description = "OpenAPI document", body = Object, content_type = "application/json")
    )
)]
pub async fn openapi_json(State(state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    Json(api_doc(&state.api_version))
}
