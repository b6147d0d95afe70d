//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::Amount;
use crate::error::{AppError, ErrorResponse};

use super::AppState;

// =========================================================================
// Request types
// =========================================================================

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HumanizeQuery {
    /// Decimal amount to convert, e.g. `1523428.56` or `-5.25`
    #[serde(default)]
    pub value: Option<String>,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new().route("/humanize", get(humanize))
}

// =========================================================================
// GET /humanize
// =========================================================================

/// Convert a dollars-and-cents value into English words
///
/// The response body is the raw sentence, not wrapped in JSON.
#[utoipa::path(
    get,
    path = "/api/v1/humanize",
    params(HumanizeQuery),
    responses(
        (status = 200, description = "Humanization succeeded", body = String, content_type = "text/plain"),
        (status = 400, description = "The value is missing or is not a decimal number", body = ErrorResponse),
        (status = 500, description = "Humanization failed unexpectedly", body = ErrorResponse)
    )
)]
pub async fn humanize(
    State(state): State<AppState>,
    query: Result<Query<HumanizeQuery>, QueryRejection>,
) -> Result<String, AppError> {
    let Query(query) = query.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let raw = query
        .value
        .ok_or_else(|| AppError::InvalidRequest("missing query parameter: value".to_string()))?;

    let amount: Amount = raw.parse()?;
    let words = state.humanizer.humanize(amount.value());

    tracing::debug!(%amount, words = %words, "Humanized amount");

    Ok(words)
}

// =========================================================================
// GET /health
// =========================================================================

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}
