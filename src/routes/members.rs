//! Member roster route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::Member;
use serde::Serialize;

use crate::roster::RosterError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub(crate) fn roster_error_to_status(err: &RosterError) -> StatusCode {
    if err.is_upstream() { StatusCode::BAD_GATEWAY } else { StatusCode::INTERNAL_SERVER_ERROR }
}

/// `GET /api/member` — return every member in roster order.
pub async fn list_members(State(state): State<AppState>) -> Result<Json<Vec<Member>>, (StatusCode, Json<ErrorBody>)> {
    match state.members.list_members().await {
        Ok(members) => {
            tracing::debug!(count = members.len(), "members listed");
            Ok(Json(members))
        }
        Err(e) => {
            tracing::error!(error = %e, "member roster load failed");
            Err((roster_error_to_status(&e), Json(ErrorBody { error: e.to_string() })))
        }
    }
}

#[cfg(test)]
#[path = "members_test.rs"]
mod tests;
