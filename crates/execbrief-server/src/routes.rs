//! Request handlers for the local surface
//!
//! Validation failures return 400 with an `{error}` body; upstream failures
//! mirror the upstream HTTP status and preserve its body text.

use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use execbrief_core::{ExecBriefError, ProgressSink, SynthesisResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

type ApiError = (StatusCode, Json<Value>);

fn error_body(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

/// Map a core error onto an HTTP response, mirroring upstream statuses.
fn map_error(e: ExecBriefError) -> ApiError {
    match e {
        ExecBriefError::Config(message) => error_body(StatusCode::BAD_REQUEST, message),
        ExecBriefError::Upstream { status, body } => error_body(
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            body,
        ),
        other => error_body(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

#[derive(Debug, Deserialize)]
pub struct ClaudeRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct ClaudeResponse {
    pub synthesis: String,
    pub cost: f64,
}

/// POST /api/claude — answer a query from supplied context.
pub async fn claude_answer(
    State(state): State<AppState>,
    Json(req): Json<ClaudeRequest>,
) -> Result<Json<ClaudeResponse>, ApiError> {
    if !state.claude.is_configured() {
        return Err(error_body(
            StatusCode::BAD_REQUEST,
            "Claude API key not configured",
        ));
    }
    if req.query.trim().is_empty() {
        return Err(error_body(StatusCode::BAD_REQUEST, "No query provided"));
    }

    let answer = state
        .claude
        .answer(&req.query, &req.context)
        .await
        .map_err(map_error)?;

    Ok(Json(ClaudeResponse {
        synthesis: answer.synthesis,
        cost: answer.cost,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ZeroEntropyRequest {
    #[serde(default)]
    pub query: String,
}

/// POST /api/zeroentropy — run a synthesis query (live or demo mode).
/// Unlike the Claude proxy, every failure past validation is a plain 500
/// with the error text; vendor statuses are not mirrored.
pub async fn zeroentropy_synthesize(
    State(state): State<AppState>,
    Json(req): Json<ZeroEntropyRequest>,
) -> Result<Json<SynthesisResult>, ApiError> {
    if req.query.trim().is_empty() {
        return Err(error_body(StatusCode::BAD_REQUEST, "No query provided"));
    }

    let result = state
        .zeroentropy
        .synthesize(&req.query, &ProgressSink::discard())
        .await
        .map_err(|e| error_body(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(result))
}
