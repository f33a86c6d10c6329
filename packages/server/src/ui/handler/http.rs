//! HTTP API endpoint handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    domain::{MatchId, Username},
    infrastructure::dto::http::{
        CreateMatchRequest, ErrorReason, MatchCreatedResponse, MoveRequest,
    },
    ui::state::AppState,
    usecase::{GetBoardError, SubmitMoveError},
};

/// Query parameters carrying the caller's identity.
///
/// Credential validation is the upstream gateway's job; by the time a request
/// reaches the coordinator the username is taken as authenticated.
#[derive(Debug, Deserialize)]
pub struct IdentityQuery {
    pub username: String,
}

type ErrorResponse = (StatusCode, Json<ErrorReason>);

fn bad_request(reason: impl Into<String>) -> ErrorResponse {
    (StatusCode::BAD_REQUEST, Json(ErrorReason::new(reason)))
}

fn not_found(reason: impl Into<String>) -> ErrorResponse {
    (StatusCode::NOT_FOUND, Json(ErrorReason::new(reason)))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Create a match and get a sharable match id.
///
/// The requested duration is clamped to 1 minute - 12 hours.
pub async fn create_match(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMatchRequest>,
) -> Result<Json<MatchCreatedResponse>, ErrorResponse> {
    if req.duration_minutes == 0 {
        return Err(bad_request("duration not provided"));
    }
    let requested = Duration::from_secs(req.duration_minutes.saturating_mul(60));
    let created = state.create_match_usecase.execute(requested).await;
    Ok(Json(MatchCreatedResponse {
        match_id: created.id.into_string(),
    }))
}

/// Submit a move. Players in-game can make moves when it's their turn.
///
/// The move needs to be in UCI format, e.g. `e2e4`.
pub async fn submit_move(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<IdentityQuery>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<&'static str>, ErrorResponse> {
    let match_id = MatchId::new(id).map_err(|e| bad_request(e.to_string()))?;
    let username = Username::new(query.username).map_err(|e| bad_request(e.to_string()))?;

    match state
        .submit_move_usecase
        .execute(&match_id, &username, &req.r#move)
        .await
    {
        Ok(()) => Ok(Json("ok")),
        Err(SubmitMoveError::MatchNotFound) => Err(not_found("match not found")),
        Err(SubmitMoveError::NotParticipant) => Err(not_found("player is not in this match")),
        Err(err @ SubmitMoveError::NotYourTurn)
        | Err(err @ SubmitMoveError::MatchOver)
        | Err(err @ SubmitMoveError::IllegalMove(_)) => Err(bad_request(err.to_string())),
    }
}

/// Resign from a match explicitly.
///
/// Always succeeds: resigning an unknown match or one the caller never
/// joined is a no-op (stream teardown uses the same path).
pub async fn resign_match(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<IdentityQuery>,
) -> Result<Json<&'static str>, ErrorResponse> {
    let match_id = MatchId::new(id).map_err(|e| bad_request(e.to_string()))?;
    let username = Username::new(query.username).map_err(|e| bad_request(e.to_string()))?;

    state
        .resign_match_usecase
        .execute(&match_id, &username)
        .await;
    Ok(Json("ok"))
}

/// Get the current board position in FEN format.
///
/// Clients that missed stream events can catch up here. No identity needed.
pub async fn get_board(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<String, ErrorResponse> {
    let match_id = MatchId::new(id).map_err(|e| bad_request(e.to_string()))?;

    match state.get_board_usecase.execute(&match_id).await {
        Ok(fen) => Ok(fen),
        Err(GetBoardError::MatchNotFound) => Err(not_found("match not found")),
    }
}
