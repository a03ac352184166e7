//! HTTP API handlers.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use duel_core::{AccountId, GameError, Phase};
use tracing::info;

use crate::models::*;
use crate::state::AppState;

/// Application error type
pub enum ApiError {
    Unauthorized,
    Game(GameError),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        ApiError::Game(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "missing X-Account-Id header".to_string(),
            ),
            ApiError::Game(err) => {
                let status = match err {
                    GameError::ZeroIdentity
                    | GameError::SelfPlayForbidden
                    | GameError::InvalidChoice(_) => StatusCode::BAD_REQUEST,
                    GameError::WrongCaller => StatusCode::FORBIDDEN,
                    GameError::GameNotInitiated => StatusCode::NOT_FOUND,
                    GameError::InvalidPhase | GameError::ResultNotReady => StatusCode::CONFLICT,
                };
                (status, err.to_string())
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// The hosting environment authenticates the caller and passes the identity
/// through this header.
fn caller_from_headers(headers: &HeaderMap) -> Result<AccountId, ApiError> {
    headers
        .get("X-Account-Id")
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(AccountId::from)
        .ok_or(ApiError::Unauthorized)
}

fn reveal_status(phase: Phase) -> StatusResponse {
    let status = match phase {
        Phase::Won | Phase::Drawn => "game_complete",
        _ => "waiting_for_opponent",
    };
    StatusResponse {
        status: status.to_string(),
    }
}

pub async fn initiate_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<InitiateRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let caller = caller_from_headers(&headers)?;
    state.initiate(&caller, &req.responder, req.commitment)?;

    info!("{} initiated a game against {}", caller, req.responder);

    Ok(Json(StatusResponse {
        status: "initiated".to_string(),
    }))
}

pub async fn respond(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<RespondRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let caller = caller_from_headers(&headers)?;
    state.respond(&caller, &req.initiator, req.commitment)?;

    info!("{} responded to {}", caller, req.initiator);

    Ok(Json(StatusResponse {
        status: "responded".to_string(),
    }))
}

pub async fn reveal_initiator(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<InitiatorRevealRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let caller = caller_from_headers(&headers)?;
    let phase = state.reveal_initiator(&caller, &req.responder, req.choice, &req.salt)?;

    info!("{} revealed against {} (phase {})", caller, req.responder, phase);

    Ok(Json(reveal_status(phase)))
}

pub async fn reveal_responder(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ResponderRevealRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let caller = caller_from_headers(&headers)?;
    let phase = state.reveal_responder(&caller, &req.initiator, req.choice, &req.salt)?;

    info!("{} revealed against {} (phase {})", caller, req.initiator, phase);

    Ok(Json(reveal_status(phase)))
}

pub async fn get_initiator_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(responder): Path<AccountId>,
) -> Result<Json<ResultResponse>, ApiError> {
    let caller = caller_from_headers(&headers)?;
    let outcome = state.initiator_result(&caller, &responder)?;

    Ok(Json(outcome.into()))
}

pub async fn get_responder_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(initiator): Path<AccountId>,
) -> Result<Json<ResultResponse>, ApiError> {
    let caller = caller_from_headers(&headers)?;
    let outcome = state.responder_result(&caller, &initiator)?;

    Ok(Json(outcome.into()))
}

pub async fn health() -> &'static str {
    "ok"
}
