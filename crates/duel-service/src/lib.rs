//! Duel Service
//!
//! HTTP front end for the commit-reveal duel registry. The hosting
//! environment authenticates callers; this service trusts the
//! `X-Account-Id` header as the caller identity and routes every operation
//! through a single serialized registry.

pub mod handlers;
pub mod models;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/game/initiate", post(handlers::initiate_game))
        .route("/api/game/respond", post(handlers::respond))
        .route("/api/game/initiator/reveal", post(handlers::reveal_initiator))
        .route("/api/game/responder/reveal", post(handlers::reveal_responder))
        .route(
            "/api/game/initiator/:responder/result",
            get(handlers::get_initiator_result),
        )
        .route(
            "/api/game/responder/:initiator/result",
            get(handlers::get_responder_result),
        )
        .route("/api/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
