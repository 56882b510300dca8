//! JSON API under `/api`.
//!
//! Mirrors the admin panel for scripted clients: read the whole state, read
//! the published theme stylesheet, sign in and out, and dispatch raw actions.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::middleware as axum_mw;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use lumina_core::{Action, AppState};

use crate::error::AppError;
use crate::middleware::require_admin;
use crate::state::ServerState;

/// Build the `/api` router.
pub fn router(state: Arc<ServerState>) -> Router<Arc<ServerState>> {
    let admin = Router::new()
        .route("/api/dispatch", post(dispatch))
        .route_layer(axum_mw::from_fn_with_state(state, require_admin))
        .layer(tower::limit::ConcurrencyLimitLayer::new(16));

    Router::new()
        .route("/api/state", get(read_state))
        .route("/api/theme.css", get(theme_css))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .merge(admin)
}

fn state_response(state: &AppState) -> Result<Response, AppError> {
    let body = state.to_json()?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

async fn read_state(State(state): State<Arc<ServerState>>) -> Result<Response, AppError> {
    state_response(&state.store.snapshot())
}

async fn theme_css(State(state): State<Arc<ServerState>>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.style.current().to_css(),
    )
        .into_response()
}

#[derive(Deserialize)]
struct LoginRequest {
    password: String,
}

#[derive(Serialize)]
struct SessionResponse {
    authenticated: bool,
}

async fn login(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, AppError> {
    let Json(body) = body?;
    state.gate.check(&body.password)?;
    let next = state.store.dispatch(Action::Login).await;
    info!("admin signed in via api");
    Ok(Json(SessionResponse {
        authenticated: next.is_authenticated,
    }))
}

async fn logout(State(state): State<Arc<ServerState>>) -> Json<SessionResponse> {
    let next = state.store.dispatch(Action::Logout).await;
    Json(SessionResponse {
        authenticated: next.is_authenticated,
    })
}

async fn dispatch(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(raw) = body?;
    let action = Action::from_value(&raw).map_err(|e| AppError::BadRequest(e.to_string()))?;
    if action == Action::Login {
        return Err(AppError::Forbidden(
            "LOGIN must go through /api/login".to_owned(),
        ));
    }
    let next = state.store.dispatch(action).await;
    state_response(&next)
}
