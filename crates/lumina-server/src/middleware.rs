//! Admin gate middleware for Lumina.
//!
//! Both layers read the store's `isAuthenticated` flag. The JSON API gets a
//! 401 body; the admin form endpoints are sent back to the login form.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::error::AppError;
use crate::state::ServerState;

/// Reject JSON API requests unless an admin is signed in.
pub async fn require_admin(
    State(state): State<Arc<ServerState>>,
    req: Request,
    next: Next,
) -> Response {
    if state.store.snapshot().is_authenticated {
        next.run(req).await
    } else {
        AppError::Unauthorized("admin login required".to_owned()).into_response()
    }
}

/// Redirect admin form posts to `/admin` unless an admin is signed in.
pub async fn require_admin_form(
    State(state): State<Arc<ServerState>>,
    req: Request,
    next: Next,
) -> Response {
    if state.store.snapshot().is_authenticated {
        next.run(req).await
    } else {
        tracing::debug!(path = %req.uri().path(), "admin form without login");
        Redirect::to("/admin").into_response()
    }
}
