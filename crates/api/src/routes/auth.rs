//! Route definitions for sign-in.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST /signin  -> signin
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/signin", post(auth::signin))
}
