//! Route definitions for the `/owner` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::owner;
use crate::state::AppState;

/// Routes mounted at `/owner`.
///
/// ```text
/// GET    /      -> list_owners
/// POST   /      -> create_owner
/// GET    /{id}  -> get_owner
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(owner::list_owners).post(owner::create_owner))
        .route("/{id}", get(owner::get_owner))
}
