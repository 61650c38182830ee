//! Shared response envelope types for API handlers.
//!
//! Created records use a `{ "data": ... }` envelope; upload endpoints add a
//! human-readable `message` next to the data.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "message": ..., "data": T }` envelope returned by mutating image routes.
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub message: String,
    pub data: T,
}
