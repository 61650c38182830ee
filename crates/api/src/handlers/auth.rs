//! Handler for `POST /signin`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use storefront_db::repositories::OwnerRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Token type reported alongside every issued token.
const TOKEN_TYPE: &str = "Bearer";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /signin`. Never persisted.
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Successful sign-in response.
#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub token_type: &'static str,
    pub token: String,
    pub id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /signin
///
/// Look up the owner by exact email, check the password against the stored
/// bcrypt hash and issue a bearer token whose subject is the email.
pub async fn signin(
    State(state): State<AppState>,
    payload: Result<Json<SigninRequest>, JsonRejection>,
) -> AppResult<Json<SigninResponse>> {
    let Json(input) = payload?;

    let owner = OwnerRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            tracing::info!(email = %input.email, "Sign-in for unknown email");
            AppError::Core(CoreError::NotFoundBy {
                entity: "Owner",
                field: "email",
                value: input.email.clone(),
            })
        })?;

    let password_valid = verify_password(&input.password, &owner.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(owner_id = owner.id, "Sign-in rejected: wrong password");
        return Err(AppError::Core(CoreError::InvalidCredentials(
            "Incorrect password".into(),
        )));
    }

    let token = generate_token(&owner.email, &state.config.jwt)
        .map_err(|e| AppError::Token(e.to_string()))?;

    tracing::info!(owner_id = owner.id, "Owner signed in");

    Ok(Json(SigninResponse {
        token_type: TOKEN_TYPE,
        token,
        id: owner.id,
    }))
}
