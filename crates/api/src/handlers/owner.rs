//! Handlers for the `/owner` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use storefront_core::error::CoreError;
use storefront_core::ids::parse_id;
use storefront_db::models::owner::{CreateOwner, OwnerResponse};
use storefront_db::repositories::OwnerRepo;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /owner`.
///
/// `password` is plaintext here and hashed before it reaches the database.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOwnerRequest {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// POST /owner
pub async fn create_owner(
    State(state): State<AppState>,
    payload: Result<Json<CreateOwnerRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<OwnerResponse>>)> {
    let Json(input) = payload?;
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let create = CreateOwner {
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        password_hash,
        profile_path: input.profile_path,
    };

    let owner = OwnerRepo::create(&state.pool, &create).await?;
    tracing::info!(owner_id = owner.id, "Owner created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: OwnerResponse::from(owner),
        }),
    ))
}

/// GET /owner
pub async fn list_owners(State(state): State<AppState>) -> AppResult<Json<Vec<OwnerResponse>>> {
    let owners = OwnerRepo::list(&state.pool).await?;
    Ok(Json(owners.into_iter().map(OwnerResponse::from).collect()))
}

/// GET /owner/{id}
pub async fn get_owner(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<OwnerResponse>> {
    let id = parse_id(&raw_id, "owner")?;
    let owner = OwnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Owner",
            id,
        }))?;
    Ok(Json(owner.into()))
}
