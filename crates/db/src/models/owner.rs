//! Owner entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

/// Full owner row from the `owners` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`OwnerResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Owner {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub profile_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe owner representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct OwnerResponse {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub profile_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Owner> for OwnerResponse {
    fn from(owner: Owner) -> Self {
        Self {
            id: owner.id,
            first_name: owner.first_name,
            last_name: owner.last_name,
            email: owner.email,
            profile_path: owner.profile_path,
            created_at: owner.created_at,
            updated_at: owner.updated_at,
        }
    }
}

/// Owner as embedded in nested image listings.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerSummary {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub profile_path: Option<String>,
}

/// DTO for creating a new owner. The password must already be hashed.
#[derive(Debug, Deserialize)]
pub struct CreateOwner {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub profile_path: Option<String>,
}
