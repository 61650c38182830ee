//! Repository for the `owners` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::owner::{CreateOwner, Owner};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, first_name, last_name, email, password_hash, profile_path, created_at, updated_at";

/// Provides CRUD operations for owners.
pub struct OwnerRepo;

impl OwnerRepo {
    /// Insert a new owner, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateOwner) -> Result<Owner, sqlx::Error> {
        let query = format!(
            "INSERT INTO owners (first_name, last_name, email, password_hash, profile_path)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Owner>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.profile_path)
            .fetch_one(pool)
            .await
    }

    /// Find an owner by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners WHERE id = $1");
        sqlx::query_as::<_, Owner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an owner by email (exact, case-sensitive match).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners WHERE email = $1");
        sqlx::query_as::<_, Owner>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all owners ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners ORDER BY id");
        sqlx::query_as::<_, Owner>(&query).fetch_all(pool).await
    }
}
