//! Repository for the `images` table.
//!
//! Writes come in two flavours: pool-based helpers for simple cases, and
//! connection-based ones that run inside a caller-owned transaction so the
//! row change can be held open while files are promoted on disk.

use sqlx::{PgConnection, PgPool};
use storefront_core::types::DbId;

use crate::models::image::{CreateImage, Image, ImageProductRow, ImageWithProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, file_path, product_id, created_at, updated_at";

/// Provides CRUD operations for product images.
pub struct ImageRepo;

impl ImageRepo {
    /// Insert a new image row, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateImage) -> Result<Image, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::create_in(&mut *conn, input).await
    }

    /// Insert a new image row on an existing connection or transaction.
    pub async fn create_in(
        conn: &mut PgConnection,
        input: &CreateImage,
    ) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (file_path, product_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(&input.file_path)
            .bind(input.product_id)
            .fetch_one(conn)
            .await
    }

    /// Find an image by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = $1");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every image ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images ORDER BY id");
        sqlx::query_as::<_, Image>(&query).fetch_all(pool).await
    }

    /// List images for a product with the product, its category (and the
    /// category's owner) and its brand embedded.
    pub async fn list_by_product_with_relations(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<ImageWithProduct>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ImageProductRow>(
            "SELECT
                i.id, i.file_path, i.product_id, i.created_at, i.updated_at,
                p.product_name, p.description, p.price_per_piece, p.stock,
                p.brand_id, p.category_id,
                c.id AS joined_category_id, c.category_name,
                o.id AS owner_id,
                o.first_name AS owner_first_name,
                o.last_name AS owner_last_name,
                o.email AS owner_email,
                o.profile_path AS owner_profile_path,
                b.id AS joined_brand_id, b.brand_name
             FROM images i
             JOIN products p ON p.id = i.product_id
             LEFT JOIN categories c ON c.id = p.category_id
             LEFT JOIN owners o ON o.id = c.owner_id
             LEFT JOIN brands b ON b.id = p.brand_id
             WHERE i.product_id = $1
             ORDER BY i.id",
        )
        .bind(product_id)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(ImageWithProduct::from).collect())
    }

    /// Point an image at a new file. Returns `None` if no row with `id` exists.
    pub async fn update_file_path_in(
        conn: &mut PgConnection,
        id: DbId,
        file_path: &str,
    ) -> Result<Option<Image>, sqlx::Error> {
        let query = format!(
            "UPDATE images SET file_path = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .bind(file_path)
            .fetch_optional(conn)
            .await
    }
}
