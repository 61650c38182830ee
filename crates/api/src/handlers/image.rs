//! Handlers for product images.
//!
//! Uploads go through [`StagedFile`]: bytes are staged on disk, the rows are
//! written inside a transaction, staged files are promoted, and only then is
//! the transaction committed. Any failure rolls back both sides, restoring
//! files that a promotion replaced.

use std::collections::HashSet;

use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::error::CoreError;
use storefront_core::ids::parse_id;
use storefront_core::image_path;
use storefront_core::staging::{remove_file_if_exists, rollback_all, StagedFile};
use storefront_core::types::DbId;
use storefront_db::models::image::{CreateImage, Image, ImageWithProduct};
use storefront_db::repositories::{ImageRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Multipart field that carries image files.
const IMAGE_FIELD: &str = "image";

/// A file pulled out of the multipart body.
#[derive(Debug)]
struct Upload {
    file_name: String,
    data: Bytes,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /images
pub async fn list_images(State(state): State<AppState>) -> AppResult<Json<Vec<Image>>> {
    let images = ImageRepo::list(&state.pool).await?;
    Ok(Json(images))
}

/// GET /images/{product_id}
///
/// Images for one product with the product, its category (and owner) and
/// its brand embedded.
pub async fn list_product_images(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Vec<ImageWithProduct>>> {
    let product_id = parse_id(&raw_id, "product")?;
    let images = ImageRepo::list_by_product_with_relations(&state.pool, product_id).await?;
    Ok(Json(images))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// POST /image/{product_id}
///
/// Store every file in the `image` field and create one row per file. The
/// batch is all-or-nothing.
pub async fn create_images(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse<Vec<Image>>>)> {
    let product_id = parse_id(&raw_id, "product")?;

    if !ProductRepo::exists(&state.pool, product_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }));
    }

    let mut multipart = multipart?;
    let uploads = read_uploads(&mut multipart, usize::MAX).await?;
    if uploads.is_empty() {
        return Err(AppError::BadRequest("No image file provided".into()));
    }

    let mut staged = Vec::with_capacity(uploads.len());
    let result = store_batch(&state, product_id, &uploads, &mut staged).await;
    if result.is_err() {
        rollback_all(&mut staged).await;
        tracing::warn!(product_id, files = staged.len(), "Image upload rolled back");
    }
    let images = result?;

    tracing::info!(product_id, count = images.len(), "Images uploaded");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("Uploaded {} image(s)", images.len()),
            data: images,
        }),
    ))
}

/// Stage every upload, insert the rows and promote the files.
///
/// Files staged so far are left in `staged` so the caller can roll them back.
/// Two uploads that resolve to the same stored file are rejected.
async fn store_batch(
    state: &AppState,
    product_id: DbId,
    uploads: &[Upload],
    staged: &mut Vec<StagedFile>,
) -> AppResult<Vec<Image>> {
    let mut rows = Vec::with_capacity(uploads.len());
    let mut seen = HashSet::with_capacity(uploads.len());
    for upload in uploads {
        let dest =
            image_path::destination(&state.config.storage_root, product_id, &upload.file_name)?;
        if !seen.insert(dest.file_path.clone()) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Duplicate file name '{}' in upload",
                upload.file_name
            ))));
        }
        staged.push(StagedFile::stage(&dest.dir, dest.path, &upload.data).await?);
        rows.push(CreateImage {
            product_id,
            file_path: dest.file_path,
        });
    }

    let mut tx = state.pool.begin().await?;
    let mut images = Vec::with_capacity(rows.len());
    for row in &rows {
        images.push(ImageRepo::create_in(&mut *tx, row).await?);
    }

    for file in staged.iter_mut() {
        file.commit().await?;
    }
    tx.commit().await?;

    for file in staged.iter_mut() {
        file.confirm().await;
    }

    Ok(images)
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// PUT /image/{image_id}
///
/// Replace the file behind an image. Only the first file in the `image`
/// field is used. The previous file is deleted after the row points at the
/// new one.
pub async fn update_image(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<MessageResponse<Image>>> {
    let image_id = parse_id(&raw_id, "image")?;

    let existing = ImageRepo::find_by_id(&state.pool, image_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Image",
            id: image_id,
        }))?;

    let mut multipart = multipart?;
    let upload = read_uploads(&mut multipart, 1)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::BadRequest("No image file provided".into()))?;

    let root = &state.config.storage_root;
    let dest = image_path::destination(root, existing.product_id, &upload.file_name)?;
    let mut staged = StagedFile::stage(&dest.dir, dest.path, &upload.data).await?;

    let result = swap_file(&state, image_id, &dest.file_path, &mut staged).await;
    if result.is_err() {
        staged.rollback().await;
        tracing::warn!(image_id, "Image replacement rolled back");
    }
    let updated = result?;

    if existing.file_path != updated.file_path {
        let old_path = image_path::resolve(root, &existing.file_path);
        match remove_file_if_exists(&old_path).await {
            Ok(removed) => {
                tracing::debug!(image_id, path = %old_path.display(), removed, "Old image cleaned up");
            }
            Err(e) => {
                tracing::warn!(
                    image_id,
                    path = %old_path.display(),
                    error = %e,
                    "Old image could not be removed"
                );
            }
        }
    }

    tracing::info!(image_id, file_path = %updated.file_path, "Image replaced");

    Ok(Json(MessageResponse {
        message: "Image updated".to_string(),
        data: updated,
    }))
}

/// Point the row at the new file and promote the staged bytes.
async fn swap_file(
    state: &AppState,
    image_id: DbId,
    file_path: &str,
    staged: &mut StagedFile,
) -> AppResult<Image> {
    let mut tx = state.pool.begin().await?;
    let updated = ImageRepo::update_file_path_in(&mut *tx, image_id, file_path)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Image",
            id: image_id,
        }))?;

    staged.commit().await?;
    tx.commit().await?;
    staged.confirm().await;

    Ok(updated)
}

// ---------------------------------------------------------------------------
// Multipart
// ---------------------------------------------------------------------------

/// Collect up to `limit` files from the `image` field.
///
/// Parts without a filename and parts under other names are skipped.
async fn read_uploads(multipart: &mut Multipart, limit: usize) -> AppResult<Vec<Upload>> {
    let mut uploads = Vec::new();

    while uploads.len() < limit {
        let Some(field) = multipart.next_field().await? else {
            break;
        };
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await?;
        uploads.push(Upload { file_name, data });
    }

    Ok(uploads)
}
