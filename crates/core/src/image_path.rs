//! Filesystem layout for product images.
//!
//! Every image lives at `images/product/product<ProductID>/<basename>`,
//! relative to the configured storage root. The relative form (always with
//! forward slashes) is what gets persisted in `images.file_path`, so the same
//! string doubles as the URL path the files are served under.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::types::DbId;

/// Top-level directory for all uploaded images.
pub const IMAGES_DIR: &str = "images";

/// Directory under [`IMAGES_DIR`] that holds one subfolder per product.
pub const PRODUCT_DIR: &str = "product";

/// Where an uploaded image must be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDestination {
    /// Absolute (root-joined) product subfolder.
    pub dir: PathBuf,
    /// Absolute (root-joined) file path.
    pub path: PathBuf,
    /// Root-relative path stored in the database.
    pub file_path: String,
}

/// Name of the per-product subfolder, e.g. `product7`.
pub fn product_subfolder(product_id: DbId) -> String {
    format!("product{product_id}")
}

/// Reduce a client-supplied filename to its final path component.
///
/// Both `/` and `\` count as separators so Windows-style names cannot smuggle
/// directories in. Names that reduce to nothing, `.` or `..`, or that contain
/// NUL, are rejected.
pub fn sanitize_file_name(raw: &str) -> Result<String, CoreError> {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or("").trim();

    if base.is_empty() || base == "." || base == ".." || base.contains('\0') {
        return Err(CoreError::Validation(format!(
            "Invalid file name '{}'",
            raw.escape_default()
        )));
    }

    Ok(base.to_string())
}

/// Compute the destination of an uploaded file for `product_id`.
pub fn destination(
    storage_root: &Path,
    product_id: DbId,
    raw_name: &str,
) -> Result<ImageDestination, CoreError> {
    let name = sanitize_file_name(raw_name)?;
    let subfolder = product_subfolder(product_id);

    let dir = storage_root
        .join(IMAGES_DIR)
        .join(PRODUCT_DIR)
        .join(&subfolder);
    let path = dir.join(&name);
    let file_path = format!("{IMAGES_DIR}/{PRODUCT_DIR}/{subfolder}/{name}");

    Ok(ImageDestination {
        dir,
        path,
        file_path,
    })
}

/// Resolve a stored `file_path` against the storage root.
pub fn resolve(storage_root: &Path, file_path: &str) -> PathBuf {
    storage_root.join(file_path)
}
