//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or an open transaction) as the first argument.

pub mod brand_repo;
pub mod category_repo;
pub mod image_repo;
pub mod owner_repo;
pub mod product_repo;

pub use brand_repo::BrandRepo;
pub use category_repo::CategoryRepo;
pub use image_repo::ImageRepo;
pub use owner_repo::OwnerRepo;
pub use product_repo::ProductRepo;
