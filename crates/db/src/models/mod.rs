//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Credential-free or summary views used in API responses

pub mod catalog;
pub mod image;
pub mod owner;
