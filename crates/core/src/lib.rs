//! Domain primitives shared by the database and HTTP layers.
//!
//! Nothing in this crate talks to the database; the only I/O is the
//! filesystem staging in [`staging`].

pub mod error;
pub mod ids;
pub mod image_path;
pub mod staging;
pub mod types;
