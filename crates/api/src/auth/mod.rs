//! Authentication primitives.
//!
//! - [`password`] -- bcrypt password hashing and verification.
//! - [`jwt`] -- signed bearer-token generation and validation.

pub mod jwt;
pub mod password;
