//! # cloudbox-core
//!
//! Core crate for the Cloudbox client. Contains configuration schemas,
//! typed identifiers, sorting/filter value types, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other Cloudbox crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
