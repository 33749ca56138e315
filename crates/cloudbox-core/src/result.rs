//! Convenience result type alias for Cloudbox.

use crate::error::AppError;

/// A specialized `Result` type for Cloudbox operations.
///
/// Only the edges of the client (configuration, payload decoding, the CLI)
/// produce errors; the in-memory view components are total.
pub type AppResult<T> = Result<T, AppError>;
