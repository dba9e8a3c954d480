//! Client error types.

use hero_core::errors::CoreError;
use thiserror::Error;

/// Errors a [`HeroStore`](crate::HeroStore) can report.
///
/// [`HeroService`](crate::HeroService) never lets these escape; they are
/// logged and replaced with a fallback value.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Data store returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the store.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The requested hero or resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// In-process store failure (e.g. a poisoned lock).
    #[error("store error: {0}")]
    Store(String),

    /// Store rejected the payload.
    #[error(transparent)]
    Core(#[from] CoreError),
}
