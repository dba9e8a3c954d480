//! Cross-cutting error types for the hero crates.
//!
//! Transport errors (`ClientError`, `ServerError`) are defined in their
//! respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any hero crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (blank name, malformed payload).
    #[error("Validation error: {0}")]
    Validation(String),
}
