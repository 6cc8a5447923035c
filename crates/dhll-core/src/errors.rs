//! Cross-cutting error types for dhll.
//!
//! Domain-specific errors (`StoreError`, `ClientError`, ...) live in their
//! respective crates. Everything converges into `anyhow` in `dhll-cli`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A rating code outside the fixed scale.
    #[error("Unknown rating code '{0}' (expected one of G, 10+, 13+, 16+, 18+)")]
    UnknownRating(String),

    /// A policy mode other than off/advisory/enforce.
    #[error("Unknown policy mode '{0}' (expected off, advisory or enforce)")]
    UnknownPolicyMode(String),

    /// A creative mode other than the five known ones.
    #[error("Unknown creative mode '{0}' (expected off, minimal, full, tech or artistic)")]
    UnknownCreativeMode(String),

    /// Data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
