//! Error types for folio operations.

use thiserror::Error;

/// Errors that can occur while resolving templates.
///
/// Most of the engine degrades instead of failing: malformed markup parses
/// best-effort, unknown font tokens fall back to a default, and a patch that
/// cannot be located is reported through [`PatchOutcome`](crate::PatchOutcome)
/// rather than an error. The one loud failure is a template that violates its
/// own shape contract, which indicates a caller bug.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid template '{id}': {reason}")]
    InvalidTemplate { id: String, reason: String },

    #[error("unknown template id: {0}")]
    UnknownTemplate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
