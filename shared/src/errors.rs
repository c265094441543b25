/// Unified error types for the VideoGrab system.
use thiserror::Error;

use crate::models::ValidationIssue;

/// Failure modes of resolving a pasted video URL.
///
/// The HTTP layer owns the mapping to status codes and fixed response
/// bodies; this enum only distinguishes the cases.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The URL failed syntactic validation, before platform detection.
    #[error("invalid URL format")]
    InvalidUrl(Vec<ValidationIssue>),

    /// The URL parsed but matched no known platform rule.
    #[error("unsupported platform")]
    UnsupportedPlatform,

    /// A platform matched but no catalog record exists for it.
    #[error("video record not found")]
    RecordMissing,
}

/// Result type alias for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
