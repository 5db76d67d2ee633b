//! Error types for `ClassicText`

use thiserror::Error;

use crate::converter::markup::MarkupError;

/// The error type for `ClassicText` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Archive Errors ====================
    /// The legacy archive could not be loaded. Nothing was imported.
    #[error("could not load {archive}: {reason}")]
    SourceUnavailable {
        /// Display name of the archive (e.g. `TEXT.RSC` or a dump path).
        archive: String,
        /// Why the archive is unavailable.
        reason: String,
    },

    /// A record index outside of the archive was requested.
    #[error("invalid record index: {0}")]
    InvalidIndex(usize),

    // ==================== Codec Errors ====================
    /// The archive reported a formatting token with no markup mapping.
    #[error("unexpected RSC formatting token encountered: {kind}")]
    UnsupportedTokenKind {
        /// Description of the formatting kind.
        kind: String,
    },

    /// Markup text of a record could not be decoded back into tokens.
    #[error("markup error in '{key}': {source}")]
    Markup {
        /// Primary key of the offending record.
        key: String,
        /// The decode failure.
        source: MarkupError,
    },

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for `ClassicText` operations.
pub type Result<T> = std::result::Result<T, Error>;
