//! Unified error types for api-compat.
//!
//! Only the edges of the system can fail: parsing version strings, decoding
//! persisted snapshots, file IO and configuration. Comparison and rendering
//! are infallible.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for api-compat operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiCompatError {
    /// Malformed `major.minor.patch` string
    #[error("Invalid version '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    /// A persisted snapshot exists but cannot be decoded
    #[error("Snapshot{} is unreadable: {context}", at_clause(.path.as_deref()))]
    SnapshotUnreadable {
        path: Option<PathBuf>,
        context: String,
        #[source]
        source: DecodeErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error{}: {message}", at_clause(.path.as_deref()))]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Snapshot validation errors reported for collector output
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Why a snapshot could not be decoded
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Not an API snapshot (format marker '{0}')")]
    WrongFormat(String),

    #[error("Unsupported snapshot schema version {found} (supported: {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

/// ` at <path>` when a path is known, empty otherwise.
fn at_clause(path: Option<&std::path::Path>) -> String {
    path.map_or_else(String::new, |p| format!(" at {}", p.display()))
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for api-compat operations
pub type Result<T> = std::result::Result<T, ApiCompatError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ApiCompatError {
    /// Create an invalid version error
    pub fn invalid_version(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a snapshot decode error without a path
    pub fn unreadable(context: impl Into<String>, source: DecodeErrorKind) -> Self {
        Self::SnapshotUnreadable {
            path: None,
            context: context.into(),
            source,
        }
    }

    /// Attach the file the snapshot was read from
    #[must_use]
    pub fn at_path(self, at: impl Into<PathBuf>) -> Self {
        match self {
            Self::SnapshotUnreadable {
                path: None,
                context,
                source,
            } => Self::SnapshotUnreadable {
                path: Some(at.into()),
                context,
                source,
            },
            Self::Io {
                path: None,
                message,
                source,
            } => Self::Io {
                path: Some(at.into()),
                message,
                source,
            },
            other => other,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// True when the error means "no usable baseline", as opposed to "no changes".
    #[must_use]
    pub const fn is_unreadable_snapshot(&self) -> bool {
        matches!(self, Self::SnapshotUnreadable { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ApiCompatError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ApiCompatError {
    fn from(err: serde_json::Error) -> Self {
        Self::unreadable(
            "JSON deserialization",
            DecodeErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to the error's existing context, building a
/// chain such as `"loading baseline: JSON deserialization"`.
///
/// ```ignore
/// use api_compat::error::ErrorContext;
///
/// let snapshot = persist::decode_snapshot(&bytes)
///     .with_context(|| format!("loading baseline from {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ApiCompatError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: ApiCompatError, new_ctx: &str) -> ApiCompatError {
    match err {
        ApiCompatError::InvalidVersion { value, reason } => ApiCompatError::InvalidVersion {
            value,
            reason: chain_context(new_ctx, &reason),
        },
        ApiCompatError::SnapshotUnreadable {
            path,
            context: existing,
            source,
        } => ApiCompatError::SnapshotUnreadable {
            path,
            context: chain_context(new_ctx, &existing),
            source,
        },
        ApiCompatError::Report {
            context: existing,
            source,
        } => ApiCompatError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ApiCompatError::Io {
            path,
            message,
            source,
        } => ApiCompatError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ApiCompatError::Config(msg) => ApiCompatError::Config(chain_context(new_ctx, &msg)),
        ApiCompatError::Validation(msg) => {
            ApiCompatError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a configuration error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| ApiCompatError::Config(context.into()))
    }
}
