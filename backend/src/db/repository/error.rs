//! Error types for store operations.
//!
//! Every store error carries an [`ErrorContext`] naming the store call that
//! failed, so a `StoreUnavailable` surfaced by the leaderboard can still be
//! traced back to it.

use std::fmt;

/// Result type for store operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Where a store error happened and whether trying again could help.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Store call that failed ("put_item", "query_sort_keys", ...)
    pub operation: Option<String>,
    /// Free-form detail, e.g. the database error kind
    pub details: Option<String>,
    /// Transient failure
    pub retryable: bool,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.operation.as_deref().unwrap_or("?");
        write!(f, "(op={}", op)?;
        if let Some(details) = &self.details {
            write!(f, ", {}", details)?;
        }
        if self.retryable {
            f.write_str(", retryable")?;
        }
        f.write_str(")")
    }
}

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The store could not be reached: pool checkout, refused connection,
    /// or a store switched unhealthy.
    #[error("store unreachable: {message} {context}")]
    Unreachable {
        message: String,
        context: ErrorContext,
    },

    /// A write or scan reached the store and was rejected.
    #[error("store query failed: {message} {context}")]
    Query {
        message: String,
        context: ErrorContext,
    },

    /// Missing or invalid store settings.
    #[error("store misconfigured: {message}")]
    Configuration { message: String },

    /// Anything else (join errors, migrations, row decoding).
    #[error("store internal error: {message} {context}")]
    Internal {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    /// An unreachable store is always worth another attempt.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::connection_with_context(message, ErrorContext::default())
    }

    pub fn connection_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Unreachable {
            message: message.into(),
            context: context.retryable(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::internal_with_context(message, ErrorContext::default())
    }

    pub fn internal_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Internal {
            message: message.into(),
            context,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.context().is_some_and(|c| c.retryable)
    }

    /// Context of the failed call; configuration errors happen before any call.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::Unreachable { context, .. }
            | Self::Query { context, .. }
            | Self::Internal { context, .. } => Some(context),
            Self::Configuration { .. } => None,
        }
    }

    /// Stamp the store call name onto the error.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        match &mut self {
            Self::Unreachable { context, .. }
            | Self::Query { context, .. }
            | Self::Internal { context, .. } => context.operation = Some(operation.into()),
            Self::Configuration { .. } => {}
        }
        self
    }
}

#[cfg(feature = "postgres-repo")]
impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::DatabaseError(kind, info) => {
                let context = ErrorContext::default().with_details(format!("kind={:?}", kind));
                let context = match kind {
                    DatabaseErrorKind::SerializationFailure
                    | DatabaseErrorKind::ClosedConnection => context.retryable(),
                    _ => context,
                };
                Self::Query {
                    message: info.message().to_string(),
                    context,
                }
            }
            Error::DeserializationError(e) => Self::internal(format!("bad row: {}", e)),
            other => Self::query(other.to_string()),
        }
    }
}

#[cfg(feature = "postgres-repo")]
impl From<diesel::r2d2::PoolError> for RepositoryError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        Self::connection_with_context(
            err.to_string(),
            ErrorContext::default().with_details("pool checkout"),
        )
    }
}
