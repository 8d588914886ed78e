use super::Error;

/// Strategy for handling errors in a retry context
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Attempt the operation again immediately
    Retry,
    /// Return the error to the caller without further attempts
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Client errors are detected before or instead of a write and won't change on retry
            Self::ProductError(_) => ErrorRetryStrategy::Fail,

            // Store failures are not classified further: connection drops, constraint
            // violations and write conflicts on a record that still exists are all retried
            Self::DbErr(_) => ErrorRetryStrategy::Retry,

            // Already the result of an exhausted retry loop
            Self::PersistenceError { .. } => ErrorRetryStrategy::Fail,

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
