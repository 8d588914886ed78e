//! Bounded retry for persistence operations.
//!
//! This module provides the `RetryContext` used by services to run every write against the
//! store with a fixed number of attempts. Attempts follow each other immediately; there is no
//! backoff. Errors are classified through [`Error::to_retry_strategy`] so client errors are
//! returned at once while store failures are retried.

use std::future::Future;

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Context for executing operations with bounded, immediate retries.
///
/// # Retry Behavior
///
/// - **Max attempts**: 3
/// - **Delay between attempts**: none
/// - **Retry conditions**: only errors with `ErrorRetryStrategy::Retry` are retried
/// - **Exhaustion**: returns `Error::PersistenceError` carrying the last failure's message and
///   the number of attempts made
///
/// # Example
///
/// ```ignore
/// let ctx = RetryContext::new();
///
/// ctx.execute_with_retry("delete product ID 7", || async move {
///     let txn = db.begin().await?;
///     ProductRepository::new(&txn).delete(7).await?;
///     txn.commit().await?;
///
///     Ok(())
/// })
/// .await?;
/// ```
pub struct RetryContext {
    /// Maximum number of attempts before giving up
    max_attempts: u32,
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    /// Creates a new retry context allowing 3 attempts.
    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Executes an operation, retrying it immediately on retryable failures.
    ///
    /// # Arguments
    /// - `description` - Action being performed, used for logging and as the prefix of the
    ///   exhaustion message (e.g. "add product" yields "Failed to add product: ...")
    /// - `operation` - Produces a fresh future for every attempt
    ///
    /// # Returns
    /// - `Ok(R)` - An attempt succeeded
    /// - `Err(Error)` - The error of a non-retryable failure, unchanged
    /// - `Err(Error::PersistenceError)` - Every attempt failed with a retryable error
    pub async fn execute_with_retry<R, F, Fut>(
        &self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(Error::PersistenceError {
                                message: format!("Failed to {}: {}", description, e),
                                attempts: attempt_count,
                            });
                        }

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}): {:?}",
                            description,
                            attempt_count + 1,
                            self.max_attempts,
                            e
                        );
                    }
                },
            }
        }
    }
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}
