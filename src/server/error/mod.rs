//! Error types for the shopping catalog server.
//!
//! Domain errors (product validation and lookup, configuration) are defined in their own
//! modules and aggregated into [`Error`]. Every error converts into an Axum response so handlers
//! can return `Result<_, Error>` and propagate failures with `?`.

pub mod config;
pub mod product;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ProblemDto},
    server::error::{config::ConfigError, product::ProductError},
};

/// Main error type for the shopping catalog server.
///
/// Aggregates the domain-specific errors and external library errors into a single type. The
/// `#[from]` attributes allow conversion via the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Product error (validation, missing records, invalid quantity changes).
    #[error(transparent)]
    ProductError(#[from] ProductError),
    /// A persistence operation kept failing until the retry limit was reached.
    #[error("{message} (attempt {attempts})")]
    PersistenceError { message: String, attempts: u32 },
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid request bodies, identity mismatches, negative quantities
/// - 404 Not Found - Missing products or attribute groups
/// - 500 Internal Server Error - Exhausted retries (problem body) and all other errors
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ProductError(err) => err.into_response(),
            Self::PersistenceError { message, attempts } => {
                tracing::error!("Persistence failed after {} attempts: {}", attempts, message);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ProblemDto {
                        detail: message,
                        status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                        title: "Error".to_string(),
                        instance: format!("Attempt {}", attempts),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so implementation details
/// are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
