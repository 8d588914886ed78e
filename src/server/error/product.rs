use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by product operations that the client can act upon.
///
/// None of these are retried: they are returned to the caller as soon as they are detected.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProductError {
    /// The request body could not be parsed into the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// A path parameter could not be parsed, e.g. a non-numeric product ID.
    #[error("Invalid request path: {0}")]
    InvalidPath(String),
    /// The request body parsed but a required field is missing or blank.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// The product ID in the path differs from the one in the body.
    #[error("Product ID {path_id} in path does not match product ID {body_id} in body")]
    IdMismatch { path_id: i32, body_id: i32 },
    /// A group attribute references a type that does not exist.
    #[error("Group attribute type ID {0} does not exist")]
    UnknownGroupAttributeType(i32),
    /// Quantity adjustments only accept non-negative amounts.
    #[error("Quantity adjustment amount must not be negative, got {0}")]
    NegativeAmount(i32),
    #[error("Product ID {0} not found")]
    NotFound(i32),
    #[error("No group attributes found for product ID {0}")]
    NoGroupAttributes(i32),
    /// Decreasing by `amount` would drive the quantity below zero.
    #[error("Cannot reduce quantity {current} by {amount} to a negative number")]
    NegativeQuantity { current: i32, amount: i32 },
    #[error("Increasing quantity {current} by {amount} exceeds the maximum quantity")]
    QuantityOverflow { current: i32, amount: i32 },
}

impl From<JsonRejection> for ProductError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for ProductError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) | Self::NoGroupAttributes(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        tracing::debug!("Product request rejected: {}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
