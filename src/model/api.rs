use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Problem details returned when a persistence operation fails after all retry attempts
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDto {
    /// Message of the last failure
    pub detail: String,
    /// HTTP status code of the response
    pub status_code: u16,
    /// Short summary of the problem
    pub title: String,
    /// Number of attempts made, formatted as `Attempt N`
    pub instance: String,
}
