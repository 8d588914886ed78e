//! HTTP controller endpoints for the shopping catalog API.
//!
//! Controllers parse the request, hand it to the product service, and map the result onto a
//! status code and JSON body. Failures are returned as [`crate::server::error::Error`], which
//! renders the error body. Every handler is documented for OpenAPI through utoipa.

pub mod product;
