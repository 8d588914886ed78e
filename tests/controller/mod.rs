//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes, headers and
//! bodies for success and error paths.

mod product;
