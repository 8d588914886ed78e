//! Product catalog API.
//!
//! Exposes create, read, update and delete operations over product aggregates (products with
//! their attribute groups, attributes and quantity information) together with bounded
//! quantity adjustments, persisted through SeaORM and served over HTTP with Axum.

pub mod model;
pub mod server;
