//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single aggregate. They are generic over
//! `ConnectionTrait` so services can run them against a connection or inside a transaction.

pub mod product;
