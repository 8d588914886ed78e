//! Test utilities for the shopping catalog.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixtures a test
//! needs, and `build()` produces a [`TestContext`] backed by an in-memory SQLite database with
//! those tables created and fixtures inserted.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::product::factory, TestBuilder, TestContext, TestError};
}
