//! Service layer for business logic and orchestration.
//!
//! Services validate requests, coordinate repository calls inside transactions and wrap every
//! write to the store in the bounded retry of [`retry::RetryContext`].

pub mod product;
pub mod quantity;
pub mod retry;
