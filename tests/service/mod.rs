//! Tests for the product service.

mod product;
