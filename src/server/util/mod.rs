//! Utility helpers for server code.
//!
//! Currently only holds the DTO factories shared by unit tests.
