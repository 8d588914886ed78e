//! Server-side models: application state and database record types.

pub mod app;
pub mod db;
