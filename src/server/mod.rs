//! Server application core modules.
//!
//! This module contains the server side of the shopping catalog: configuration, HTTP routing
//! and controllers, the product service with its retry and quantity rules, and the sea-orm
//! repository persisting product aggregates.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
