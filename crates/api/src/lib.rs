//! Customer portal API server library.
//!
//! Exposes the core building blocks (config, state, error handling, query
//! service, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod router;
pub mod routes;
pub mod service;
pub mod state;
