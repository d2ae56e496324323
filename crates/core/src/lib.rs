//! Domain types for the customer portal.
//!
//! This crate has no internal dependencies so the storage layer, the API
//! layer and any future tooling can share the same customer fields, filter
//! predicates and error type.

pub mod customer;
pub mod error;
pub mod example;
pub mod filter;
pub mod search;
pub mod types;
