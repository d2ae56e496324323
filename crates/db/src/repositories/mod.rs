//! Repository layer.
//!
//! Each repository implements [`crate::store::CustomerStore`] over a
//! different backend.

pub mod customer_repo;
pub mod memory_customer_store;

pub use customer_repo::CustomerRepo;
pub use memory_customer_store::MemoryCustomerStore;
