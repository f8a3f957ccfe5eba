//! Business logic for each store operation.
//!
//! Functions here take the store (and any clock or id source) as plain arguments
//! and return plain Rust values. They never print and never validate caller input;
//! that happens at the [`crate::api`] boundary.

pub mod comments;
pub mod records;
pub mod seed;
