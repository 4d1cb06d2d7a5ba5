//! # Model Hub Domain
//!
//! Wire types and error definitions for the Model Hub client.
//!
//! This crate contains:
//! - API entity types (Model, Changeset, NamedVersion)
//! - Collection page wrappers and pagination links
//! - The client error type and Result alias
//!
//! ## Architecture
//! - No dependencies on other ModelHub crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
