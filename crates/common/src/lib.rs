//! # Model Hub Common
//!
//! Configuration loading and authorization plumbing shared by the client
//! crates.
//!
//! This crate contains:
//! - [`AppConfig`]: environment-sourced configuration, resolved once at
//!   startup with fail-fast validation
//! - [`AuthorizationService`]: lazy, single-flight interactive sign-in with
//!   a memoized authorization client

pub mod auth;
pub mod config;

// Re-export commonly used items
pub use auth::{AccessToken, AuthorizationClient, AuthorizationClientFactory, AuthorizationService};
pub use config::{AppConfig, AuthSettings};
