//! Model Hub API client
//!
//! Authenticated access to the Model Hub collection API: models, changesets
//! and named versions, with transparent cursor-based pagination and the
//! changeset/named-version join.
//!
//! # Architecture
//!
//! - Uses the crate's [`HttpClient`](crate::http::HttpClient) wrapper, no
//!   direct reqwest in the operations
//! - Bearer tokens come from an [`AccessTokenProvider`], implemented by
//!   `modelhub-common`'s `AuthorizationService` in production and by mocks
//!   in tests
//! - No retries anywhere; every failure propagates to the caller

pub mod auth;
pub mod client;

pub use auth::AccessTokenProvider;
pub use client::{ModelHubClient, ModelHubClientBuilder, ModelHubClientConfig, PreferReturn};
