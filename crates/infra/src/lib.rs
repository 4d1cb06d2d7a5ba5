//! # Model Hub Infra
//!
//! HTTP plumbing and the Model Hub API client.
//!
//! This crate contains:
//! - [`http`]: a thin reqwest wrapper with shared defaults and request
//!   tracing
//! - [`api`]: the authenticated collection API client with transparent
//!   pagination and the changeset/named-version join

pub mod api;
pub mod http;

pub use api::{AccessTokenProvider, ModelHubClient, ModelHubClientConfig};
pub use http::HttpClient;
