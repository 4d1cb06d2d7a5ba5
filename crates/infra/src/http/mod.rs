//! HTTP plumbing shared by API clients

mod client;

pub use client::{HttpClient, HttpClientBuilder};
