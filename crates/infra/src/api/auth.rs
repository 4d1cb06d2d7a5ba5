//! Access token plumbing for API requests

use async_trait::async_trait;
use modelhub_common::{AccessToken, AuthorizationService};
use modelhub_domain::Result;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token, performing sign-in first if required.
    ///
    /// # Errors
    ///
    /// Propagates configuration and sign-in failures from the underlying
    /// authorization layer.
    async fn access_token(&self) -> Result<AccessToken>;
}

#[async_trait]
impl AccessTokenProvider for AuthorizationService {
    async fn access_token(&self) -> Result<AccessToken> {
        self.get_access_token().await
    }
}
