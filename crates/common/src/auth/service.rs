//! Authorization service: sign in once, serve tokens ever after

use std::sync::Arc;

use modelhub_domain::Result;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::traits::AuthorizationClient;
use super::types::AccessToken;

/// Factory that builds the external authorization client from configuration.
///
/// Runs lazily on first token need. Returning an error here (for example
/// when required configuration is missing) surfaces before any sign-in is
/// attempted.
pub type AuthorizationClientFactory =
    Box<dyn Fn() -> Result<Arc<dyn AuthorizationClient>> + Send + Sync>;

/// Lazy, memoized token acquisition shared by all API requests.
///
/// Two states: Unauthenticated (no cached client) and Authenticated (cached
/// client available). The first [`get_access_token`] call builds the client
/// and performs interactive sign-in exactly once; every later call returns
/// the cached client's current token without repeating sign-in, even if the
/// token has since expired. Refreshing, if any, is the cached client's job.
///
/// Concurrent first calls are single-flighted: the sign-in transition runs
/// behind the write lock with a double-check, so the user sees at most one
/// prompt and all waiters observe the same resolution. Steady-state calls
/// only take the read lock.
///
/// [`get_access_token`]: AuthorizationService::get_access_token
pub struct AuthorizationService {
    factory: AuthorizationClientFactory,
    client: RwLock<Option<Arc<dyn AuthorizationClient>>>,
}

impl AuthorizationService {
    /// Create an Unauthenticated service.
    pub fn new(factory: AuthorizationClientFactory) -> Self {
        Self { factory, client: RwLock::new(None) }
    }

    /// Whether sign-in has completed.
    pub async fn is_authenticated(&self) -> bool {
        self.client.read().await.is_some()
    }

    /// Get the current access token, signing in first if needed.
    ///
    /// # Errors
    ///
    /// Propagates factory errors (missing configuration) and sign-in
    /// failures. A failed or cancelled sign-in leaves the service
    /// Unauthenticated; the next call retries sign-in from scratch.
    pub async fn get_access_token(&self) -> Result<AccessToken> {
        if let Some(client) = self.client.read().await.as_ref() {
            return client.access_token().await;
        }

        let mut guard = self.client.write().await;
        // Another caller may have completed sign-in while we waited for
        // the write lock.
        if let Some(client) = guard.as_ref() {
            return client.access_token().await;
        }

        let client = (self.factory)()?;
        info!("starting interactive sign-in");
        client.sign_in().await?;
        debug!("sign-in complete, caching authorization client");
        *guard = Some(Arc::clone(&client));

        client.access_token().await
    }
}
