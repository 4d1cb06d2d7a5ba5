//! Trait abstracting the external authorization client
//!
//! Enables dependency injection and testing with mock implementations; the
//! production implementation wraps whatever identity-provider SDK the host
//! application uses.

use async_trait::async_trait;
use modelhub_domain::Result;

use super::types::AccessToken;

/// External identity-provider client.
///
/// How sign-in is presented to the user (redirect, popup, system browser)
/// is the implementor's concern. So is refreshing an expired token: once
/// signed in, [`access_token`](Self::access_token) is expected to return a
/// usable token for the lifetime of the client.
#[async_trait]
pub trait AuthorizationClient: Send + Sync {
    /// Perform interactive sign-in.
    ///
    /// Suspends until the identity provider completes or the user cancels.
    ///
    /// # Errors
    ///
    /// Returns [`ModelHubError::Auth`](modelhub_domain::ModelHubError::Auth)
    /// if sign-in fails or is cancelled.
    async fn sign_in(&self) -> Result<()>;

    /// The current access token.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is available, for example when the
    /// client was never signed in.
    async fn access_token(&self) -> Result<AccessToken>;
}
