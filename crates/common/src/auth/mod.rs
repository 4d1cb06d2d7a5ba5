//! Authorization: lazy, memoized bearer-token acquisition
//!
//! The interactive sign-in flow itself belongs to an external authorization
//! client behind the [`AuthorizationClient`] trait; this module only drives
//! the state machine around it and guarantees sign-in happens at most once.

mod service;
mod traits;
mod types;

pub use service::{AuthorizationClientFactory, AuthorizationService};
pub use traits::AuthorizationClient;
pub use types::AccessToken;
