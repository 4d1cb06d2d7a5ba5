//! Environment-sourced application configuration
//!
//! Configuration is resolved once at process start and passed by reference
//! into the components that need it. A missing or empty value is a
//! deployment error, surfaced immediately as a startup-time `Result` rather
//! than deferred to first use. No retries, no defaults.

use modelhub_domain::{ModelHubError, Result};

/// Environment key for the Model Hub API base URL.
pub const ENV_API_URL: &str = "MODELHUB_API_URL";
/// Environment key for the project identifier.
pub const ENV_PROJECT_ID: &str = "MODELHUB_PROJECT_ID";
/// Environment key for the identity provider authority.
pub const ENV_AUTH_AUTHORITY: &str = "MODELHUB_AUTH_AUTHORITY";
/// Environment key for the OAuth client id.
pub const ENV_AUTH_CLIENT_ID: &str = "MODELHUB_AUTH_CLIENT_ID";
/// Environment key for the sign-in redirect URL.
pub const ENV_AUTH_REDIRECT_URL: &str = "MODELHUB_AUTH_REDIRECT_URL";
/// Environment key for the requested OAuth scopes.
pub const ENV_AUTH_SCOPES: &str = "MODELHUB_AUTH_SCOPES";

/// OAuth parameters for the external authorization client.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub authority: String,
    pub client_id: String,
    pub redirect_url: String,
    /// Space-separated scope list, passed through to the identity provider.
    pub scopes: String,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the models collection API.
    pub api_url: String,
    /// Project whose models this deployment serves.
    pub project_id: String,
    pub auth: AuthSettings,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ModelHubError::Config`] naming the first key that is
    /// missing or empty.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_url: require_env(ENV_API_URL)?,
            project_id: require_env(ENV_PROJECT_ID)?,
            auth: AuthSettings {
                authority: require_env(ENV_AUTH_AUTHORITY)?,
                client_id: require_env(ENV_AUTH_CLIENT_ID)?,
                redirect_url: require_env(ENV_AUTH_REDIRECT_URL)?,
                scopes: require_env(ENV_AUTH_SCOPES)?,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ModelHubError::Config(format!(
            "missing configuration: key {key} must have a value"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    // from_env reads fixed keys; serialize tests that mutate them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ALL_KEYS: [&str; 6] = [
        ENV_API_URL,
        ENV_PROJECT_ID,
        ENV_AUTH_AUTHORITY,
        ENV_AUTH_CLIENT_ID,
        ENV_AUTH_REDIRECT_URL,
        ENV_AUTH_SCOPES,
    ];

    fn set_all() {
        std::env::set_var(ENV_API_URL, "https://api.example.com/models");
        std::env::set_var(ENV_PROJECT_ID, "project-1");
        std::env::set_var(ENV_AUTH_AUTHORITY, "https://ims.example.com");
        std::env::set_var(ENV_AUTH_CLIENT_ID, "client-1");
        std::env::set_var(ENV_AUTH_REDIRECT_URL, "http://localhost:3000/callback");
        std::env::set_var(ENV_AUTH_SCOPES, "models:read models:modify");
    }

    fn clear_all() {
        for key in ALL_KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn loads_when_every_key_is_present() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_all();

        let config = AppConfig::from_env().expect("all keys set");
        assert_eq!(config.api_url, "https://api.example.com/models");
        assert_eq!(config.project_id, "project-1");
        assert_eq!(config.auth.client_id, "client-1");

        clear_all();
    }

    #[test]
    fn missing_key_fails_naming_the_key() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_all();
        std::env::remove_var(ENV_PROJECT_ID);

        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ModelHubError::Config(_)));
        assert!(err.to_string().contains(ENV_PROJECT_ID));

        clear_all();
    }

    #[test]
    fn empty_value_is_treated_as_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_all();
        std::env::set_var(ENV_AUTH_SCOPES, "  ");

        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(ENV_AUTH_SCOPES));

        clear_all();
    }
}
