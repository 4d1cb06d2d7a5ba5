//! Collection API client with transparent pagination

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt, TryStreamExt};
use modelhub_common::AppConfig;
use modelhub_domain::{
    Changeset, ChangesetsPage, CollectionPage, Model, ModelHubError, ModelsPage, NamedVersion,
    NamedVersionCreate, NamedVersionEnvelope, NamedVersionsPage, Result,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::auth::AccessTokenProvider;
use crate::http::HttpClient;

/// Response verbosity selector for collection requests.
///
/// Sent as a `Prefer` header: minimal omits fields unnecessary for listing,
/// representation includes linked-resource metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferReturn {
    /// Only the fields needed for listing.
    Minimal,
    /// Full entity metadata, including reference links.
    Representation,
}

impl PreferReturn {
    fn header_value(self) -> &'static str {
        match self {
            Self::Minimal => "return=minimal",
            Self::Representation => "return=representation",
        }
    }
}

/// Configuration for [`ModelHubClient`].
#[derive(Debug, Clone)]
pub struct ModelHubClientConfig {
    /// Base URL of the models collection, e.g.
    /// `https://api.example.com/models`.
    pub base_url: String,
    /// Page size requested from collection endpoints via `$top`.
    pub page_size: usize,
    /// Upper bound on concurrent named-version resolution requests during
    /// [`ModelHubClient::list_changesets`].
    pub named_version_concurrency: usize,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl ModelHubClientConfig {
    /// Configuration with default paging and concurrency for the given
    /// base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_size: 100,
            named_version_concurrency: 8,
            timeout: Duration::from_secs(30),
        }
    }

    /// Configuration derived from the environment-sourced [`AppConfig`].
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::new(config.api_url.clone())
    }
}

/// Client for the Model Hub collection API.
///
/// All operations are authenticated via the injected
/// [`AccessTokenProvider`] and never retry; failures propagate to the
/// caller unchanged.
pub struct ModelHubClient {
    http: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    config: ModelHubClientConfig,
}

impl std::fmt::Debug for ModelHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHubClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ModelHubClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns [`ModelHubError::Config`] if the base URL does not parse,
    /// or an error if the HTTP client cannot be constructed.
    pub fn new(config: ModelHubClientConfig, auth: Arc<dyn AccessTokenProvider>) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|err| {
            ModelHubError::Config(format!("invalid base URL {}: {err}", config.base_url))
        })?;

        let http = HttpClient::builder().timeout(config.timeout).build()?;

        Ok(Self { http, auth, config })
    }

    /// Create a builder for fluent configuration.
    pub fn builder() -> ModelHubClientBuilder {
        ModelHubClientBuilder::default()
    }

    /// Minimal representation for all models of a project, across every
    /// page.
    ///
    /// # Errors
    ///
    /// Propagates token acquisition, transport and non-2xx failures.
    #[instrument(skip(self))]
    pub async fn list_models(&self, project_id: &str) -> Result<Vec<Model>> {
        let first_page = format!(
            "{}?projectId={}&$skip=0&$top={}",
            self.config.base_url, project_id, self.config.page_size
        );

        self.entities_in_pages::<ModelsPage>(first_page, Some(PreferReturn::Minimal)).await
    }

    /// Minimal representation for all named versions of a model, across
    /// every page.
    ///
    /// # Errors
    ///
    /// Propagates token acquisition, transport and non-2xx failures.
    #[instrument(skip(self))]
    pub async fn list_named_versions(&self, model_id: &str) -> Result<Vec<NamedVersion>> {
        let first_page = format!(
            "{}/{}/namedversions?$skip=0&$top={}",
            self.config.base_url, model_id, self.config.page_size
        );

        self.entities_in_pages::<NamedVersionsPage>(first_page, Some(PreferReturn::Minimal)).await
    }

    /// Full representation for all changesets of a model, with the linked
    /// named version resolved for every changeset that has one.
    ///
    /// Resolution requests run concurrently, bounded by
    /// [`ModelHubClientConfig::named_version_concurrency`], and may
    /// complete in any order; the returned array keeps page-concatenation
    /// order regardless. If any resolution fails the whole operation fails
    /// and no partial result is returned.
    ///
    /// # Errors
    ///
    /// Propagates token acquisition, transport and non-2xx failures from
    /// both the page walk and the resolution fan-out.
    #[instrument(skip(self))]
    pub async fn list_changesets(&self, model_id: &str) -> Result<Vec<Changeset>> {
        let first_page = format!(
            "{}/{}/changesets?$skip=0&$top={}",
            self.config.base_url, model_id, self.config.page_size
        );

        let mut changesets = self
            .entities_in_pages::<ChangesetsPage>(first_page, Some(PreferReturn::Representation))
            .await?;

        let jobs: Vec<(usize, String)> = changesets
            .iter()
            .enumerate()
            .filter_map(|(idx, changeset)| {
                changeset.links.named_version.as_ref().map(|link| (idx, link.href.clone()))
            })
            .collect();

        debug!(total = changesets.len(), linked = jobs.len(), "resolving named version links");

        let resolved: Vec<(usize, NamedVersion)> = stream::iter(jobs)
            .map(|(idx, href)| self.resolve_named_version(idx, href))
            .buffer_unordered(self.config.named_version_concurrency.max(1))
            .try_collect()
            .await?;

        for (idx, named_version) in resolved {
            changesets[idx].named_version = Some(named_version);
        }

        Ok(changesets)
    }

    /// Create a named version for a model, optionally tied to a changeset.
    ///
    /// Fire-and-forget besides success/failure: server-assigned fields in
    /// the response are not surfaced.
    ///
    /// # Errors
    ///
    /// Propagates token acquisition, transport and non-2xx failures. Never
    /// retried; re-issuing on failure is the caller's decision.
    #[instrument(skip(self, description))]
    pub async fn create_named_version(
        &self,
        model_id: &str,
        changeset_id: Option<&str>,
        name: &str,
        description: Option<&str>,
    ) -> Result<()> {
        let url = format!("{}/{}/namedversions", self.config.base_url, model_id);
        let body = NamedVersionCreate {
            name: name.to_owned(),
            description: description.map(str::to_owned),
            changeset_id: changeset_id.map(str::to_owned),
        };

        let token = self.auth.access_token().await?;
        let request = self
            .http
            .request(Method::POST, &url)
            .header("Authorization", token.authorization_value())
            .json(&body);

        let response = self.http.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ModelHubError::HttpStatus(status.as_u16()));
        }

        debug!(%url, "named version created");
        Ok(())
    }

    async fn resolve_named_version(
        &self,
        idx: usize,
        href: String,
    ) -> Result<(usize, NamedVersion)> {
        let envelope: NamedVersionEnvelope = self.get_json(&href, None).await?;
        Ok((idx, envelope.named_version))
    }

    /// Walk a paginated collection via server-supplied `next` links.
    ///
    /// Pages are concatenated in traversal order, never reordered or
    /// deduplicated. The server always returns a `next` link while entities
    /// remain; its absence means the collection is exhausted. An empty
    /// response body on any page short-circuits to an empty overall result.
    async fn entities_in_pages<P>(
        &self,
        first_page_url: String,
        prefer: Option<PreferReturn>,
    ) -> Result<Vec<P::Entity>>
    where
        P: CollectionPage + DeserializeOwned,
    {
        let mut result = Vec::new();
        let mut page_url = first_page_url;

        loop {
            let body = self.send_get(&page_url, prefer).await?;
            if body.trim().is_empty() {
                debug!(url = %page_url, "empty page body, treating as end of collection");
                return Ok(Vec::new());
            }

            let page: P = serde_json::from_str(&body).map_err(|err| {
                ModelHubError::Internal(format!("failed to parse page from {page_url}: {err}"))
            })?;

            let next = page.next_href().map(str::to_owned);
            result.extend(page.into_entities());

            match next {
                Some(href) => page_url = href,
                None => break,
            }
        }

        Ok(result)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        prefer: Option<PreferReturn>,
    ) -> Result<T> {
        let body = self.send_get(url, prefer).await?;
        serde_json::from_str(&body).map_err(|err| {
            ModelHubError::Internal(format!("failed to parse response from {url}: {err}"))
        })
    }

    async fn send_get(&self, url: &str, prefer: Option<PreferReturn>) -> Result<String> {
        let token = self.auth.access_token().await?;

        let mut request = self
            .http
            .request(Method::GET, url)
            .header("Authorization", token.authorization_value());
        if let Some(prefer) = prefer {
            request = request.header("Prefer", prefer.header_value());
        }

        let response = self.http.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ModelHubError::HttpStatus(status.as_u16()));
        }

        response.text().await.map_err(|err| ModelHubError::Network(err.to_string()))
    }
}

/// Builder for [`ModelHubClient`].
#[derive(Default)]
pub struct ModelHubClientBuilder {
    config: Option<ModelHubClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
}

impl ModelHubClientBuilder {
    /// Set the client configuration.
    #[must_use]
    pub fn config(mut self, config: ModelHubClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the access token provider.
    #[must_use]
    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or client creation
    /// fails.
    pub fn build(self) -> Result<ModelHubClient> {
        let config =
            self.config.ok_or_else(|| ModelHubError::Config("configuration not set".to_string()))?;
        let auth =
            self.auth.ok_or_else(|| ModelHubError::Config("auth provider not set".to_string()))?;

        ModelHubClient::new(config, auth)
    }
}
