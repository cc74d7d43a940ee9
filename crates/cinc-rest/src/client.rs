//! Shared HTTP transport

use crate::config::{ClientConfig, ConfigUpdate};
use crate::error::{from_transport, parse_body, status_message};
use crate::request::RequestOptions;
use crate::retry::RetryPolicy;
use crate::services::{AssetService, AuthService, MarketService, PortfolioService};
use cinc_types::{CincError, CincResult};
use parking_lot::RwLock;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE,
};
use reqwest::{Client, Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Product identifier sent with every request
pub const USER_AGENT: &str = concat!("cinc-rest/", env!("CARGO_PKG_VERSION"));

/// Responses slower than this are logged as a warning
const SLOW_RESPONSE_THRESHOLD: Duration = Duration::from_secs(5);

const INVALID_TOKEN_HEADER: &str = "Failed to build request: auth token is not a valid header value";

/// CINC REST transport
///
/// Owns the configuration and the bearer token shared by every service.
/// Failures are classified into [`CincError`] and retried with exponential
/// backoff when retryable.
///
/// # Example
///
/// ```no_run
/// use cinc_rest::{ClientConfig, RestClient};
/// use cinc_types::Asset;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = RestClient::new(ClientConfig::from_env()?)?;
///     client.set_token("my-token")?;
///
///     let assets = client.assets().get_assets().await?;
///     let raw: Vec<Asset> = client.get("/assets", None).await?;
///     assert_eq!(assets, raw);
///
///     Ok(())
/// }
/// ```
pub struct RestClient {
    http_client: Client,
    config: RwLock<ClientConfig>,
    token: RwLock<Option<SecretString>>,
}

impl RestClient {
    /// Create a client from a validated configuration
    pub fn new(config: ClientConfig) -> CincResult<Self> {
        config.validate()?;

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CincError::generic(format!("Failed to create HTTP client: {}", e)))?;

        info!(base_url = %config.base_url, "Created CINC REST client");

        Ok(Self {
            http_client,
            config: RwLock::new(config),
            token: RwLock::new(None),
        })
    }

    /// Create a client with the default configuration
    pub fn with_defaults() -> CincResult<Self> {
        Self::new(ClientConfig::default())
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> ClientConfig {
        self.config.read().clone()
    }

    /// Validate and merge a partial configuration update
    ///
    /// Requests already in flight keep the settings they started with.
    pub fn update_config(&self, update: ConfigUpdate) -> CincResult<()> {
        update.validate()?;
        let mut config = self.config.write();
        config.merge(update);
        debug!(base_url = %config.base_url, "Updated client configuration");
        Ok(())
    }

    // ========================================================================
    // Bearer Token
    // ========================================================================

    /// Send `Authorization: Bearer <token>` with every subsequent request
    pub fn set_token(&self, token: impl Into<String>) -> CincResult<()> {
        let token = token.into();
        if token.is_empty() {
            return Err(CincError::validation("Auth token cannot be empty"));
        }
        *self.token.write() = Some(SecretString::from(token));
        info!("Auth token set");
        Ok(())
    }

    /// Stop sending the `Authorization` header
    pub fn clear_token(&self) {
        if self.token.write().take().is_some() {
            info!("Auth token cleared");
        }
    }

    /// Check if a bearer token is set
    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    // ========================================================================
    // Services
    // ========================================================================

    /// Authentication endpoints
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    /// Asset endpoints
    pub fn assets(&self) -> AssetService<'_> {
        AssetService::new(self)
    }

    /// Market data endpoints
    pub fn markets(&self) -> MarketService<'_> {
        MarketService::new(self)
    }

    /// Portfolio endpoints
    pub fn portfolios(&self) -> PortfolioService<'_> {
        PortfolioService::new(self)
    }

    // ========================================================================
    // HTTP Verbs
    // ========================================================================

    /// Send a GET request
    pub async fn get<T>(&self, path: &str, options: Option<&RequestOptions>) -> CincResult<T>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, path, None::<&()>, options).await
    }

    /// Send a POST request with an optional JSON body
    pub async fn post<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> CincResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, body, options).await
    }

    /// Send a PUT request with an optional JSON body
    pub async fn put<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> CincResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, body, options).await
    }

    /// Send a DELETE request
    pub async fn delete<T>(&self, path: &str, options: Option<&RequestOptions>) -> CincResult<T>
    where
        T: DeserializeOwned,
    {
        self.request(Method::DELETE, path, None::<&()>, options).await
    }

    /// Send a PATCH request with an optional JSON body
    pub async fn patch<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> CincResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path, body, options).await
    }

    /// Send a request with retry and return the decoded body
    ///
    /// An empty response body decodes as JSON `null`, so `()` and
    /// `serde_json::Value` are valid targets for endpoints without content.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> CincResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| CincError::generic(format!("Failed to serialize request body: {}", e)))?;

        let policy = RetryPolicy::from_config(&self.config.read());
        let method = &method;
        let body = body.as_ref();

        policy
            .execute(move || self.send_once(method, path, body, options))
            .await
    }

    /// Issue a single attempt and classify its outcome
    async fn send_once<T>(
        &self,
        method: &Method,
        path: &str,
        body: Option<&Value>,
        options: Option<&RequestOptions>,
    ) -> CincResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.build_request(method, path, body, options)?;

        debug!(%method, path, "Sending request");
        let started = Instant::now();

        let response = request.send().await.map_err(|e| from_transport(&e))?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| from_transport(&e))?;

        let elapsed = started.elapsed();
        if elapsed > SLOW_RESPONSE_THRESHOLD {
            warn!(%method, path, elapsed_ms = %elapsed.as_millis(), "Slow API response");
        }

        let body = parse_body(&bytes);

        if !(200..300).contains(&status) {
            return Err(CincError::from_status(status, body, status_message(status)));
        }

        debug!(%method, path, status, elapsed_ms = %elapsed.as_millis(), "Request completed");

        let value = body.unwrap_or(Value::Null);
        <T as Deserialize>::deserialize(&value).map_err(|e| CincError::Generic {
            message: format!("Failed to decode response body: {}", e),
            status_code: Some(status),
            raw_response: Some(value.clone()),
        })
    }

    /// Build one attempt from the current config and token
    ///
    /// Locks are taken and released here so nothing is held across `.await`.
    /// Headers are layered by name, so a later layer replaces an earlier
    /// one: standard, config defaults, bearer token, per-call.
    fn build_request(
        &self,
        method: &Method,
        path: &str,
        body: Option<&Value>,
        options: Option<&RequestOptions>,
    ) -> CincResult<RequestBuilder> {
        let config = self.config.read();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        insert_headers(&mut headers, &config.default_headers)?;

        if let Some(token) = self.token.read().as_ref() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|_| CincError::generic(INVALID_TOKEN_HEADER))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        if let Some(options) = options {
            insert_headers(&mut headers, &options.headers)?;
        }

        let mut builder = self
            .http_client
            .request(method.clone(), config.url_for(path))
            .timeout(config.timeout)
            .headers(headers);

        if let Some(options) = options {
            builder = options.apply(builder);
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }

        Ok(builder)
    }
}

/// Insert headers by name, replacing any value already set
fn insert_headers(map: &mut HeaderMap, headers: &HashMap<String, String>) -> CincResult<()> {
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            CincError::generic(format!(
                "Failed to build request: invalid header name {:?}: {}",
                name, e
            ))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            CincError::generic(format!(
                "Failed to build request: invalid value for header {}: {}",
                name, e
            ))
        })?;
        map.insert(header_name, header_value);
    }
    Ok(())
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let config = self.config.read();
        f.debug_struct("RestClient")
            .field("base_url", &config.base_url)
            .field("timeout", &config.timeout)
            .field("retry_attempts", &config.retry_attempts)
            .field("has_token", &self.has_token())
            .finish()
    }
}
