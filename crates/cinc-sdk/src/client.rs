//! CINC client facade
//!
//! [`CincClient`] wraps one [`RestClient`] and exposes every service bound
//! to it, plus session helpers that keep the bearer token in sync with
//! login and logout.

use crate::builder::CincClientBuilder;
use cinc_rest::{
    AssetService, AuthService, ClientConfig, ConfigUpdate, MarketService, PortfolioService,
    RestClient,
};
use cinc_types::{AuthResponse, CincResult};
use tracing::{info, instrument, warn};

/// High-level CINC API client
///
/// All services share the same transport, so a token installed by
/// [`authenticate`](Self::authenticate) or a config change made through
/// [`update_config`](Self::update_config) applies to every service.
#[derive(Debug)]
pub struct CincClient {
    rest: RestClient,
}

impl CincClient {
    /// Create a client with the default configuration
    pub fn new() -> CincResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from an explicit configuration
    pub fn with_config(config: ClientConfig) -> CincResult<Self> {
        Ok(Self::from_rest(RestClient::new(config)?))
    }

    /// Create a client configured from `CINC_API_*` environment variables
    pub fn from_env() -> CincResult<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Wrap an existing transport
    pub fn from_rest(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Create a builder for configuring the client
    pub fn builder() -> CincClientBuilder {
        CincClientBuilder::new()
    }

    /// Underlying transport, for raw requests
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    // ========================================================================
    // Services
    // ========================================================================

    pub fn auth(&self) -> AuthService<'_> {
        self.rest.auth()
    }

    pub fn assets(&self) -> AssetService<'_> {
        self.rest.assets()
    }

    pub fn markets(&self) -> MarketService<'_> {
        self.rest.markets()
    }

    pub fn portfolios(&self) -> PortfolioService<'_> {
        self.rest.portfolios()
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Log in and install the returned token on the transport
    ///
    /// On failure the current token, if any, is left untouched.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> CincResult<AuthResponse> {
        let response = self.auth().login(email, password).await?;
        self.rest.set_token(response.token.as_str())?;
        info!(user_id = %response.user.id, "Authenticated");
        Ok(response)
    }

    /// Log out on the server and drop the local token
    ///
    /// The token is cleared even when the server call fails; the error is
    /// still returned.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> CincResult<()> {
        let result = self.auth().logout().await;
        self.rest.clear_token();

        if let Err(e) = &result {
            warn!(error = %e, "Logout request failed, local token cleared");
        }
        result
    }

    /// Install a token obtained elsewhere
    pub fn set_auth_token(&self, token: impl Into<String>) -> CincResult<()> {
        self.rest.set_token(token)
    }

    /// Drop the token without contacting the server
    pub fn clear_auth_token(&self) {
        self.rest.clear_token();
    }

    /// Check if requests currently carry a bearer token
    pub fn is_authenticated(&self) -> bool {
        self.rest.has_token()
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Validate and apply a partial configuration update
    pub fn update_config(&self, update: ConfigUpdate) -> CincResult<()> {
        self.rest.update_config(update)
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> ClientConfig {
        self.rest.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinc_types::ErrorKind;
    use std::time::Duration;

    #[test]
    fn test_default_client() {
        let client = CincClient::new().unwrap();
        assert!(!client.is_authenticated());
        assert_eq!(client.config(), ClientConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        let err = CincClient::with_config(
            ClientConfig::default().with_timeout(Duration::from_secs(500)),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_token_delegation() {
        let client = CincClient::new().unwrap();

        assert!(client.set_auth_token("").is_err());
        assert!(!client.is_authenticated());

        client.set_auth_token("abc").unwrap();
        assert!(client.is_authenticated());
        assert!(client.rest().has_token());

        client.clear_auth_token();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_update_config() {
        let client = CincClient::new().unwrap();

        client
            .update_config(ConfigUpdate::new().with_retry_attempts(7))
            .unwrap();
        assert_eq!(client.config().retry_attempts, 7);

        let err = client
            .update_config(ConfigUpdate::new().with_retry_attempts(42))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(client.config().retry_attempts, 7);
    }
}
