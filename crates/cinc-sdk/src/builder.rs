//! Client Builder Pattern
//!
//! Provides a fluent builder API for configuring a [`CincClient`] with
//! sensible defaults and validation.
//!
//! # Example
//!
//! ```
//! use cinc_sdk::builder::CincClientBuilder;
//! use std::time::Duration;
//!
//! let builder = CincClientBuilder::new()
//!     .with_base_url("https://staging.cincapi.com/v2")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_retry_attempts(5);
//!
//! assert!(builder.validate().is_ok());
//! ```

use crate::client::CincClient;
use cinc_rest::ClientConfig;
use cinc_types::{CincError, CincResult};
use std::time::Duration;

/// Builder for configuring a CINC client
#[derive(Debug, Clone, Default)]
pub struct CincClientBuilder {
    /// Transport configuration
    pub config: ClientConfig,

    /// Token to install at build time
    pub token: Option<String>,
}

impl CincClientBuilder {
    /// Create a builder starting from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set how many times a failed request may be retried
    pub fn with_retry_attempts(mut self, attempts: u32) -> Self {
        self.config.retry_attempts = attempts;
        self
    }

    /// Set the delay before the first retry
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.config.retry_delay = delay;
        self
    }

    /// Add a header sent with every request
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(name.into(), value.into());
        self
    }

    /// Start authenticated with an existing token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Validate the configuration
    ///
    /// Returns `Ok(())` if the configuration is valid, otherwise a
    /// validation error describing the problem.
    pub fn validate(&self) -> CincResult<()> {
        self.config.validate()?;

        if matches!(self.token.as_deref(), Some("")) {
            return Err(CincError::validation("Auth token cannot be empty"));
        }

        Ok(())
    }

    /// Validate and create the client
    pub fn build(self) -> CincResult<CincClient> {
        self.validate()?;

        let client = CincClient::with_config(self.config)?;
        if let Some(token) = self.token {
            client.set_auth_token(token)?;
        }
        Ok(client)
    }
}
