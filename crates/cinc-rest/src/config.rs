//! Client configuration
//!
//! [`ClientConfig`] is validated when a [`RestClient`](crate::RestClient) is
//! built and [`ConfigUpdate`] is validated before it is merged. Out-of-range
//! values are rejected, never clamped.

use cinc_types::{CincError, CincResult};
use std::collections::HashMap;
use std::time::Duration;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.cincapi.com/v2";
/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);
/// Default number of retries after the first attempt
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
/// Default base delay for exponential backoff
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1_000);

const MIN_TIMEOUT: Duration = Duration::from_millis(1_000);
const MAX_TIMEOUT: Duration = Duration::from_millis(120_000);
const MAX_RETRY_ATTEMPTS: u32 = 10;

/// Environment variable holding the base URL
pub const ENV_BASE_URL: &str = "CINC_API_BASE_URL";
/// Environment variable holding the timeout in milliseconds
pub const ENV_TIMEOUT: &str = "CINC_API_TIMEOUT";
/// Environment variable holding the retry count
pub const ENV_RETRY_ATTEMPTS: &str = "CINC_API_RETRY_ATTEMPTS";
/// Environment variable holding the retry delay in milliseconds
pub const ENV_RETRY_DELAY: &str = "CINC_API_RETRY_DELAY";

/// Transport configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Absolute base URL every request path is appended to
    pub base_url: String,
    /// Per-request timeout (1s to 120s)
    pub timeout: Duration,
    /// Retries after the first attempt (0 to 10)
    pub retry_attempts: u32,
    /// Base delay, doubled after every retry
    pub retry_delay: Duration,
    /// Headers added to every request
    pub default_headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            default_headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the process environment
    ///
    /// Reads `CINC_API_BASE_URL`, `CINC_API_TIMEOUT`, `CINC_API_RETRY_ATTEMPTS`
    /// and `CINC_API_RETRY_DELAY`. Unset or blank variables keep their
    /// defaults. Set values are validated like any other config and never
    /// clamped, so `CINC_API_TIMEOUT=0` is a validation error rather than
    /// a fallback to the default timeout.
    pub fn from_env() -> CincResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> CincResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(base_url) = var(ENV_BASE_URL) {
            config.base_url = base_url.trim().to_string();
        }
        if let Some(raw) = var(ENV_TIMEOUT) {
            config.timeout = Duration::from_millis(parse_number(ENV_TIMEOUT, &raw)?);
        }
        if let Some(raw) = var(ENV_RETRY_ATTEMPTS) {
            config.retry_attempts = parse_number(ENV_RETRY_ATTEMPTS, &raw)?;
        }
        if let Some(raw) = var(ENV_RETRY_DELAY) {
            config.retry_delay = Duration::from_millis(parse_number(ENV_RETRY_DELAY, &raw)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of retries
    pub fn with_retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = attempts;
        self
    }

    /// Set the base retry delay
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Add a default header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Add several default headers
    pub fn with_headers(
        mut self,
        headers: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        self.default_headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Validate every field
    pub fn validate(&self) -> CincResult<()> {
        validate_base_url(&self.base_url)?;
        validate_timeout(self.timeout)?;
        validate_retry_attempts(self.retry_attempts)?;
        validate_retry_delay(self.retry_delay)
    }

    /// Apply a partial update in place
    ///
    /// Scalar fields present in `update` replace the current ones; headers
    /// are merged key by key.
    pub fn merge(&mut self, update: ConfigUpdate) {
        if let Some(base_url) = update.base_url {
            self.base_url = base_url;
        }
        if let Some(timeout) = update.timeout {
            self.timeout = timeout;
        }
        if let Some(attempts) = update.retry_attempts {
            self.retry_attempts = attempts;
        }
        if let Some(delay) = update.retry_delay {
            self.retry_delay = delay;
        }
        self.default_headers.extend(update.headers);
    }

    /// Resolve a request path against the base URL
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Partial configuration update
///
/// Only the fields that are set are validated and applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigUpdate {
    /// New base URL
    pub base_url: Option<String>,
    /// New request timeout
    pub timeout: Option<Duration>,
    /// New retry budget
    pub retry_attempts: Option<u32>,
    /// New delay before the first retry
    pub retry_delay: Option<Duration>,
    /// Headers to add or override
    pub headers: HashMap<String, String>,
}

impl ConfigUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Change the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Change the retry budget
    pub fn with_retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = Some(attempts);
        self
    }

    /// Change the delay before the first retry
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Add or override a default header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check if the update changes nothing
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Validate the fields that are set
    pub fn validate(&self) -> CincResult<()> {
        if let Some(base_url) = &self.base_url {
            validate_base_url(base_url)?;
        }
        if let Some(timeout) = self.timeout {
            validate_timeout(timeout)?;
        }
        if let Some(attempts) = self.retry_attempts {
            validate_retry_attempts(attempts)?;
        }
        if let Some(delay) = self.retry_delay {
            validate_retry_delay(delay)?;
        }
        Ok(())
    }
}

fn validate_base_url(base_url: &str) -> CincResult<()> {
    reqwest::Url::parse(base_url)
        .map(|_| ())
        .map_err(|e| CincError::validation(format!("Invalid API base URL provided: {}", e)))
}

fn validate_timeout(timeout: Duration) -> CincResult<()> {
    if timeout < MIN_TIMEOUT || timeout > MAX_TIMEOUT {
        return Err(CincError::validation(
            "Timeout must be between 1000ms and 120000ms",
        ));
    }
    Ok(())
}

fn validate_retry_attempts(attempts: u32) -> CincResult<()> {
    if attempts > MAX_RETRY_ATTEMPTS {
        return Err(CincError::validation("Retry attempts must be between 0 and 10"));
    }
    Ok(())
}

fn validate_retry_delay(delay: Duration) -> CincResult<()> {
    if delay.is_zero() {
        return Err(CincError::validation("Retry delay must be greater than 0ms"));
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> CincResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| CincError::validation(format!("{} must be a non-negative integer, got {:?}", key, raw)))
}
