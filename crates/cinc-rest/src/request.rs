//! Per-call request overrides

use reqwest::RequestBuilder;
use std::collections::HashMap;
use std::time::Duration;

/// Options applied to a single request on top of the client configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Extra headers, applied last so they override defaults
    pub headers: HashMap<String, String>,
    /// Query string pairs, URL-encoded by the transport
    pub query: Vec<(String, String)>,
    /// Timeout replacing the configured one for this call
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header for this call
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Override the timeout for this call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Apply query and timeout; headers are layered by the client
    pub(crate) fn apply(&self, mut builder: RequestBuilder) -> RequestBuilder {
        if !self.query.is_empty() {
            builder = builder.query(&self.query);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_options() {
        let options = RequestOptions::new()
            .with_header("X-Request-Id", "abc")
            .with_query("query", "gold & silver")
            .with_timeout(Duration::from_secs(2));

        let request = options
            .apply(reqwest::Client::new().get("https://api.cincapi.com/v2/market/search"))
            .build()
            .unwrap();

        // Headers are merged by the client, not here
        assert!(request.headers().get("x-request-id").is_none());
        assert_eq!(request.url().query(), Some("query=gold+%26+silver"));
        assert_eq!(request.timeout(), Some(&Duration::from_secs(2)));
    }
}
