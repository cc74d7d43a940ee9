//! Authentication endpoints

use crate::client::RestClient;
use cinc_types::{AuthResponse, CincResult, LoginRequest};
use serde_json::{json, Value};
use tracing::{debug, instrument};

/// Login and logout
pub struct AuthService<'a> {
    client: &'a RestClient,
}

impl<'a> AuthService<'a> {
    pub fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a bearer token
    ///
    /// The token is returned, not installed. Use
    /// [`RestClient::set_token`] to send it with later requests.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> CincResult<AuthResponse> {
        debug!("Logging in");
        let request = LoginRequest::new(email, password);
        self.client.post("/auth/login", Some(&request), None).await
    }

    /// Invalidate the current session on the server
    #[instrument(skip(self))]
    pub async fn logout(&self) -> CincResult<()> {
        debug!("Logging out");
        let _: Value = self.client.post("/auth/logout", Some(&json!({})), None).await?;
        Ok(())
    }
}
