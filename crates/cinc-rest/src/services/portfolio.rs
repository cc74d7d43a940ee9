//! Portfolio endpoints

use crate::client::RestClient;
use cinc_types::{CincResult, Portfolio, PortfolioListResponse, PortfolioResponse};
use serde_json::Value;
use tracing::{debug, instrument};

/// Per-user portfolios under `/portfolios`
pub struct PortfolioService<'a> {
    client: &'a RestClient,
}

impl<'a> PortfolioService<'a> {
    pub fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// List every portfolio visible to the caller
    #[instrument(skip(self))]
    pub async fn list_portfolios(&self) -> CincResult<PortfolioListResponse> {
        debug!("Fetching portfolios");
        self.client.get("/portfolios", None).await
    }

    /// Get the portfolio of a user
    #[instrument(skip(self))]
    pub async fn get_portfolio(&self, user_id: &str) -> CincResult<PortfolioResponse> {
        debug!("Fetching portfolio");
        self.client.get(&format!("/portfolios/{}", user_id), None).await
    }

    /// Create a portfolio for a user
    #[instrument(skip(self, portfolio))]
    pub async fn create_portfolio(
        &self,
        user_id: &str,
        portfolio: &Portfolio,
    ) -> CincResult<PortfolioResponse> {
        debug!(assets = portfolio.assets.len(), "Creating portfolio");
        self.client
            .post(&format!("/portfolios/{}", user_id), Some(portfolio), None)
            .await
    }

    /// Replace a portfolio
    #[instrument(skip(self, portfolio))]
    pub async fn update_portfolio(
        &self,
        user_id: &str,
        portfolio_id: &str,
        portfolio: &Portfolio,
    ) -> CincResult<PortfolioResponse> {
        debug!(assets = portfolio.assets.len(), "Updating portfolio");
        self.client
            .put(
                &format!("/portfolios/{}/{}", user_id, portfolio_id),
                Some(portfolio),
                None,
            )
            .await
    }

    /// Delete a portfolio
    #[instrument(skip(self))]
    pub async fn delete_portfolio(&self, user_id: &str, portfolio_id: &str) -> CincResult<()> {
        debug!("Deleting portfolio");
        let _: Value = self
            .client
            .delete(&format!("/portfolios/{}/{}", user_id, portfolio_id), None)
            .await?;
        Ok(())
    }
}
